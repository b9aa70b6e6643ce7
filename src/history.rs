use std::collections::VecDeque;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::telemetry::TelemetrySnapshot;

pub const DEFAULT_HISTORY_CAPACITY: usize = 20;
const TIMESTAMP_FORMAT: &str = "%H:%M:%S";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HistoryEntry {
    /// Local wall-clock time the entry was recorded, HH:MM:SS
    pub timestamp: String,
    pub fuel_level_pct: f64,
    pub distance_km: f64,
}

impl HistoryEntry {
    pub fn from_snapshot(snapshot: &TelemetrySnapshot, recorded_at: DateTime<Local>) -> Self {
        Self {
            timestamp: recorded_at.format(TIMESTAMP_FORMAT).to_string(),
            fuel_level_pct: snapshot.fuel_level_pct,
            distance_km: snapshot.distance_km,
        }
    }
}

/// Bounded FIFO of recent fuel readings. Once full, every push evicts the
/// oldest entry.
#[derive(Clone, Debug)]
pub struct FuelHistory {
    entries: VecDeque<HistoryEntry>,
    capacity: usize,
}

impl Default for FuelHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl FuelHistory {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn record(&mut self, snapshot: &TelemetrySnapshot, recorded_at: DateTime<Local>) {
        self.push(HistoryEntry::from_snapshot(snapshot, recorded_at));
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn oldest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Timestamp of the entry plotted nearest to `position` on the chart's x
    /// axis. Entries are plotted at their index, oldest first.
    pub fn timestamp_at(&self, position: f64) -> Option<&str> {
        if !position.is_finite() || position < -0.5 {
            return None;
        }
        self.entries
            .get(position.round() as usize)
            .map(|entry| entry.timestamp.as_str())
    }

    /// `[position, fuel]` pairs in insertion order, ready for plotting.
    pub fn fuel_points(&self) -> Vec<[f64; 2]> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, entry)| [i as f64, entry.fuel_level_pct])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn entry(fuel: f64) -> HistoryEntry {
        HistoryEntry {
            timestamp: "12:00:00".to_string(),
            fuel_level_pct: fuel,
            distance_km: (90. - fuel) * 10.,
        }
    }

    #[test]
    fn test_history_capped_fifo() {
        let mut history = FuelHistory::default();
        for i in 0..50 {
            history.push(entry(i as f64));
            assert!(history.len() <= DEFAULT_HISTORY_CAPACITY);
        }

        assert_eq!(history.len(), 20);
        assert_eq!(history.oldest().unwrap().fuel_level_pct, 30.);
        assert_eq!(history.latest().unwrap().fuel_level_pct, 49.);
        let fuels: Vec<f64> = history.iter().map(|e| e.fuel_level_pct).collect();
        assert_eq!(fuels, (30..50).map(|i| i as f64).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_capacity_raised() {
        let mut history = FuelHistory::new(0);
        assert_eq!(history.capacity(), 1);
        history.push(entry(80.));
        history.push(entry(70.));
        assert_eq!(history.len(), 1);
        assert_eq!(history.latest().unwrap().fuel_level_pct, 70.);
    }

    #[test]
    fn test_record_snapshot() {
        let mut history = FuelHistory::new(5);
        let snapshot = TelemetrySnapshot {
            distance_km: 262.,
            fuel_level_pct: 63.8,
            ..Default::default()
        };
        let recorded_at = Local.with_ymd_and_hms(2024, 5, 1, 14, 3, 9).unwrap();

        history.record(&snapshot, recorded_at);

        assert_eq!(
            history.latest(),
            Some(&HistoryEntry {
                timestamp: "14:03:09".to_string(),
                fuel_level_pct: 63.8,
                distance_km: 262.,
            })
        );
    }

    #[test]
    fn test_fuel_points() {
        let mut history = FuelHistory::new(3);
        assert!(history.fuel_points().is_empty());
        for fuel in [90., 80., 70., 60.] {
            history.push(entry(fuel));
        }
        assert_eq!(
            history.fuel_points(),
            vec![[0., 80.], [1., 70.], [2., 60.]]
        );
    }

    #[test]
    fn test_timestamp_at_chart_position() {
        let mut history = FuelHistory::new(3);
        assert_eq!(history.timestamp_at(0.), None);
        for (second, fuel) in [(1, 90.), (2, 80.), (3, 70.), (4, 60.)] {
            history.push(HistoryEntry {
                timestamp: format!("10:00:{:02}", second),
                fuel_level_pct: fuel,
                distance_km: (90. - fuel) * 10.,
            });
        }

        // the first reading was evicted, position 0 is now the second one
        assert_eq!(history.timestamp_at(0.), Some("10:00:02"));
        assert_eq!(history.timestamp_at(2.), Some("10:00:04"));
        assert_eq!(history.timestamp_at(1.4), Some("10:00:03"));
        assert_eq!(history.timestamp_at(1.6), Some("10:00:04"));
        assert_eq!(history.timestamp_at(3.), None);
        assert_eq!(history.timestamp_at(-1.), None);
        assert_eq!(history.timestamp_at(f64::NAN), None);
    }
}
