pub mod alerts;
pub(crate) mod collector;
pub mod jitter;
pub mod simulator;

use std::fmt;

pub use alerts::{AlertSeverity, AlertThresholds, TelemetryAlert};
pub use collector::{collect_journey, journey_steps};
pub use jitter::{FixedJitter, JitterSource, RandomJitter};
pub use simulator::TelemetrySimulator;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct Position {
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lng: f64,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Derived telemetry for a single point of the journey.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct TelemetrySnapshot {
    /// Interpolated position between the current and next waypoint
    pub position: Position,
    /// "<current> → <next>" waypoint names
    pub segment_label: String,
    /// Kilometers driven since the start of the route
    pub distance_km: f64,
    /// Fuel level, 10..=90 percent
    pub fuel_level_pct: f64,
    /// Current speed in km/h, 0 once the destination is reached
    pub speed_kph: f64,
    /// Engine temperature in degrees Celsius
    pub temperature_c: f64,
    /// Active alerts, in rule evaluation order
    pub alerts: Vec<TelemetryAlert>,
}

impl TelemetrySnapshot {
    pub fn has_alert(&self, alert: TelemetryAlert) -> bool {
        self.alerts.contains(&alert)
    }

    pub fn is_parked(&self) -> bool {
        self.speed_kph == 0.
    }
}

/// A snapshot tagged with when and where in the journey it was taken. This is
/// the unit written to recording files.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct TelemetryRecord {
    pub point_no: usize,
    /// Unix epoch milliseconds of the local clock reading for this point
    pub timestamp_ms: i64,
    pub progress_pct: f64,
    pub snapshot: TelemetrySnapshot,
}

impl TelemetryRecord {
    pub fn new(
        point_no: usize,
        progress_pct: f64,
        snapshot: TelemetrySnapshot,
        recorded_at: DateTime<Local>,
    ) -> Self {
        Self {
            point_no,
            timestamp_ms: recorded_at.timestamp_millis(),
            progress_pct,
            snapshot,
        }
    }
}
