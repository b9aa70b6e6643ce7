use std::sync::mpsc::Sender;

use chrono::{DateTime, Local};
use log::error;

use crate::history::FuelHistory;
use crate::telemetry::{JitterSource, TelemetryRecord, TelemetrySimulator, TelemetrySnapshot};
use crate::telemetry::simulator::clamp_progress;

/// Toolkit-independent state behind the dashboard window.
///
/// # Fields
///
/// * `simulator` - Produces a snapshot for each progress value.
/// * `progress_pct` - Current journey progress, always within `[0, 100]`.
/// * `snapshot` - Latest snapshot, `None` until the first update.
/// * `history` - Capped fuel history feeding the chart.
/// * `recorder` - Optional channel receiving every snapshot for recording.
pub struct Dashboard<J: JitterSource> {
    simulator: TelemetrySimulator<J>,
    progress_pct: f64,
    snapshot: Option<TelemetrySnapshot>,
    history: FuelHistory,
    point_no: usize,
    recorder: Option<Sender<TelemetryRecord>>,
}

impl<J: JitterSource> Dashboard<J> {
    pub fn new(simulator: TelemetrySimulator<J>, history_capacity: usize) -> Self {
        Self {
            simulator,
            progress_pct: 0.,
            snapshot: None,
            history: FuelHistory::new(history_capacity),
            point_no: 0,
            recorder: None,
        }
    }

    pub fn with_recorder(mut self, recorder: Sender<TelemetryRecord>) -> Self {
        self.recorder = Some(recorder);
        self
    }

    pub fn set_progress(&mut self, progress_pct: f64) -> &TelemetrySnapshot {
        self.set_progress_at(progress_pct, Local::now())
    }

    /// Recompute the snapshot for `progress_pct` and append it to the history
    /// as recorded at `now`.
    pub fn set_progress_at(
        &mut self,
        progress_pct: f64,
        now: DateTime<Local>,
    ) -> &TelemetrySnapshot {
        self.progress_pct = clamp_progress(progress_pct);
        let snapshot = self.simulator.snapshot(self.progress_pct);
        self.history.record(&snapshot, now);

        if let Some(recorder) = self.recorder.take() {
            let record =
                TelemetryRecord::new(self.point_no, self.progress_pct, snapshot.clone(), now);
            match recorder.send(record) {
                Ok(()) => self.recorder = Some(recorder),
                Err(e) => error!("Telemetry recorder is gone, recording stopped: {}", e),
            }
        }
        self.point_no += 1;

        self.snapshot.insert(snapshot)
    }

    pub fn progress(&self) -> f64 {
        self.progress_pct
    }

    pub fn snapshot(&self) -> Option<&TelemetrySnapshot> {
        self.snapshot.as_ref()
    }

    pub fn history(&self) -> &FuelHistory {
        &self.history
    }

    pub fn simulator(&self) -> &TelemetrySimulator<J> {
        &self.simulator
    }

    pub fn is_recording(&self) -> bool {
        self.recorder.is_some()
    }
}
