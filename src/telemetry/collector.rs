use std::sync::mpsc::Sender;

use chrono::Local;
use itertools::Itertools;
use log::{debug, error};

use crate::TruckMonitorError;

use super::{JitterSource, TelemetryRecord, TelemetrySimulator};

/// Smallest accepted sweep step, which keeps a sweep near 10 000 records
const MIN_STEP_PCT: f64 = 0.01;
const MAX_STEP_PCT: f64 = 100.;

/// Progress values visited by a headless sweep with the given step: 0, step,
/// 2 * step, ... always finishing on 100.
pub fn journey_steps(step_pct: f64) -> Result<Vec<f64>, TruckMonitorError> {
    if !(MIN_STEP_PCT..=MAX_STEP_PCT).contains(&step_pct) {
        return Err(TruckMonitorError::InvalidUserInput {
            field: "step".to_string(),
            reason: format!("{} must be in [{}, {}]", step_pct, MIN_STEP_PCT, MAX_STEP_PCT),
        });
    }

    let count = (MAX_STEP_PCT / step_pct).ceil() as usize;
    Ok((0..=count)
        .map(|i| (i as f64 * step_pct).min(MAX_STEP_PCT))
        .dedup()
        .collect())
}

/// Sweep the journey from start to destination, broadcasting one record per
/// step. Returns the number of records sent.
pub fn collect_journey<J: JitterSource>(
    simulator: &mut TelemetrySimulator<J>,
    step_pct: f64,
    telemetry_sender: Sender<TelemetryRecord>,
) -> Result<usize, TruckMonitorError> {
    let steps = journey_steps(step_pct)?;
    debug!("Simulating journey in {} steps", steps.len());

    for (point_no, progress_pct) in steps.iter().enumerate() {
        let snapshot = simulator.snapshot(*progress_pct);
        let record = TelemetryRecord::new(point_no, *progress_pct, snapshot, Local::now());
        telemetry_sender.send(record).map_err(|e| {
            error!("Could not send telemetry record {}: {}", point_no, e);
            TruckMonitorError::from(e)
        })?;
    }

    Ok(steps.len())
}
