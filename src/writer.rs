use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    sync::mpsc::Receiver,
};

use log::{debug, error, warn};
use serde_jsonlines::JsonLinesWriter;

use crate::{TruckMonitorError, history::FuelHistory, telemetry::TelemetryRecord};

/// Write every record received to `file` as JSON Lines until all senders are
/// dropped. Returns the number of records written, which is less than the
/// number received when some writes failed.
pub fn write_telemetry(
    file: &Path,
    telemetry_receiver: Receiver<TelemetryRecord>,
) -> Result<usize, TruckMonitorError> {
    let telemetry_file =
        File::create(file).map_err(|e| TruckMonitorError::WriterError { source: e })?;
    write_telemetry_to(BufWriter::new(telemetry_file), telemetry_receiver)
}

pub fn write_telemetry_to<W: Write>(
    output: W,
    telemetry_receiver: Receiver<TelemetryRecord>,
) -> Result<usize, TruckMonitorError> {
    let mut writer = JsonLinesWriter::new(output);
    let mut written = 0;
    let mut failed = 0;
    for record in &telemetry_receiver {
        match writer.write(&record) {
            Ok(()) => written += 1,
            Err(e) => {
                failed += 1;
                error!(
                    "Error while writing telemetry record {} to output: {}",
                    record.point_no, e
                );
            }
        }
    }
    writer
        .flush()
        .map_err(|e| TruckMonitorError::WriterError { source: e })?;
    if failed > 0 {
        warn!("{} telemetry records could not be written", failed);
    }
    debug!("Wrote {} telemetry records", written);
    Ok(written)
}

/// Export the current fuel history as JSON Lines, oldest entry first.
pub fn export_history(file: &Path, history: &FuelHistory) -> Result<(), TruckMonitorError> {
    serde_jsonlines::write_json_lines(file, history.iter())
        .map_err(|e| TruckMonitorError::WriterError { source: e })
}
