// Error types for truck-monitor

use crate::telemetry::TelemetryRecord;
use snafu::Snafu;
use std::{io, sync::mpsc::SendError};

#[derive(Debug, Snafu)]
pub enum TruckMonitorError {
    // Route errors
    #[snafu(display("Invalid route: {reason}"))]
    InvalidRoute { reason: String },
    #[snafu(display("Error reading route file"))]
    RouteIOError { source: io::Error },
    #[snafu(display("Error parsing route file"))]
    RouteParseError { source: serde_json::Error },

    // Errors while broadcasting telemetry records
    #[snafu(display("Error broadcasting telemetry record"))]
    TelemetryBroadcastError {
        source: Box<SendError<TelemetryRecord>>,
    },

    // Errors for the telemetry writer
    #[snafu(display("Error writing telemetry file"))]
    WriterError { source: io::Error },

    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error reading or writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },
    #[snafu(display("Error parsing config file"))]
    ConfigParseError { source: serde_json::Error },

    // User input validation errors
    #[snafu(display("Invalid user input: {field} - {reason}"))]
    InvalidUserInput { field: String, reason: String },

    // UI errors
    #[snafu(display("Could not start dashboard window: {description}"))]
    UiError { description: String },
}

impl From<SendError<TelemetryRecord>> for TruckMonitorError {
    fn from(value: SendError<TelemetryRecord>) -> Self {
        TruckMonitorError::TelemetryBroadcastError {
            source: Box::new(value),
        }
    }
}
