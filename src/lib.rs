// Library interface for truck-monitor
// This allows integration tests to access internal modules

pub mod config;
pub mod dashboard;
pub mod errors;
pub mod history;
pub mod route;
pub mod telemetry;
pub mod ui;
pub mod units;
pub mod writer;

// Re-export commonly used types
pub use config::AppConfig;
pub use dashboard::Dashboard;
pub use errors::TruckMonitorError;
pub use history::{FuelHistory, HistoryEntry};
pub use route::{Route, Waypoint};
pub use telemetry::{TelemetryAlert, TelemetryRecord, TelemetrySimulator, TelemetrySnapshot};
pub use units::UnitSystem;
