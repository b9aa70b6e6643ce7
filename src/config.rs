use std::path::{Path, PathBuf};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::TruckMonitorError;
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::telemetry::AlertThresholds;
use crate::units::UnitSystem;

const CONFIG_DIR_NAME: &str = "truck-monitor";
const CONFIG_FILE_NAME: &str = "config.json";
pub const DEFAULT_TRUCK_ID: &str = "GJ01XX1234";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub truck_id: String,
    pub history_capacity: usize,
    pub units: UnitSystem,
    pub alert_thresholds: AlertThresholds,
    /// JSON route file replacing the built-in route
    pub route_file: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            truck_id: DEFAULT_TRUCK_ID.to_string(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            units: UnitSystem::default(),
            alert_thresholds: AlertThresholds::default(),
            route_file: None,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> Option<PathBuf> {
        Some(
            dirs::config_dir()?
                .join(CONFIG_DIR_NAME)
                .join(CONFIG_FILE_NAME),
        )
    }

    /// Load the config from the user's config directory, `None` if it was
    /// never saved.
    pub fn from_local_file() -> Result<Option<Self>, TruckMonitorError> {
        let config_path = Self::default_path().ok_or(TruckMonitorError::NoConfigDir)?;
        if config_path.exists() {
            Self::from_file(&config_path).map(Some)
        } else {
            Ok(None)
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, TruckMonitorError> {
        debug!("Loading config from {:?}", path);
        let file =
            std::fs::File::open(path).map_err(|e| TruckMonitorError::ConfigIOError { source: e })?;
        let config: Self = serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|e| TruckMonitorError::ConfigParseError { source: e })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TruckMonitorError> {
        if self.history_capacity == 0 {
            return Err(TruckMonitorError::InvalidUserInput {
                field: "history_capacity".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    pub fn save(&self) -> Result<(), TruckMonitorError> {
        let config_path = Self::default_path().ok_or(TruckMonitorError::NoConfigDir)?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), TruckMonitorError> {
        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent)
                .map_err(|e| TruckMonitorError::ConfigIOError { source: e })?;
        }

        let file = std::fs::File::create(path)
            .map_err(|e| TruckMonitorError::ConfigIOError { source: e })?;
        serde_json::to_writer_pretty(file, self)
            .map_err(|e| TruckMonitorError::ConfigSerializeError { source: e })
    }
}
