use std::path::Path;

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::TruckMonitorError;

/// A fixed checkpoint along the route.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Waypoint {
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Distance from the start of the route, in kilometers
    pub cumulative_distance_km: f64,
    /// Reference fuel level expected on arrival. Not used by the simulator,
    /// which derives fuel from distance travelled.
    pub fuel_at_arrival_pct: f64,
}

impl Waypoint {
    pub fn new(
        name: &str,
        latitude: f64,
        longitude: f64,
        cumulative_distance_km: f64,
        fuel_at_arrival_pct: f64,
    ) -> Self {
        Self {
            name: name.to_string(),
            latitude,
            longitude,
            cumulative_distance_km,
            fuel_at_arrival_pct,
        }
    }
}

/// An ordered, validated, non-empty list of waypoints.
///
/// Cumulative distances never decrease along the route, so interpolating
/// between consecutive waypoints always moves the truck forward.
#[derive(Clone, Debug, PartialEq)]
pub struct Route {
    waypoints: Vec<Waypoint>,
}

impl Default for Route {
    fn default() -> Self {
        Self {
            waypoints: vec![
                Waypoint::new("Ahmedabad", 23.0225, 72.5714, 0., 90.),
                Waypoint::new("Udaipur", 24.5854, 73.7125, 262., 75.),
                Waypoint::new("Jaipur", 26.9124, 75.7873, 528., 45.),
                Waypoint::new("Delhi", 28.7041, 77.1025, 946., 15.),
            ],
        }
    }
}

impl Route {
    pub fn new(waypoints: Vec<Waypoint>) -> Result<Self, TruckMonitorError> {
        validate_waypoints(&waypoints)?;
        Ok(Self { waypoints })
    }

    /// Load a route from a JSON file containing an array of waypoints.
    pub fn from_file(path: &Path) -> Result<Self, TruckMonitorError> {
        let file =
            std::fs::File::open(path).map_err(|e| TruckMonitorError::RouteIOError { source: e })?;
        let waypoints: Vec<Waypoint> = serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|e| TruckMonitorError::RouteParseError { source: e })?;
        debug!(
            "Loaded {} waypoints from route file {:?}",
            waypoints.len(),
            path
        );
        Self::new(waypoints)
    }

    pub fn waypoints(&self) -> &[Waypoint] {
        &self.waypoints
    }

    pub fn first(&self) -> &Waypoint {
        &self.waypoints[0]
    }

    pub fn last(&self) -> &Waypoint {
        &self.waypoints[self.waypoints.len() - 1]
    }

    /// Index of the final waypoint.
    pub fn last_index(&self) -> usize {
        self.waypoints.len() - 1
    }

    pub fn total_distance_km(&self) -> f64 {
        self.last().cumulative_distance_km - self.first().cumulative_distance_km
    }
}

fn invalid(reason: String) -> TruckMonitorError {
    TruckMonitorError::InvalidRoute { reason }
}

fn validate_waypoints(waypoints: &[Waypoint]) -> Result<(), TruckMonitorError> {
    if waypoints.is_empty() {
        return Err(invalid("route needs at least one waypoint".to_string()));
    }

    for waypoint in waypoints {
        let values = [
            waypoint.latitude,
            waypoint.longitude,
            waypoint.cumulative_distance_km,
            waypoint.fuel_at_arrival_pct,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(invalid(format!(
                "waypoint '{}' contains a non-finite value",
                waypoint.name
            )));
        }
        if !(-90. ..=90.).contains(&waypoint.latitude) {
            return Err(invalid(format!(
                "waypoint '{}' latitude {} is outside [-90, 90]",
                waypoint.name, waypoint.latitude
            )));
        }
        if !(-180. ..=180.).contains(&waypoint.longitude) {
            return Err(invalid(format!(
                "waypoint '{}' longitude {} is outside [-180, 180]",
                waypoint.name, waypoint.longitude
            )));
        }
        if waypoint.cumulative_distance_km < 0. {
            return Err(invalid(format!(
                "waypoint '{}' has a negative distance",
                waypoint.name
            )));
        }
        if !(0. ..=100.).contains(&waypoint.fuel_at_arrival_pct) {
            return Err(invalid(format!(
                "waypoint '{}' fuel {} is outside [0, 100]",
                waypoint.name, waypoint.fuel_at_arrival_pct
            )));
        }
    }

    if let Some((prev, next)) = waypoints
        .iter()
        .tuple_windows()
        .find(|(prev, next)| next.cumulative_distance_km < prev.cumulative_distance_km)
    {
        return Err(invalid(format!(
            "distance decreases from '{}' ({} km) to '{}' ({} km)",
            prev.name, prev.cumulative_distance_km, next.name, next.cumulative_distance_km
        )));
    }

    Ok(())
}
