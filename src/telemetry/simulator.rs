use log::{debug, warn};

use crate::route::Route;

use super::{AlertThresholds, JitterSource, Position, TelemetrySnapshot};

pub(crate) const FUEL_START_PCT: f64 = 90.;
pub(crate) const FUEL_FLOOR_PCT: f64 = 10.;
/// Kilometers driven per percentage point of fuel
pub(crate) const KM_PER_FUEL_PCT: f64 = 10.;

pub(crate) const CRUISE_SPEED_KPH: f64 = 65.;
pub(crate) const SPEED_JITTER_KPH: f64 = 10.;
pub(crate) const ENGINE_BASE_TEMP_C: f64 = 85.;
pub(crate) const ENGINE_TEMP_JITTER_C: f64 = 5.;

/// Maps journey progress to a synthetic telemetry snapshot.
///
/// Position and distance are interpolated linearly between the two waypoints
/// surrounding the progress point. Fuel decays with distance driven, while
/// speed and engine temperature carry jitter from the injected source.
pub struct TelemetrySimulator<J: JitterSource> {
    route: Route,
    thresholds: AlertThresholds,
    jitter: J,
}

impl<J: JitterSource> TelemetrySimulator<J> {
    pub fn new(route: Route, thresholds: AlertThresholds, jitter: J) -> Self {
        Self {
            route,
            thresholds,
            jitter,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn thresholds(&self) -> &AlertThresholds {
        &self.thresholds
    }

    /// Compute the snapshot for `progress_pct`, clamped to `[0, 100]`.
    pub fn snapshot(&mut self, progress_pct: f64) -> TelemetrySnapshot {
        let progress_pct = clamp_progress(progress_pct);

        let last_index = self.route.last_index();
        let raw_index = progress_pct / 100. * last_index as f64;
        let index = (raw_index.floor() as usize).min(last_index);
        let next_index = (index + 1).min(last_index);
        let fraction = raw_index - index as f64;

        let waypoints = self.route.waypoints();
        let current = &waypoints[index];
        let next = &waypoints[next_index];

        let position = Position {
            lat: lerp(current.latitude, next.latitude, fraction),
            lng: lerp(current.longitude, next.longitude, fraction),
        };
        let distance_km = lerp(
            current.cumulative_distance_km,
            next.cumulative_distance_km,
            fraction,
        );
        let fuel_level_pct = fuel_for_distance(distance_km);

        // no draw when parked at the destination
        let speed_kph = if index == last_index {
            0.
        } else {
            CRUISE_SPEED_KPH + self.jitter.next_unit() * SPEED_JITTER_KPH
        };
        let temperature_c = ENGINE_BASE_TEMP_C + self.jitter.next_unit() * ENGINE_TEMP_JITTER_C;

        let alerts = self
            .thresholds
            .evaluate(progress_pct, fuel_level_pct, speed_kph, temperature_c);

        debug!(
            "progress {:.1}% -> {} {:.1} km, fuel {:.1}%, {} alert(s)",
            progress_pct,
            current.name,
            distance_km,
            fuel_level_pct,
            alerts.len()
        );

        TelemetrySnapshot {
            position,
            segment_label: format!("{} → {}", current.name, next.name),
            distance_km,
            fuel_level_pct,
            speed_kph,
            temperature_c,
            alerts,
        }
    }
}

/// Clamp progress into `[0, 100]`. NaN maps to the start of the route.
pub fn clamp_progress(progress_pct: f64) -> f64 {
    if progress_pct.is_nan() {
        warn!("Progress is NaN, using 0%");
        return 0.;
    }
    if !(0. ..=100.).contains(&progress_pct) {
        warn!("Progress {} is outside [0, 100], clamping", progress_pct);
    }
    progress_pct.clamp(0., 100.)
}

/// Affine fuel decay, floored at 10%.
pub fn fuel_for_distance(distance_km: f64) -> f64 {
    (FUEL_START_PCT - distance_km / KM_PER_FUEL_PCT).max(FUEL_FLOOR_PCT)
}

fn lerp(from: f64, to: f64, fraction: f64) -> f64 {
    from + (to - from) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::Waypoint;
    use crate::telemetry::{FixedJitter, TelemetryAlert};

    const EPSILON: f64 = 1e-9;

    fn simulator(jitter: f64) -> TelemetrySimulator<FixedJitter> {
        TelemetrySimulator::new(
            Route::default(),
            AlertThresholds::default(),
            FixedJitter::new(jitter),
        )
    }

    #[test]
    fn test_start_of_journey() {
        let snapshot = simulator(0.).snapshot(0.);

        assert_eq!(snapshot.position.lat, 23.0225);
        assert_eq!(snapshot.position.lng, 72.5714);
        assert_eq!(snapshot.segment_label, "Ahmedabad → Udaipur");
        assert_eq!(snapshot.distance_km, 0.);
        assert_eq!(snapshot.fuel_level_pct, 90.);
        assert_eq!(snapshot.speed_kph, 65.);
        assert_eq!(snapshot.temperature_c, 85.);
        assert!(snapshot.alerts.is_empty());
    }

    #[test]
    fn test_end_of_journey() {
        let snapshot = simulator(0.99).snapshot(100.);

        assert_eq!(snapshot.position.lat, 28.7041);
        assert_eq!(snapshot.position.lng, 77.1025);
        assert_eq!(snapshot.segment_label, "Delhi → Delhi");
        assert_eq!(snapshot.distance_km, 946.);
        assert_eq!(snapshot.fuel_level_pct, 10.);
        assert_eq!(snapshot.speed_kph, 0.);
        assert!(snapshot.is_parked());
        assert!(snapshot.has_alert(TelemetryAlert::FuelCritical));
        assert!(snapshot.has_alert(TelemetryAlert::FuelEmergency));
        assert!(snapshot.has_alert(TelemetryAlert::RestBreak));
        assert!(!snapshot.has_alert(TelemetryAlert::SpeedLimit));
        // 85 + 0.99 * 5 > 88
        assert!(snapshot.has_alert(TelemetryAlert::EngineTemperature));
    }

    #[test]
    fn test_midpoint_of_journey() {
        let snapshot = simulator(0.).snapshot(50.);

        // 1.5 segments in: halfway between Udaipur and Jaipur
        assert_eq!(snapshot.segment_label, "Udaipur → Jaipur");
        assert!((snapshot.distance_km - 395.).abs() < EPSILON);
        assert!((snapshot.fuel_level_pct - 50.5).abs() < EPSILON);
        assert!((snapshot.position.lat - (24.5854 + 26.9124) / 2.).abs() < EPSILON);
        assert_eq!(snapshot.alerts, vec![TelemetryAlert::RestBreak]);
    }

    #[test]
    fn test_fuel_critical_without_emergency() {
        let snapshot = simulator(0.).snapshot(80.);

        assert_eq!(snapshot.segment_label, "Jaipur → Delhi");
        assert!((snapshot.distance_km - 695.2).abs() < 1e-6);
        assert!((snapshot.fuel_level_pct - 20.48).abs() < 1e-6);
        assert_eq!(
            snapshot.alerts,
            vec![TelemetryAlert::FuelCritical, TelemetryAlert::RestBreak]
        );
    }

    #[test]
    fn test_jitter_drives_speed_and_temperature_alerts() {
        let calm = simulator(0.5).snapshot(10.);
        assert_eq!(calm.speed_kph, 70.);
        assert_eq!(calm.temperature_c, 87.5);
        assert!(calm.alerts.is_empty());

        let hot = simulator(0.9).snapshot(10.);
        assert_eq!(
            hot.alerts,
            vec![
                TelemetryAlert::SpeedLimit,
                TelemetryAlert::EngineTemperature
            ]
        );
    }

    #[test]
    fn test_out_of_range_progress_is_clamped() {
        let mut sim = simulator(0.);
        assert_eq!(sim.snapshot(-25.), sim.snapshot(0.));
        assert_eq!(sim.snapshot(250.), sim.snapshot(100.));
        assert_eq!(sim.snapshot(f64::NAN), sim.snapshot(0.));
    }

    #[test]
    fn test_single_waypoint_route_is_parked() {
        let route = Route::new(vec![Waypoint::new("Depot", 12., 77., 0., 90.)]).unwrap();
        let mut sim =
            TelemetrySimulator::new(route, AlertThresholds::default(), FixedJitter::new(0.));

        for progress in [0., 50., 100.] {
            let snapshot = sim.snapshot(progress);
            assert_eq!(snapshot.segment_label, "Depot → Depot");
            assert_eq!(snapshot.speed_kph, 0.);
            assert_eq!(snapshot.distance_km, 0.);
        }
    }

    #[test]
    fn test_fuel_for_distance() {
        assert_eq!(fuel_for_distance(0.), 90.);
        assert_eq!(fuel_for_distance(400.), 50.);
        assert_eq!(fuel_for_distance(800.), 10.);
        assert_eq!(fuel_for_distance(5000.), 10.);
    }
}
