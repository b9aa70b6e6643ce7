use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AlertSeverity {
    Emergency,
    Warning,
}

/// Rule-based alerts raised by the simulator.
///
/// Variants are declared in evaluation order; a snapshot lists its alerts in
/// the same order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TelemetryAlert {
    FuelCritical,
    FuelEmergency,
    RestBreak,
    SpeedLimit,
    EngineTemperature,
}

impl TelemetryAlert {
    pub fn message(&self) -> &'static str {
        match self {
            Self::FuelCritical => "Fuel level critical - Refuel needed",
            Self::FuelEmergency => "Emergency: Find nearest fuel station",
            Self::RestBreak => "Rest break recommended - Driving for 4+ hours",
            Self::SpeedLimit => "Speed limit warning",
            Self::EngineTemperature => "Engine temperature high",
        }
    }

    pub fn severity(&self) -> AlertSeverity {
        match self {
            Self::FuelEmergency => AlertSeverity::Emergency,
            _ => AlertSeverity::Warning,
        }
    }
}

impl fmt::Display for TelemetryAlert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Alert trigger levels. Fuel thresholds are inclusive, the others strict.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AlertThresholds {
    pub fuel_critical_pct: f64,
    pub fuel_emergency_pct: f64,
    pub rest_break_progress_pct: f64,
    pub speed_limit_kph: f64,
    pub engine_temperature_c: f64,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            fuel_critical_pct: 30.,
            fuel_emergency_pct: 20.,
            rest_break_progress_pct: 40.,
            speed_limit_kph: 70.,
            engine_temperature_c: 88.,
        }
    }
}

impl AlertThresholds {
    /// Evaluate every rule independently; any subset may fire.
    pub fn evaluate(
        &self,
        progress_pct: f64,
        fuel_level_pct: f64,
        speed_kph: f64,
        temperature_c: f64,
    ) -> Vec<TelemetryAlert> {
        let rules = [
            (
                fuel_level_pct <= self.fuel_critical_pct,
                TelemetryAlert::FuelCritical,
            ),
            (
                fuel_level_pct <= self.fuel_emergency_pct,
                TelemetryAlert::FuelEmergency,
            ),
            (
                progress_pct > self.rest_break_progress_pct,
                TelemetryAlert::RestBreak,
            ),
            (speed_kph > self.speed_limit_kph, TelemetryAlert::SpeedLimit),
            (
                temperature_c > self.engine_temperature_c,
                TelemetryAlert::EngineTemperature,
            ),
        ];

        rules
            .into_iter()
            .filter_map(|(fired, alert)| fired.then_some(alert))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_alerts() {
        let thresholds = AlertThresholds::default();
        assert!(thresholds.evaluate(0., 90., 65., 85.).is_empty());
    }

    #[test]
    fn test_all_alerts_in_order() {
        let thresholds = AlertThresholds::default();
        let alerts = thresholds.evaluate(100., 10., 75., 89.);
        assert_eq!(
            alerts,
            vec![
                TelemetryAlert::FuelCritical,
                TelemetryAlert::FuelEmergency,
                TelemetryAlert::RestBreak,
                TelemetryAlert::SpeedLimit,
                TelemetryAlert::EngineTemperature,
            ]
        );
    }

    #[test]
    fn test_threshold_boundaries() {
        let thresholds = AlertThresholds::default();

        // fuel thresholds are inclusive
        assert_eq!(
            thresholds.evaluate(0., 30., 0., 0.),
            vec![TelemetryAlert::FuelCritical]
        );
        assert_eq!(
            thresholds.evaluate(0., 20., 0., 0.),
            vec![TelemetryAlert::FuelCritical, TelemetryAlert::FuelEmergency]
        );

        // the others are strict
        assert!(thresholds.evaluate(40., 90., 70., 88.).is_empty());
        assert_eq!(
            thresholds.evaluate(40.5, 90., 70.1, 88.1),
            vec![
                TelemetryAlert::RestBreak,
                TelemetryAlert::SpeedLimit,
                TelemetryAlert::EngineTemperature,
            ]
        );
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = AlertThresholds {
            speed_limit_kph: 60.,
            ..Default::default()
        };
        assert_eq!(
            thresholds.evaluate(0., 90., 65., 85.),
            vec![TelemetryAlert::SpeedLimit]
        );
    }

    #[test]
    fn test_severity_and_message() {
        assert_eq!(
            TelemetryAlert::FuelEmergency.severity(),
            AlertSeverity::Emergency
        );
        assert!(TelemetryAlert::FuelEmergency.to_string().contains("Emergency"));
        for alert in [
            TelemetryAlert::FuelCritical,
            TelemetryAlert::RestBreak,
            TelemetryAlert::SpeedLimit,
            TelemetryAlert::EngineTemperature,
        ] {
            assert_eq!(alert.severity(), AlertSeverity::Warning);
            assert!(!alert.message().contains("Emergency"));
        }
    }
}
