use serde::{Deserialize, Serialize};
use uom::si::{
    f64::{Length, ThermodynamicTemperature, Velocity},
    length::{kilometer, mile},
    thermodynamic_temperature::{degree_celsius, degree_fahrenheit},
    velocity::{kilometer_per_hour, mile_per_hour},
};

/// Unit system used for display. Telemetry is always computed in metric.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Metric => "Metric",
            Self::Imperial => "Imperial",
        }
    }

    pub fn speed(&self, kph: f64) -> f64 {
        let speed = Velocity::new::<kilometer_per_hour>(kph);
        match self {
            Self::Metric => speed.get::<kilometer_per_hour>(),
            Self::Imperial => speed.get::<mile_per_hour>(),
        }
    }

    pub fn distance(&self, km: f64) -> f64 {
        let distance = Length::new::<kilometer>(km);
        match self {
            Self::Metric => distance.get::<kilometer>(),
            Self::Imperial => distance.get::<mile>(),
        }
    }

    pub fn temperature(&self, celsius: f64) -> f64 {
        let temperature = ThermodynamicTemperature::new::<degree_celsius>(celsius);
        match self {
            Self::Metric => temperature.get::<degree_celsius>(),
            Self::Imperial => temperature.get::<degree_fahrenheit>(),
        }
    }

    pub fn format_speed(&self, kph: f64) -> String {
        let unit = match self {
            Self::Metric => "km/h",
            Self::Imperial => "mph",
        };
        format!("{:.0} {}", self.speed(kph), unit)
    }

    pub fn format_distance(&self, km: f64) -> String {
        let unit = match self {
            Self::Metric => "km",
            Self::Imperial => "mi",
        };
        format!("{:.0} {}", self.distance(km), unit)
    }

    pub fn format_temperature(&self, celsius: f64) -> String {
        let unit = match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        };
        format!("{:.1}{}", self.temperature(celsius), unit)
    }
}
