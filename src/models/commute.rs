//! Commute option records flowing through the recommendation pipeline

use super::{TrafficLevel, TransportMode, WeatherCondition};
use serde::{Deserialize, Serialize};

/// One candidate way of making the trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommuteOption {
    pub distance_km: f64,
    pub travel_time_min: f64,
    pub transport_mode: TransportMode,
    pub cost_rs: f64,
    pub traffic_level: TrafficLevel,
    pub weather_condition: WeatherCondition,
    pub temperature_c: f64,
}

impl CommuteOption {
    /// Attach the predicted emissions, consuming the unscored option
    #[must_use]
    pub fn scored(self, predicted_co2: f64) -> ScoredOption {
        ScoredOption {
            option: self,
            predicted_co2,
        }
    }
}

/// A commute option with its predicted emissions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOption {
    #[serde(flatten)]
    pub option: CommuteOption,
    /// Predicted CO2 emissions for the trip
    pub predicted_co2: f64,
}

impl ScoredOption {
    #[must_use]
    pub fn mode(&self) -> TransportMode {
        self.option.transport_mode
    }

    /// Short human-readable summary line
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "{}: {:.2} CO2, {:.0} min, Rs {:.0}",
            self.option.transport_mode,
            self.predicted_co2,
            self.option.travel_time_min,
            self.option.cost_rs
        )
    }
}
