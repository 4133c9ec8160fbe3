//! Candidate commute synthesis, one option per transport mode

use crate::models::{CommuteOption, TrafficLevel, TransportMode, WeatherCondition};

/// Ambient temperature fed to the emissions model, in Celsius
pub const AMBIENT_TEMPERATURE_C: f64 = 28.0;

/// Build one candidate per transport mode, in [`TransportMode::ALL`] order.
///
/// Travel time and cost scale linearly with `distance_km`; callers pass a
/// non-negative distance.
#[must_use]
pub fn build_options(
    distance_km: f64,
    traffic: TrafficLevel,
    weather: &WeatherCondition,
) -> Vec<CommuteOption> {
    TransportMode::ALL
        .iter()
        .map(|&mode| {
            let config = mode.config();
            CommuteOption {
                distance_km,
                travel_time_min: distance_km * config.time_factor,
                transport_mode: mode,
                cost_rs: distance_km * config.cost_per_km,
                traffic_level: traffic,
                weather_condition: weather.clone(),
                temperature_c: AMBIENT_TEMPERATURE_C,
            }
        })
        .collect()
}
