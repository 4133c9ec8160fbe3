//! Context inference: traffic from the time of day, weather from user input

use crate::models::{TimeOfDay, TrafficLevel, WeatherCondition};

/// Traffic level for a part of the day. Rush hours are busy, the afternoon
/// is moderate, everything else is quiet.
#[must_use]
pub fn infer_traffic(time_of_day: TimeOfDay) -> TrafficLevel {
    match time_of_day {
        TimeOfDay::Morning | TimeOfDay::Evening => TrafficLevel::High,
        TimeOfDay::Afternoon => TrafficLevel::Medium,
        TimeOfDay::Night => TrafficLevel::Low,
    }
}

/// Weather for the trip: the user's value when given, Sunny otherwise
#[must_use]
pub fn resolve_weather(user_weather: Option<&str>) -> WeatherCondition {
    match user_weather {
        Some(weather) if !weather.is_empty() => WeatherCondition::from(weather),
        _ => WeatherCondition::Sunny,
    }
}
