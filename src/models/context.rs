//! Travel context: time of day, traffic level and weather condition

use crate::CommuteError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Part of the day a commute happens in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Map a 24h clock hour to its part of the day
    #[must_use]
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    /// Part of the day for the current local time
    #[must_use]
    pub fn now() -> Self {
        use chrono::Timelike;
        Self::from_hour(chrono::Local::now().hour())
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "Morning",
            TimeOfDay::Afternoon => "Afternoon",
            TimeOfDay::Evening => "Evening",
            TimeOfDay::Night => "Night",
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = CommuteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(TimeOfDay::Morning),
            "afternoon" => Ok(TimeOfDay::Afternoon),
            "evening" => Ok(TimeOfDay::Evening),
            "night" => Ok(TimeOfDay::Night),
            _ => Err(CommuteError::invalid_input(format!(
                "Unknown time of day '{s}'. Must be one of: Morning, Afternoon, Evening, Night"
            ))),
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Road congestion derived from the time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrafficLevel {
    High,
    Medium,
    Low,
}

impl TrafficLevel {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TrafficLevel::High => "High",
            TrafficLevel::Medium => "Medium",
            TrafficLevel::Low => "Low",
        }
    }
}

impl fmt::Display for TrafficLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weather the commute happens in.
///
/// Values outside the known set are carried verbatim in `Other`; whether the
/// emissions model accepts them is decided by its encoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    Sunny,
    Rainy,
    Cold,
    Foggy,
    Other(String),
}

impl WeatherCondition {
    /// Weather names the front end offers
    pub const KNOWN: [WeatherCondition; 4] = [
        WeatherCondition::Sunny,
        WeatherCondition::Rainy,
        WeatherCondition::Cold,
        WeatherCondition::Foggy,
    ];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            WeatherCondition::Sunny => "Sunny",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Cold => "Cold",
            WeatherCondition::Foggy => "Foggy",
            WeatherCondition::Other(name) => name,
        }
    }

    #[must_use]
    pub fn is_rainy(&self) -> bool {
        matches!(self, WeatherCondition::Rainy)
    }
}

impl From<&str> for WeatherCondition {
    fn from(name: &str) -> Self {
        match name {
            "Sunny" => WeatherCondition::Sunny,
            "Rainy" => WeatherCondition::Rainy,
            "Cold" => WeatherCondition::Cold,
            "Foggy" => WeatherCondition::Foggy,
            other => WeatherCondition::Other(other.to_string()),
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for WeatherCondition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WeatherCondition {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(WeatherCondition::from(name.as_str()))
    }
}
