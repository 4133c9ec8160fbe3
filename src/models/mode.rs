//! Transport modes and their per-kilometre coefficients

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ways to make a commute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    Car,
    #[serde(rename = "Two-Wheeler")]
    TwoWheeler,
    Bus,
    Metro,
    Bicycle,
    Walk,
}

impl TransportMode {
    /// Every mode in generator order. Equal emission scores keep this order.
    pub const ALL: [TransportMode; 6] = [
        TransportMode::Car,
        TransportMode::TwoWheeler,
        TransportMode::Bus,
        TransportMode::Metro,
        TransportMode::Bicycle,
        TransportMode::Walk,
    ];

    /// Label the emissions model was trained with
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Car => "Car",
            TransportMode::TwoWheeler => "Two-Wheeler",
            TransportMode::Bus => "Bus",
            TransportMode::Metro => "Metro",
            TransportMode::Bicycle => "Bicycle",
            TransportMode::Walk => "Walk",
        }
    }

    /// Time and cost coefficients for this mode
    #[must_use]
    pub fn config(&self) -> ModeConfig {
        match self {
            TransportMode::Car => ModeConfig::new(4.0, 12.0),
            TransportMode::TwoWheeler => ModeConfig::new(3.5, 6.0),
            TransportMode::Bus => ModeConfig::new(5.0, 2.0),
            TransportMode::Metro => ModeConfig::new(3.0, 3.0),
            TransportMode::Bicycle => ModeConfig::new(6.0, 0.0),
            TransportMode::Walk => ModeConfig::new(8.0, 0.0),
        }
    }
}

impl fmt::Display for TransportMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-mode constants used to synthesize a commute option
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeConfig {
    /// Minutes of travel per kilometre
    pub time_factor: f64,
    /// Rupees per kilometre
    pub cost_per_km: f64,
}

impl ModeConfig {
    const fn new(time_factor: f64, cost_per_km: f64) -> Self {
        Self {
            time_factor,
            cost_per_km,
        }
    }
}
