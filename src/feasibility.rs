//! Feasibility rules pruning commute options that make no sense for a trip
//!
//! Walking and cycling have distance and duration limits and are ruled out in
//! the rain, two-wheelers are ruled out in the rain, and motorised public or
//! private transport (bus, metro, car) is always allowed.

use crate::models::{CommuteOption, TransportMode, WeatherCondition};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Limits a mode has to stay within
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeasibilityRule {
    pub max_distance_km: Option<f64>,
    pub max_travel_time_min: Option<f64>,
    pub excluded_when_rainy: bool,
}

impl FeasibilityRule {
    const UNRESTRICTED: Self = Self {
        max_distance_km: None,
        max_travel_time_min: None,
        excluded_when_rainy: false,
    };

    /// Rule that applies to a transport mode
    #[must_use]
    pub fn for_mode(mode: TransportMode) -> Self {
        match mode {
            TransportMode::Walk => Self {
                max_distance_km: Some(3.0),
                max_travel_time_min: Some(40.0),
                excluded_when_rainy: true,
            },
            TransportMode::Bicycle => Self {
                max_distance_km: Some(8.0),
                max_travel_time_min: Some(60.0),
                excluded_when_rainy: true,
            },
            TransportMode::TwoWheeler => Self {
                excluded_when_rainy: true,
                ..Self::UNRESTRICTED
            },
            TransportMode::Bus | TransportMode::Metro | TransportMode::Car => Self::UNRESTRICTED,
        }
    }
}

/// Why an option was pruned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum ExclusionReason {
    TooFar { distance_km: f64, max_km: f64 },
    TooLong { travel_time_min: f64, max_min: f64 },
    Rain,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExclusionReason::TooFar {
                distance_km,
                max_km,
            } => write!(f, "{distance_km} km exceeds the {max_km} km limit"),
            ExclusionReason::TooLong {
                travel_time_min,
                max_min,
            } => write!(f, "{travel_time_min} min exceeds the {max_min} min limit"),
            ExclusionReason::Rain => f.write_str("not usable in the rain"),
        }
    }
}

/// A pruned mode and the rule that pruned it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exclusion {
    pub transport_mode: TransportMode,
    pub reason: ExclusionReason,
}

/// The first rule `option` breaks, if any.
///
/// Distance is checked against the trip distance rather than the option's own
/// copy so all modes are judged on the same trip.
#[must_use]
pub fn exclusion_reason(
    option: &CommuteOption,
    weather: &WeatherCondition,
    distance_km: f64,
) -> Option<ExclusionReason> {
    let rule = FeasibilityRule::for_mode(option.transport_mode);

    if let Some(max_km) = rule.max_distance_km
        && distance_km > max_km
    {
        return Some(ExclusionReason::TooFar {
            distance_km,
            max_km,
        });
    }
    if let Some(max_min) = rule.max_travel_time_min
        && option.travel_time_min > max_min
    {
        return Some(ExclusionReason::TooLong {
            travel_time_min: option.travel_time_min,
            max_min,
        });
    }
    if rule.excluded_when_rainy && weather.is_rainy() {
        return Some(ExclusionReason::Rain);
    }
    None
}

/// Split options into the feasible ones, in their original order, and the
/// exclusions
#[must_use]
pub fn partition_feasible(
    options: &[CommuteOption],
    weather: &WeatherCondition,
    distance_km: f64,
) -> (Vec<CommuteOption>, Vec<Exclusion>) {
    let mut feasible = Vec::with_capacity(options.len());
    let mut excluded = Vec::new();

    for option in options {
        match exclusion_reason(option, weather, distance_km) {
            Some(reason) => {
                debug!("Excluding {}: {}", option.transport_mode, reason);
                excluded.push(Exclusion {
                    transport_mode: option.transport_mode,
                    reason,
                });
            }
            None => feasible.push(option.clone()),
        }
    }

    (feasible, excluded)
}

/// Options that pass every rule, in their original order
#[must_use]
pub fn filter_feasible(
    options: &[CommuteOption],
    weather: &WeatherCondition,
    distance_km: f64,
) -> Vec<CommuteOption> {
    partition_feasible(options, weather, distance_km).0
}
