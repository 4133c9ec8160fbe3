//! Data models for the green commute recommender
//!
//! This module contains the core domain models organized by concern:
//! - Location: Opaque place names
//! - Context: Time of day, traffic and weather
//! - Mode: Transport modes and their coefficients
//! - Commute: Candidate and scored commute options

pub mod commute;
pub mod context;
pub mod location;
pub mod mode;

// Re-export all public types for convenient access
pub use commute::{CommuteOption, ScoredOption};
pub use context::{TimeOfDay, TrafficLevel, WeatherCondition};
pub use location::Location;
pub use mode::{ModeConfig, TransportMode};
