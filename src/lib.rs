//! Green Commute - low-emission commute recommendations
//!
//! This library recommends a commuting mode between two places by synthesizing
//! one candidate per transport mode, pruning the infeasible ones and ranking
//! the rest by the emissions a pre-trained model predicts for them.

pub mod api;
pub mod config;
pub mod context;
pub mod emissions;
pub mod error;
pub mod feasibility;
pub mod geography;
pub mod logging;
pub mod models;
pub mod options;
pub mod recommendation;
pub mod selector;
pub mod web;

// Re-export core types for public API
pub use config::GreenCommuteConfig;
pub use emissions::{EmissionsPredictor, ModelArtifacts};
pub use error::CommuteError;
pub use geography::DistanceTable;
pub use models::{
    CommuteOption, Location, ScoredOption, TimeOfDay, TrafficLevel, TransportMode,
    WeatherCondition,
};
pub use recommendation::{Recommendation, RecommendationRequest, Recommender};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, CommuteError>;
