//! Emissions prediction
//!
//! The predictor is an opaque, pre-trained function of one commute option. The
//! artifact-backed implementation encodes the categorical fields, scales the
//! feature vector and runs the trained regressor:
//! - [`encoder`]: label encoding of categorical features
//! - [`scaler`]: standard scaling
//! - [`regressor`]: linear and tree-forest models
//! - [`artifacts`]: loading and validating the trained bundle

pub mod artifacts;
pub mod encoder;
pub mod regressor;
pub mod scaler;

pub use artifacts::{CategoryEncoders, ModelArtifacts};
pub use encoder::CategoryEncoder;
pub use regressor::{RegressionTree, Regressor, TreeNode};
pub use scaler::FeatureScaler;

use crate::Result;
use crate::models::CommuteOption;

/// Features in the order the model consumes them
pub const FEATURE_ORDER: [&str; 7] = [
    "distance_km",
    "travel_time_min",
    "transport_mode",
    "cost_rs",
    "traffic_level",
    "weather_condition",
    "temperature_c",
];

pub const FEATURE_COUNT: usize = FEATURE_ORDER.len();

/// Numeric model input in [`FEATURE_ORDER`]
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Scores a commute option with its expected CO2 emissions.
///
/// Implementations are built once, never mutated, and shared across
/// concurrent requests.
pub trait EmissionsPredictor: Send + Sync {
    /// Non-negative emissions estimate for `option`
    fn predict(&self, option: &CommuteOption) -> Result<f64>;
}
