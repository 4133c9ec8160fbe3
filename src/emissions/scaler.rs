//! Standard scaling of the model's feature vector

use super::{FEATURE_COUNT, FeatureVector};
use crate::{CommuteError, Result};
use serde::{Deserialize, Serialize};

/// Centers each feature on its training mean and divides by its spread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureScaler {
    mean: Vec<f64>,
    scale: Vec<f64>,
}

impl FeatureScaler {
    pub fn new(mean: Vec<f64>, scale: Vec<f64>) -> Result<Self> {
        let scaler = Self { mean, scale };
        scaler.validate()?;
        Ok(scaler)
    }

    /// Check arity and that no scale would divide by zero
    pub fn validate(&self) -> Result<()> {
        if self.mean.len() != FEATURE_COUNT || self.scale.len() != FEATURE_COUNT {
            return Err(CommuteError::artifact(format!(
                "Scaler expects {FEATURE_COUNT} features, got {} means and {} scales",
                self.mean.len(),
                self.scale.len()
            )));
        }
        if let Some(index) = self
            .scale
            .iter()
            .position(|s| !s.is_finite() || *s == 0.0)
        {
            return Err(CommuteError::artifact(format!(
                "Scaler has an unusable scale at feature {index}"
            )));
        }
        if self.mean.iter().any(|m| !m.is_finite()) {
            return Err(CommuteError::artifact("Scaler has a non-finite mean"));
        }
        Ok(())
    }

    #[must_use]
    pub fn scale(&self, features: &FeatureVector) -> FeatureVector {
        std::array::from_fn(|i| (features[i] - self.mean[i]) / self.scale[i])
    }
}
