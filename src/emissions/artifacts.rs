//! Trained model artifacts: encoders, scaler and regressor
//!
//! The artifacts ship as one JSON document. A copy is embedded in the binary
//! and a different one can be loaded from disk at start-up.

use super::encoder::CategoryEncoder;
use super::regressor::Regressor;
use super::scaler::FeatureScaler;
use super::{EmissionsPredictor, FEATURE_ORDER, FeatureVector};
use crate::models::CommuteOption;
use crate::{CommuteError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

const EMBEDDED_ARTIFACTS: &str = include_str!("../../assets/green_commute_model.json");

/// Encoders for the three categorical features
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEncoders {
    pub transport_mode: CategoryEncoder,
    pub traffic_level: CategoryEncoder,
    pub weather_condition: CategoryEncoder,
}

/// Everything needed to turn a commute option into an emissions estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifacts {
    /// Feature names in the order the model was trained on
    #[serde(default = "default_feature_order")]
    pub feature_order: Vec<String>,
    pub encoders: CategoryEncoders,
    pub scaler: FeatureScaler,
    pub regressor: Regressor,
}

fn default_feature_order() -> Vec<String> {
    FEATURE_ORDER.iter().map(|s| (*s).to_string()).collect()
}

impl ModelArtifacts {
    /// Artifacts compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_ARTIFACTS)
    }

    /// Parse and validate artifacts from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let artifacts: ModelArtifacts = serde_json::from_str(json)
            .map_err(|e| CommuteError::artifact(format!("Failed to parse artifacts: {e}")))?;
        artifacts.validate()?;
        Ok(artifacts)
    }

    /// Read, parse and validate artifacts from a file
    #[instrument(level = "info")]
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let artifacts = Self::from_json(&json)?;
        info!("Loaded model artifacts from {}", path.display());
        Ok(artifacts)
    }

    /// Artifacts from `path` when given, the embedded copy otherwise
    pub fn load_or_embedded(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("Using embedded model artifacts");
                Self::embedded()
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.feature_order != FEATURE_ORDER {
            return Err(CommuteError::artifact(format!(
                "Model was trained on features {:?}, expected {:?}",
                self.feature_order, FEATURE_ORDER
            )));
        }
        for (field, encoder) in [
            ("transport_mode", &self.encoders.transport_mode),
            ("traffic_level", &self.encoders.traffic_level),
            ("weather_condition", &self.encoders.weather_condition),
        ] {
            if encoder.is_empty() {
                return Err(CommuteError::artifact(format!(
                    "Encoder for {field} has no classes"
                )));
            }
        }
        self.scaler.validate()?;
        self.regressor.validate()
    }

    /// Encoded, unscaled features in canonical order
    pub fn features(&self, option: &CommuteOption) -> Result<FeatureVector> {
        Ok([
            option.distance_km,
            option.travel_time_min,
            self.encoders
                .transport_mode
                .encode("transport_mode", option.transport_mode.as_str())?,
            option.cost_rs,
            self.encoders
                .traffic_level
                .encode("traffic_level", option.traffic_level.as_str())?,
            self.encoders
                .weather_condition
                .encode("weather_condition", option.weather_condition.as_str())?,
            option.temperature_c,
        ])
    }
}

impl EmissionsPredictor for ModelArtifacts {
    fn predict(&self, option: &CommuteOption) -> Result<f64> {
        let features = self.features(option)?;
        let scaled = self.scaler.scale(&features);
        let raw = self.regressor.predict(&scaled);
        // also folds -0.0 and NaN to 0.0
        Ok(if raw > 0.0 { raw } else { 0.0 })
    }
}
