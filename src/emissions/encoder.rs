//! Label encoding of categorical model features

use crate::{CommuteError, Result};
use serde::{Deserialize, Serialize};

/// Maps category labels to the codes the model was trained with.
///
/// The code of a label is its position in `classes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryEncoder {
    classes: Vec<String>,
}

impl CategoryEncoder {
    #[must_use]
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    /// Numeric code for `value`; `field` names the feature in the error
    pub fn encode(&self, field: &str, value: &str) -> Result<f64> {
        self.classes
            .iter()
            .position(|class| class == value)
            .map(|index| index as f64)
            .ok_or_else(|| CommuteError::unknown_category(field, value))
    }

    #[must_use]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
