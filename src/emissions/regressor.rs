//! Regressors mapping a scaled feature vector to an emissions estimate

use super::{FEATURE_COUNT, FeatureVector};
use crate::{CommuteError, Result};
use serde::{Deserialize, Serialize};

/// Trained regression model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Regressor {
    /// `coefficients · x + intercept`
    Linear {
        coefficients: Vec<f64>,
        intercept: f64,
    },
    /// Mean of the tree outputs
    Forest { trees: Vec<RegressionTree> },
}

impl Regressor {
    pub fn validate(&self) -> Result<()> {
        match self {
            Regressor::Linear {
                coefficients,
                intercept,
            } => {
                if coefficients.len() != FEATURE_COUNT {
                    return Err(CommuteError::artifact(format!(
                        "Linear model expects {FEATURE_COUNT} coefficients, got {}",
                        coefficients.len()
                    )));
                }
                if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
                    return Err(CommuteError::artifact("Linear model has non-finite weights"));
                }
                Ok(())
            }
            Regressor::Forest { trees } => {
                if trees.is_empty() {
                    return Err(CommuteError::artifact("Forest has no trees"));
                }
                for (index, tree) in trees.iter().enumerate() {
                    tree.validate().map_err(|e| match e {
                        CommuteError::Artifact { message } => {
                            CommuteError::artifact(format!("Tree {index}: {message}"))
                        }
                        other => other,
                    })?;
                }
                Ok(())
            }
        }
    }

    /// Raw model output for an already scaled feature vector
    #[must_use]
    pub fn predict(&self, x: &FeatureVector) -> f64 {
        match self {
            Regressor::Linear {
                coefficients,
                intercept,
            } => {
                coefficients
                    .iter()
                    .zip(x.iter())
                    .map(|(c, v)| c * v)
                    .sum::<f64>()
                    + intercept
            }
            Regressor::Forest { trees } => {
                trees.iter().map(|tree| tree.predict(x)).sum::<f64>() / trees.len() as f64
            }
        }
    }
}

/// Node of a regression tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    /// Go to `left` when `x[feature] <= threshold`, else to `right`
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf(f64),
}

/// Binary regression tree stored as a flat node list rooted at index 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionTree {
    nodes: Vec<TreeNode>,
}

impl RegressionTree {
    pub fn new(nodes: Vec<TreeNode>) -> Result<Self> {
        let tree = Self { nodes };
        tree.validate()?;
        Ok(tree)
    }

    /// Children must point forward in the node list, which rules out cycles
    /// and guarantees every walk ends at a leaf.
    pub fn validate(&self) -> Result<()> {
        if self.nodes.is_empty() {
            return Err(CommuteError::artifact("Tree has no nodes"));
        }
        for (index, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= FEATURE_COUNT {
                        return Err(CommuteError::artifact(format!(
                            "Node {index} splits on unknown feature {feature}"
                        )));
                    }
                    if !threshold.is_finite() {
                        return Err(CommuteError::artifact(format!(
                            "Node {index} has a non-finite threshold"
                        )));
                    }
                    for child in [left, right] {
                        if child <= index || child >= self.nodes.len() {
                            return Err(CommuteError::artifact(format!(
                                "Node {index} has invalid child {child}"
                            )));
                        }
                    }
                }
                TreeNode::Leaf(value) => {
                    if !value.is_finite() {
                        return Err(CommuteError::artifact(format!(
                            "Node {index} has a non-finite value"
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn predict(&self, x: &FeatureVector) -> f64 {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if x[feature] <= threshold { left } else { right };
                }
                TreeNode::Leaf(value) => return value,
            }
        }
    }
}
