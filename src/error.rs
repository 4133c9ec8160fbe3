//! Error types and handling for the green commute recommender

use thiserror::Error;

/// Main error type for the recommendation pipeline
#[derive(Error, Debug)]
pub enum CommuteError {
    /// Request values that fail validation before the pipeline runs
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// A categorical value the model was never trained on
    #[error("Unknown {field} category '{value}'")]
    UnknownCategory { field: String, value: String },

    /// Every candidate was pruned by the feasibility rules
    #[error("No feasible commute option: {message}")]
    NoFeasibleOption { message: String },

    /// Model artifact loading or validation errors
    #[error("Model artifact error: {message}")]
    Artifact { message: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl CommuteError {
    /// Create a new invalid input error
    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Create a new unknown category error
    pub fn unknown_category<F: Into<String>, V: Into<String>>(field: F, value: V) -> Self {
        Self::UnknownCategory {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Create a new no feasible option error
    pub fn no_feasible_option<S: Into<String>>(message: S) -> Self {
        Self::NoFeasibleOption {
            message: message.into(),
        }
    }

    /// Create a new artifact error
    pub fn artifact<S: Into<String>>(message: S) -> Self {
        Self::Artifact {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Stable machine-readable label for the error kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            CommuteError::InvalidInput { .. } => "invalid_input",
            CommuteError::UnknownCategory { .. } => "unknown_category",
            CommuteError::NoFeasibleOption { .. } => "no_feasible_option",
            CommuteError::Artifact { .. } => "artifact",
            CommuteError::Config { .. } => "config",
            CommuteError::Io { .. } => "io",
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CommuteError::InvalidInput { message } => format!("Invalid input: {message}"),
            CommuteError::UnknownCategory { field, value } => {
                format!("The emissions model does not know the {field} '{value}'.")
            }
            CommuteError::NoFeasibleOption { .. } => {
                "No commute option is feasible for this trip under the current conditions."
                    .to_string()
            }
            CommuteError::Artifact { .. } => {
                "The emissions model could not be loaded. Please check the model files.".to_string()
            }
            CommuteError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            CommuteError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
