use thiserror::Error;

pub type InsightsResult<T> = Result<T, InsightsError>;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Invalid generator parameters: {0}")]
    InvalidParameters(String),

    #[error("Invalid distribution for '{attribute}': {reason}")]
    InvalidDistribution { attribute: String, reason: String },

    #[error("Invalid rule set: {0}")]
    InvalidRuleSet(String),

    #[error("No suggestion registered for {domain} segment '{label}'")]
    UnknownSegment { domain: String, label: String },

    #[error("Invalid value '{value}' for {kind}")]
    InvalidValue { kind: &'static str, value: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl InsightsError {
    pub fn distribution(attribute: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDistribution {
            attribute: attribute.into(),
            reason: reason.into(),
        }
    }
}
