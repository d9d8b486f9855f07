//! Custom error types for the negotiation system
//!
//! The taxonomy is deliberately narrow: policy arithmetic is closed-form
//! over bounded inputs and corrects out-of-range values by clamping, so
//! errors only arise at the boundaries (config, filesystem, serialization).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NegotiationError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid product {name}: {reason}")]
    InvalidProduct { name: String, reason: String },

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<String> for NegotiationError {
    fn from(err: String) -> Self {
        NegotiationError::Config(err)
    }
}

impl From<&str> for NegotiationError {
    fn from(err: &str) -> Self {
        NegotiationError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NegotiationError>;
