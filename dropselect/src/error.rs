//! Errors raised while ingesting host-supplied data.
//!
//! The interactive operations (filtering, navigation, selection and
//! sanitization) never fail; only parsing option sets and props can.

use thiserror::Error;

/// Error returned when an option set or a configuration cannot be loaded.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
