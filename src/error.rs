use thiserror::Error;

use crate::value::ValueType;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraitsError {
    #[error("Invalid stored value type: should be '{expected}'.")]
    InvalidStoredValueType {
        trait_id: String,
        property: String,
        expected: ValueType,
        found: ValueType,
    },
    #[error("Invalid version {version} declared for '{id}': versions start at 1")]
    InvalidVersion { id: String, version: u32 },
    #[error("Version mismatch: '{id}' is declared as version {declared} but its identifier implies version {implied}")]
    VersionMismatch { id: String, declared: u32, implied: u32 },
    #[error("Duplicate declaration: {0}")]
    Duplicate(String),
    #[error("Unknown trait '{trait_id}' referenced by specification '{specification_id}'")]
    UnknownTrait {
        trait_id: String,
        specification_id: String,
    },
    #[error("Config error: {0}")]
    Config(String),
    #[error("JSON error: {0}")]
    Json(String),
}

pub type Result<T> = std::result::Result<T, TraitsError>;

// Helper conversions
impl From<config::ConfigError> for TraitsError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<serde_json::Error> for TraitsError {
    fn from(e: serde_json::Error) -> Self { Self::Json(e.to_string()) }
}
