//! AWS cloud property error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the provider configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unsupported config format: {0} (expected .json, .yml or .yaml)")]
    UnsupportedFormat(PathBuf),

    #[error("Environment variable {0} is not set")]
    EnvNotSet(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Errors raised by the property factory
#[derive(Error, Debug)]
pub enum PropsError {
    #[error("Unknown resource kind: {0}")]
    UnknownResourceKind(String),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, PropsError>;
