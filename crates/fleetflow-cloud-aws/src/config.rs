//! Provider-wide defaults
//!
//! `GlobalDefaults` carries the process-wide settings every property view
//! resolves against (encryption, KMS key, region and inherited stemcell
//! properties). It is read-only once handed to a [`PropsFactory`].
//!
//! [`PropsFactory`]: crate::PropsFactory

use crate::error::{ConfigError, ConfigResult};
use crate::props::RawProperties;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable holding the path of the provider config file
pub const CONFIG_PATH_ENV: &str = "FLEETFLOW_AWS_CONFIG";

/// Process-wide AWS defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalDefaults {
    /// Region the driver operates in (e.g. "us-east-1")
    pub region: String,

    /// Encrypt disks unless a resource says otherwise
    #[serde(default)]
    pub encrypted: bool,

    /// KMS key used for encryption unless a resource says otherwise
    #[serde(default)]
    pub kms_key_arn: Option<String>,

    /// Properties inherited by every stemcell
    #[serde(default, rename = "stemcell", alias = "stemcell_defaults")]
    pub stemcell_defaults: RawProperties,
}

impl GlobalDefaults {
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            ..Default::default()
        }
    }

    pub fn with_encrypted(mut self, encrypted: bool) -> Self {
        self.encrypted = encrypted;
        self
    }

    pub fn with_kms_key_arn(mut self, kms_key_arn: impl Into<String>) -> Self {
        self.kms_key_arn = Some(kms_key_arn.into());
        self
    }

    pub fn with_stemcell_default(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.stemcell_defaults.insert(key.into(), value.into());
        self
    }
}

/// Provider config file layout
///
/// Only the `aws` section is read; any other top-level keys are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudConfig {
    pub aws: GlobalDefaults,
}

impl CloudConfig {
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a config file, picking the format from its extension
    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let config = match extension.as_deref() {
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?)?,
            Some("yml" | "yaml") => Self::from_yaml_str(&std::fs::read_to_string(path)?)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::debug!(
            "Loaded AWS config from {} (region: {})",
            path.display(),
            config.aws.region
        );
        Ok(config)
    }

    /// Load the config file named by `FLEETFLOW_AWS_CONFIG`
    pub fn from_env() -> ConfigResult<Self> {
        let path =
            std::env::var_os(CONFIG_PATH_ENV).ok_or(ConfigError::EnvNotSet(CONFIG_PATH_ENV))?;
        Self::from_path(path)
    }

    pub fn into_defaults(self) -> GlobalDefaults {
        self.aws
    }
}
