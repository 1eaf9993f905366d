//! Persistent disk properties

use super::view::{PropertyView, RawProperties};
use crate::config::GlobalDefaults;
use serde::Serialize;

/// Normalized disk properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiskProperties {
    #[serde(rename = "type")]
    disk_type: Option<String>,
    iops: Option<u64>,
    encrypted: bool,
    kms_key_arn: Option<String>,
}

impl DiskProperties {
    pub fn new(raw: &RawProperties, defaults: &GlobalDefaults) -> Self {
        let view = PropertyView::new(raw);

        let props = Self {
            disk_type: view.string("type"),
            iops: view.integer("iops"),
            encrypted: view.flag_or("encrypted", defaults.encrypted),
            kms_key_arn: view.optional_string_or("kms_key_arn", defaults.kms_key_arn.as_deref()),
        };

        tracing::debug!(
            "Resolved disk properties (type: {:?}, encrypted: {})",
            props.disk_type,
            props.encrypted
        );
        props
    }

    /// Volume type (e.g. "gp3", "io1")
    pub fn disk_type(&self) -> Option<&str> {
        self.disk_type.as_deref()
    }

    pub fn iops(&self) -> Option<u64> {
        self.iops
    }

    pub fn encrypted(&self) -> bool {
        self.encrypted
    }

    pub fn kms_key_arn(&self) -> Option<&str> {
        self.kms_key_arn.as_deref()
    }
}
