//! Stemcell properties
//!
//! A stemcell is either *light* (backed by pre-published AMIs, one per
//! region) or *heavy* (an image uploaded and identified by name/version).

use super::view::{PropertyView, RawProperties, overlay};
use crate::config::GlobalDefaults;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Root disk size used when the stemcell does not specify one
pub const DEFAULT_DISK_SIZE_MB: u64 = 2048;

/// Virtualization type used when the stemcell does not specify one
pub const DEFAULT_VIRTUALIZATION_TYPE: &str = "hvm";

const PARAVIRTUAL: &str = "paravirtual";

/// Normalized stemcell properties
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StemcellProperties {
    ami: BTreeMap<String, String>,
    encrypted: bool,
    kms_key_arn: Option<String>,
    #[serde(rename = "disk")]
    disk_size_mb: u64,
    architecture: Option<String>,
    virtualization_type: String,
    root_device_name: Option<String>,
    kernel_id: Option<String>,
    name: Option<String>,
    version: Option<String>,
    #[serde(skip)]
    light: bool,
    #[serde(skip)]
    region: String,
}

impl StemcellProperties {
    /// Resolve stemcell properties against the global defaults
    ///
    /// Entries from `defaults.stemcell_defaults` fill in keys missing from
    /// `raw`; keys present in `raw` always win.
    pub fn new(raw: &RawProperties, defaults: &GlobalDefaults) -> Self {
        let merged = overlay(&defaults.stemcell_defaults, raw);
        let view = PropertyView::new(&merged);

        // Non-string AMI ids are dropped from `ami` but still mark the stemcell light
        let light = matches!(view.get("ami"), Some(Value::Object(entries)) if !entries.is_empty());

        let props = Self {
            ami: view.string_map("ami"),
            encrypted: view.flag_or("encrypted", defaults.encrypted),
            kms_key_arn: view.optional_string_or("kms_key_arn", defaults.kms_key_arn.as_deref()),
            disk_size_mb: view.integer_or("disk", DEFAULT_DISK_SIZE_MB),
            architecture: view.string("architecture"),
            virtualization_type: view.string_or("virtualization_type", DEFAULT_VIRTUALIZATION_TYPE),
            root_device_name: view.string("root_device_name"),
            kernel_id: view.string("kernel_id"),
            name: view.string("name"),
            version: view.string("version"),
            light,
            region: defaults.region.clone(),
        };

        tracing::debug!(
            "Resolved stemcell properties (light: {}, encrypted: {}, disk: {}MB)",
            props.is_light(),
            props.encrypted,
            props.disk_size_mb
        );
        props
    }

    /// AMI ids keyed by region
    pub fn ami(&self) -> &BTreeMap<String, String> {
        &self.ami
    }

    pub fn encrypted(&self) -> bool {
        self.encrypted
    }

    pub fn kms_key_arn(&self) -> Option<&str> {
        self.kms_key_arn.as_deref()
    }

    pub fn disk_size_mb(&self) -> u64 {
        self.disk_size_mb
    }

    pub fn architecture(&self) -> Option<&str> {
        self.architecture.as_deref()
    }

    pub fn virtualization_type(&self) -> &str {
        &self.virtualization_type
    }

    pub fn root_device_name(&self) -> Option<&str> {
        self.root_device_name.as_deref()
    }

    pub fn kernel_id(&self) -> Option<&str> {
        self.kernel_id.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Whether the stemcell is identified by name and version
    pub fn old(&self) -> bool {
        let set = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
        set(&self.name) && set(&self.version)
    }

    /// `"{name} {version}"`
    ///
    /// Missing parts render as empty strings; only meaningful when
    /// [`old`](Self::old) is true.
    pub fn formatted_name(&self) -> String {
        format!(
            "{} {}",
            self.name.as_deref().unwrap_or_default(),
            self.version.as_deref().unwrap_or_default()
        )
    }

    pub fn paravirtual(&self) -> bool {
        self.virtualization_type == PARAVIRTUAL
    }

    /// Whether the stemcell ships pre-published AMIs
    ///
    /// True when `ami` was given as a non-empty object, even if none of its
    /// entries held a usable AMI id.
    pub fn is_light(&self) -> bool {
        self.light
    }

    /// AMI ids across all regions
    ///
    /// Callers must not rely on the order.
    pub fn ami_ids(&self) -> Vec<&str> {
        self.ami.values().map(String::as_str).collect()
    }

    /// AMI id for the configured region, if one is published there
    pub fn region_ami(&self) -> Option<&str> {
        self.ami.get(&self.region).map(String::as_str)
    }
}
