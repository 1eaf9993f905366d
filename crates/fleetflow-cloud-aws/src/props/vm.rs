//! VM properties
//!
//! Unlike stemcells and disks, VM properties stay an open property bag:
//! instance creation needs the full provider-specific surface. Only the
//! load balancer lists are extracted, and the ephemeral disk inherits the
//! global encryption setting.
//!
//! When global encryption is on, an explicit `ephemeral_disk.encrypted` is
//! kept but rewritten to its truthiness, so `null` becomes `false` and any
//! other non-boolean becomes `true`. A non-object `ephemeral_disk` is left
//! untouched.

use super::view::{PropertyView, RawProperties, is_truthy};
use crate::config::GlobalDefaults;
use serde_json::{Map, Value};

const EPHEMERAL_DISK: &str = "ephemeral_disk";
const ENCRYPTED: &str = "encrypted";

/// Normalized VM properties
#[derive(Debug, Clone, PartialEq)]
pub struct VMProperties {
    properties: RawProperties,
    load_balancer_names: Vec<String>,
    target_group_names: Vec<String>,
}

impl VMProperties {
    pub fn new(raw: &RawProperties, defaults: &GlobalDefaults) -> Self {
        let mut properties = raw.clone();
        let view = PropertyView::new(raw);
        let load_balancer_names = view.string_list("elbs");
        let target_group_names = view.string_list("lb_target_groups");

        if defaults.encrypted {
            inherit_ephemeral_encryption(&mut properties, defaults.encrypted);
        }

        tracing::debug!(
            "Resolved VM properties ({} elbs, {} target groups)",
            load_balancer_names.len(),
            target_group_names.len()
        );

        Self {
            properties,
            load_balancer_names,
            target_group_names,
        }
    }

    /// Classic load balancer names (`elbs`)
    pub fn load_balancer_names(&self) -> &[String] {
        &self.load_balancer_names
    }

    /// Target group names (`lb_target_groups`)
    pub fn target_group_names(&self) -> &[String] {
        &self.target_group_names
    }

    /// The enriched property bag
    pub fn as_map(&self) -> &RawProperties {
        &self.properties
    }

    pub fn into_map(self) -> RawProperties {
        self.properties
    }

    pub fn to_value(&self) -> Value {
        Value::Object(self.properties.clone())
    }
}

/// Ensure `ephemeral_disk.encrypted` is set, keeping an explicit value
fn inherit_ephemeral_encryption(properties: &mut RawProperties, encrypted: bool) {
    if !properties.get(EPHEMERAL_DISK).is_some_and(is_truthy) {
        let mut disk = Map::new();
        disk.insert(ENCRYPTED.to_string(), Value::Bool(encrypted));
        properties.insert(EPHEMERAL_DISK.to_string(), Value::Object(disk));
        return;
    }

    match properties.get_mut(EPHEMERAL_DISK) {
        Some(Value::Object(disk)) => {
            let resolved = disk.get(ENCRYPTED).map_or(encrypted, is_truthy);
            disk.insert(ENCRYPTED.to_string(), Value::Bool(resolved));
        }
        Some(other) => {
            tracing::warn!(
                "Ignoring cloud property '{}': expected object, got {}",
                EPHEMERAL_DISK,
                other
            );
        }
        None => {}
    }
}
