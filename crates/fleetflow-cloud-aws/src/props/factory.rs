//! Property factory bound to the global defaults

use super::disk::DiskProperties;
use super::stemcell::StemcellProperties;
use super::view::RawProperties;
use super::vm::VMProperties;
use crate::config::{CloudConfig, GlobalDefaults};
use crate::error::{PropsError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

/// Kind of resource a set of cloud properties describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Stemcell,
    Disk,
    Vm,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResourceKind::Stemcell => write!(f, "stemcell"),
            ResourceKind::Disk => write!(f, "disk"),
            ResourceKind::Vm => write!(f, "vm"),
        }
    }
}

impl FromStr for ResourceKind {
    type Err = PropsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "stemcell" => Ok(ResourceKind::Stemcell),
            "disk" => Ok(ResourceKind::Disk),
            "vm" | "virtual_machine" => Ok(ResourceKind::Vm),
            _ => Err(PropsError::UnknownResourceKind(s.to_string())),
        }
    }
}

/// Normalized properties of any resource kind
#[derive(Debug, Clone, PartialEq)]
pub enum CloudProps {
    Stemcell(StemcellProperties),
    Disk(DiskProperties),
    Vm(VMProperties),
}

impl CloudProps {
    pub fn kind(&self) -> ResourceKind {
        match self {
            CloudProps::Stemcell(_) => ResourceKind::Stemcell,
            CloudProps::Disk(_) => ResourceKind::Disk,
            CloudProps::Vm(_) => ResourceKind::Vm,
        }
    }
}

/// Builds property views against a fixed set of global defaults
///
/// Cloning is cheap; clones share the same defaults.
#[derive(Debug, Clone)]
pub struct PropsFactory {
    defaults: Arc<GlobalDefaults>,
}

impl PropsFactory {
    pub fn new(defaults: GlobalDefaults) -> Self {
        Self {
            defaults: Arc::new(defaults),
        }
    }

    pub fn from_config(config: CloudConfig) -> Self {
        Self::new(config.into_defaults())
    }

    /// Build a factory from a provider config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::from_config(CloudConfig::from_path(path)?))
    }

    /// Build a factory from the config file named by `FLEETFLOW_AWS_CONFIG`
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_config(CloudConfig::from_env()?))
    }

    pub fn defaults(&self) -> &GlobalDefaults {
        &self.defaults
    }

    pub fn stemcell_props(&self, raw: &RawProperties) -> StemcellProperties {
        StemcellProperties::new(raw, &self.defaults)
    }

    pub fn disk_props(&self, raw: &RawProperties) -> DiskProperties {
        DiskProperties::new(raw, &self.defaults)
    }

    pub fn vm_props(&self, raw: &RawProperties) -> VMProperties {
        VMProperties::new(raw, &self.defaults)
    }

    pub fn props_for(&self, kind: ResourceKind, raw: &RawProperties) -> CloudProps {
        match kind {
            ResourceKind::Stemcell => CloudProps::Stemcell(self.stemcell_props(raw)),
            ResourceKind::Disk => CloudProps::Disk(self.disk_props(raw)),
            ResourceKind::Vm => CloudProps::Vm(self.vm_props(raw)),
        }
    }

    /// Like [`props_for`](Self::props_for), with the kind given by name
    pub fn props_for_type(&self, resource_type: &str, raw: &RawProperties) -> Result<CloudProps> {
        let kind = resource_type.parse()?;
        Ok(self.props_for(kind, raw))
    }
}
