//! FleetFlow AWS cloud properties
//!
//! This crate normalizes the untyped cloud properties attached to AWS
//! resource requests (stemcells, disks and VMs) into typed views, merging
//! them with the provider-wide defaults.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────┐   ┌────────────────────────────┐
//! │ raw properties     │   │ CloudConfig / defaults     │
//! │ (serde_json::Map)  │   │ (region, encryption, ...)  │
//! └─────────┬──────────┘   └──────────────┬─────────────┘
//!           └──────────────┬──────────────┘
//!            ┌─────────────▼─────────────┐
//!            │       PropsFactory        │
//!            └──┬──────────┬──────────┬──┘
//!               ▼          ▼          ▼
//!           Stemcell      Disk        VM
//!          Properties  Properties  Properties
//! ```
//!
//! # Example
//!
//! ```
//! use fleetflow_cloud_aws::{GlobalDefaults, PropsFactory};
//! use serde_json::json;
//!
//! let factory = PropsFactory::new(GlobalDefaults::new("us-east-1").with_encrypted(true));
//!
//! let raw = json!({"ami": {"us-east-1": "ami-123"}});
//! let stemcell = factory.stemcell_props(raw.as_object().unwrap());
//!
//! assert!(stemcell.is_light());
//! assert!(stemcell.encrypted());
//! assert_eq!(stemcell.region_ami(), Some("ami-123"));
//! ```

pub mod config;
pub mod error;
pub mod props;

// Re-exports
pub use config::{CONFIG_PATH_ENV, CloudConfig, GlobalDefaults};
pub use error::{ConfigError, ConfigResult, PropsError, Result};
pub use props::{
    CloudProps, DiskProperties, PropertyView, PropsFactory, RawProperties, ResourceKind,
    StemcellProperties, VMProperties, overlay,
};
