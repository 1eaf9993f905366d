//! Cloud property views
//!
//! Each view is built once from raw properties and the global defaults and
//! is immutable afterwards.

mod disk;
mod factory;
mod stemcell;
mod view;
mod vm;

// Re-exports
pub use disk::DiskProperties;
pub use factory::{CloudProps, PropsFactory, ResourceKind};
pub use stemcell::{DEFAULT_DISK_SIZE_MB, DEFAULT_VIRTUALIZATION_TYPE, StemcellProperties};
pub use view::{PropertyView, RawProperties, is_truthy, overlay};
pub use vm::VMProperties;
