//! Resource-kind adapters for the five managed surfaces.
//!
//! Field names, response keys, and URL shapes in this module mirror the
//! cloud provider's documented API schema and must stay bit-for-bit
//! compatible with it.

mod composer;
mod compute;
mod container;
mod dataproc;
mod fields;
mod redis;
mod registry;
mod traits;

pub use composer::ComposerEnvironments;
pub use compute::{ComputeKind, Locations, discover_locations};
pub use container::ContainerClusters;
pub use dataproc::DataprocClusters;
pub use redis::RedisInstances;
pub use registry::{KindEntry, default_kinds};
pub use traits::{ListScope, ResourceKind};
