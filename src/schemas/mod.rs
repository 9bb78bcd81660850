//! Resource records.
//!
//! Each record flattens an [`Entity`](crate::resource::Entity) for identity
//! and carries a static [`ResourceDefinition`](crate::resource::ResourceDefinition)
//! naming its declared fields, writable fields, link slots and actions.
//!
//! | Record | Writable | Actions |
//! |--------|----------|---------|
//! | [`Battery`] | yes | `Calibrate`, `Reset`, `SelfTest` |
//! | [`BatteryMetrics`] | no | - |
//! | [`Heater`] | yes | - |
//! | [`FileShare`] | yes | - |
//! | [`MemoryChunks`] | yes | - |
//! | [`Task`] | no | - |
//! | [`ServiceRoot`] | no | - |
//! | [`GenericResource`] | no | - |

mod battery;
mod battery_metrics;
mod file_share;
mod generic;
mod heater;
mod memory_chunks;
mod service_root;
mod task;

pub use battery::{Battery, BatteryChemistryType, ChargeState, EnergyStorageType};
pub use battery_metrics::BatteryMetrics;
pub use file_share::{FileProtocol, FileShare, QuotaType, ReplicaUpdateMode, StorageAccessCapability};
pub use generic::GenericResource;
pub use heater::Heater;
pub use memory_chunks::{AddressRangeType, InterleaveSet, MediaLocation, MemoryChunks, OperationalState};
pub use service_root::ServiceRoot;
pub use task::{Payload, Task, TaskState};
