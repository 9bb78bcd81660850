#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # redfish_client: a typed client for Redfish and Swordfish services
//!
//! Redfish exposes a server's hardware and storage as a graph of JSON
//! resources over HTTP. Every resource carries its own URI in
//! `@odata.id`, refers to other resources by URI, and publishes the
//! operations it accepts as action targets.
//!
//! ## Overview
//!
//! The crate is made of one engine and many records:
//!
//! 1. **Transport** - authenticated HTTP with retries, cancellation and response accounting
//! 2. **Envelope decoding** - links and action targets are lifted out of `Links` and `Actions`
//! 3. **Updates** - writable fields that changed since decode are sent as a minimal PATCH
//! 4. **Actions** - POST to an action target; a 202 yields a pollable task monitor
//! 5. **Collections** - paged member lists are walked and fetched in order
//!
//! Each record only declares what it holds. A static
//! [`ResourceDefinition`](resource::ResourceDefinition) lists its fields,
//! which of them are writable, its link slots and its actions.
//!
//! ## Usage
//!
//! ```no_run
//! use redfish_client::schemas::Battery;
//! use redfish_client::{ClientConfig, RedfishClient, Resource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RedfishClient::new(ClientConfig {
//!         username: Some("admin".into()),
//!         password: Some("secret".into()),
//!         ..ClientConfig::new("https://bmc.example.com")
//!     })?;
//!
//!     let uri = "/redfish/v1/Chassis/1/PowerSubsystem/Batteries/Module1";
//!     if let Some(mut battery) = Battery::get(&client.shared(), uri).await? {
//!         println!("charge state: {:?}", battery.charge_state);
//!
//!         battery.location_indicator_active = Some(true);
//!         battery.update().await?;
//!
//!         if let Some(monitor) = battery.self_test().await? {
//!             println!("self test running at {}", monitor.uri());
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - **[client]** - HTTP transport, configuration and cancellation
//! - **[error]** - Error type and result alias
//! - **[types]** - Links and the records shared between schemas
//! - **[resource]** - Resource definitions, entity base, envelope decoding and updates
//! - **[action]** - Action invocation and task monitors
//! - **[collection]** - Fetching single resources, URI lists and paged collections
//! - **[schemas]** - Resource records
//! - **[protocol]** - Protocol constants and header parsing

pub mod action;
pub mod client;
pub mod collection;
pub mod error;
pub mod protocol;
pub mod resource;
pub mod schemas;
pub mod types;

pub use action::{TaskMonitor, TaskStatus};
pub use client::{ClientConfig, RedfishClient, Transport};
pub use error::{RedfishError, Result};
pub use resource::{Entity, Resource};
pub use types::{Link, Links};
