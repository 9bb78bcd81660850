//! Core Redfish types.
//!
//! - [`Link`], [`Links`], [`LinksCollection`], [`LinkValue`]: hyperlinks
//! - [`Status`], [`SensorExcerpt`], [`Location`]: records shared by many schemas
//! - [`ResetType`], [`Health`], [`State`]: shared enumerations
//! - [`Message`]: registry messages found in errors and tasks

mod common;
mod link;

pub use common::{
    Health, Location, LocationType, Message, Orientation, PartLocation, PhysicalContext, Reference,
    ResetType, SensorExcerpt, State, Status,
};
pub use link::{Link, LinkValue, Links, LinksCollection};
