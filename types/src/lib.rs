//! Fundamental types for the Warden governance layer.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account addresses, role identifiers, timestamps, and the
//! governance parameters.

pub mod address;
pub mod params;
pub mod role;
pub mod time;

pub use address::Address;
pub use params::{GovernanceParams, InvalidParams};
pub use role::RoleId;
pub use time::Timestamp;
