//! Abstract storage traits for the Warden governance layer.
//!
//! The governance core never owns role membership or durable storage. Every
//! backend (a chain state database, an in-memory store for testing) implements
//! these traits, and the rest of the workspace depends only on the traits.

pub mod error;
pub mod meta;
pub mod roles;

pub use error::StoreError;
pub use meta::MetaStore;
pub use roles::RoleStore;
