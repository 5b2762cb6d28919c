//! Role identifier type.
//!
//! Roles are opaque 32-byte identifiers. Well-known roles are declared by
//! label and derived with Blake2b-256, so independently compiled hosts agree
//! on the same ids without a registry.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;

type Blake2b256 = Blake2b<U32>;

/// A 32-byte role identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoleId([u8; 32]);

impl RoleId {
    /// The conventional root of the role-admin hierarchy.
    ///
    /// Roles that never had an explicit admin role assigned are administered
    /// by holders of this role.
    pub const ADMIN: Self = Self([0u8; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive a role id from a human-readable label.
    pub fn from_label(label: &str) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update(label.as_bytes());
        Self(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_admin(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Debug for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RoleId({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for RoleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_label_is_deterministic() {
        assert_eq!(RoleId::from_label("TREASURER"), RoleId::from_label("TREASURER"));
        assert_ne!(RoleId::from_label("TREASURER"), RoleId::from_label("OPERATOR"));
    }

    #[test]
    fn admin_is_all_zero() {
        assert!(RoleId::ADMIN.is_admin());
        assert!(!RoleId::from_label("TREASURER").is_admin());
    }
}
