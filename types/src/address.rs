//! Account address type.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A 32-byte account address.
///
/// The all-zero address is reserved as [`Address::NULL`] and is never a
/// valid voter, vote target, or recovery beneficiary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address([u8; 32]);

/// Failure to parse an address from its hex form.
#[derive(Debug, Error)]
#[error("invalid address encoding: {0}")]
pub struct InvalidAddress(String);

impl Address {
    /// The reserved null address.
    pub const NULL: Self = Self([0u8; 32]);

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_null(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse an address from 64 hex characters.
    pub fn from_hex(s: &str) -> Result<Self, InvalidAddress> {
        let raw = hex::decode(s).map_err(|e| InvalidAddress(e.to_string()))?;
        let bytes: [u8; 32] = raw
            .try_into()
            .map_err(|v: Vec<u8>| InvalidAddress(format!("expected 32 bytes, got {}", v.len())))?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
