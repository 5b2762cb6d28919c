//! Audit events emitted by the governance components.
//!
//! Events are telemetry surface, not required for correctness: every
//! mutating recovery operation returns the post-mutation status and logs it
//! through `tracing`. Hosts that relay events to subscribers serialize these
//! records as they see fit.

use serde::{Deserialize, Serialize};
use warden_types::Timestamp;

/// Snapshot of a recovery request's state after a mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecoveryStatus {
    /// Request id.
    pub id: u64,
    /// When the request was created.
    pub timestamp: Timestamp,
    /// Whether the request has been vetoed.
    pub denied: bool,
    /// Whether the request has been applied.
    pub completed: bool,
    /// Distinct approval votes, including the creator's.
    pub vote_count: u32,
}
