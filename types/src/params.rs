//! Governance parameters.
//!
//! Hosts construct these once, at governor/registry construction time. The
//! values are immutable for the lifetime of the component that holds them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seconds in one day.
pub const DAY_SECS: u64 = 86_400;

/// Tunable values for the governance layer.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GovernanceParams {
    /// Number of distinct admin votes required before a role change takes
    /// effect. Must be at least 1. With 1, every request is immediately
    /// effective (single-admin governance).
    pub required_votes: u32,

    /// Mandatory waiting period for an emergency recovery request with a
    /// single vote. Default: 60 days.
    pub recovery_base_delay_secs: u64,

    /// Reduction of the recovery waiting period per accumulated vote.
    /// Default: 15 days, so 4 votes collapse the waiting period to zero.
    pub recovery_vote_decay_secs: u64,
}

/// Rejected parameter set.
#[derive(Debug, Error)]
pub enum InvalidParams {
    #[error("required_votes must be at least 1")]
    ZeroRequiredVotes,
}

impl GovernanceParams {
    /// Check the invariants the governance components rely on.
    pub fn validate(&self) -> Result<(), InvalidParams> {
        if self.required_votes == 0 {
            return Err(InvalidParams::ZeroRequiredVotes);
        }
        Ok(())
    }
}

impl Default for GovernanceParams {
    fn default() -> Self {
        Self {
            required_votes: 1,
            recovery_base_delay_secs: 60 * DAY_SECS,
            recovery_vote_decay_secs: 15 * DAY_SECS,
        }
    }
}
