//! Multi-party governance for privileged roles.
//!
//! Role grants and revocations are gated behind a configurable number of
//! distinct admin votes. An emergency recovery flow can reinstate a new
//! top-level administrator behind a mandatory waiting period that shrinks
//! as votes accumulate.
//!
//! Key principle: one admin = one vote per target and direction. Threshold
//! crossing and the role-store mutation are atomic; no caller can observe
//! a cleared ledger without the applied role change, or the reverse.

pub mod error;
pub mod events;
pub mod governor;
pub mod ledger;
pub mod recovery;

pub use error::GovernanceError;
pub use events::RecoveryStatus;
pub use governor::{RoleGovernor, VoteOutcome};
pub use ledger::{LedgerSnapshot, VoteDirection, VoteTarget, VotingLedger};
pub use recovery::{RecoveryRegistry, RecoveryRequest, RecoverySnapshot};
