//! Voting ledger — per-target approval and revocation voter sets.
//!
//! Each pending role change is keyed by its (role, account) target and the
//! vote direction. Entries are created lazily on the first vote and removed
//! the instant a threshold is crossed; a resolved target holds no state.

use crate::error::GovernanceError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use warden_types::{Address, RoleId};

/// Which way a governance vote points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoteDirection {
    /// Vote to grant the role to the account.
    Approve,
    /// Vote to revoke the role from the account.
    Revoke,
}

/// The (role, account) pair a grant/revoke vote concerns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VoteTarget {
    pub role: RoleId,
    pub account: Address,
}

impl VoteTarget {
    pub fn new(role: RoleId, account: Address) -> Self {
        Self { role, account }
    }
}

/// Tracks which admins have voted on which pending role change.
///
/// Invariant: a voter appears at most once per (target, direction). The
/// approve and revoke sets for the same target are independent.
pub struct VotingLedger {
    votes: HashMap<(VoteTarget, VoteDirection), HashSet<Address>>,
}

impl VotingLedger {
    pub fn new() -> Self {
        Self {
            votes: HashMap::new(),
        }
    }

    /// Record `voter`'s vote on (target, direction) and return the new
    /// cardinality of the voter set.
    ///
    /// A duplicate vote fails with `AlreadyVoted` and leaves the set
    /// untouched.
    pub fn cast_vote(
        &mut self,
        target: VoteTarget,
        direction: VoteDirection,
        voter: &Address,
    ) -> Result<u32, GovernanceError> {
        let set = self.votes.entry((target, direction)).or_default();
        if !set.insert(*voter) {
            return Err(GovernanceError::AlreadyVoted(voter.to_string()));
        }
        Ok(set.len() as u32)
    }

    /// Remove a previously recorded vote.
    ///
    /// Rollback hook for the governor: when the store mutation at threshold
    /// fails, the vote that crossed the threshold is withdrawn so ledger and
    /// store change as a pair.
    pub(crate) fn retract_vote(
        &mut self,
        target: VoteTarget,
        direction: VoteDirection,
        voter: &Address,
    ) {
        if let Some(set) = self.votes.get_mut(&(target, direction)) {
            set.remove(voter);
            if set.is_empty() {
                self.votes.remove(&(target, direction));
            }
        }
    }

    /// Forget every vote cast on `target`, in both directions.
    ///
    /// Restores the target to the never-voted-on state, so a stale
    /// opposite-direction campaign does not survive a resolved one.
    pub fn clear(&mut self, target: VoteTarget) {
        self.votes.remove(&(target, VoteDirection::Approve));
        self.votes.remove(&(target, VoteDirection::Revoke));
    }

    /// Number of distinct voters recorded for (target, direction).
    pub fn vote_count(&self, target: VoteTarget, direction: VoteDirection) -> u32 {
        self.votes
            .get(&(target, direction))
            .map(|s| s.len() as u32)
            .unwrap_or(0)
    }

    /// Whether `voter` is recorded for (target, direction).
    pub fn has_voted(&self, target: VoteTarget, direction: VoteDirection, voter: &Address) -> bool {
        self.votes
            .get(&(target, direction))
            .is_some_and(|s| s.contains(voter))
    }

    /// The voters recorded for (target, direction), in no particular order.
    pub fn voters(&self, target: VoteTarget, direction: VoteDirection) -> Vec<Address> {
        self.votes
            .get(&(target, direction))
            .map(|s| s.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of unresolved (target, direction) entries.
    pub fn pending_entries(&self) -> usize {
        self.votes.len()
    }
}

impl Default for VotingLedger {
    fn default() -> Self {
        Self::new()
    }
}

/// Meta-store key used for persisting the voting ledger state.
const VOTING_LEDGER_META_KEY: &str = "voting_ledger_state";

/// Serializable snapshot of the ledger's in-memory state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    pub votes: HashMap<(VoteTarget, VoteDirection), HashSet<Address>>,
}

impl VotingLedger {
    /// Serialize the ledger to bytes for meta-store persistence.
    pub fn save_state(&self) -> Vec<u8> {
        let snapshot = LedgerSnapshot {
            votes: self.votes.clone(),
        };
        bincode::serialize(&snapshot).unwrap_or_default()
    }

    /// Restore a ledger from serialized bytes.
    pub fn load_state(data: &[u8]) -> Self {
        match bincode::deserialize::<LedgerSnapshot>(data) {
            Ok(snapshot) => Self {
                votes: snapshot.votes,
            },
            Err(_) => Self::default(),
        }
    }

    /// The meta-store key used for ledger persistence.
    pub fn meta_key() -> &'static str {
        VOTING_LEDGER_META_KEY
    }
}
