//! Emergency recovery registry.
//!
//! A recovery request proposes granting the top-level admin role to a new
//! beneficiary. Each request carries a mandatory waiting period that starts
//! at `recovery_base_delay_secs` and shrinks by `recovery_vote_decay_secs`
//! for every distinct approval vote, so broad consensus applies quickly
//! while a lone admin faces the full time-lock. A single deny vote vetoes
//! the request permanently.
//!
//! Requests are never deleted: once denied or completed they are sealed and
//! kept as audit records.

use crate::error::GovernanceError;
use crate::events::RecoveryStatus;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use tracing::info;
use warden_store::RoleStore;
use warden_types::{Address, GovernanceParams, RoleId, Timestamp};

/// A proposal to grant the top-level admin role to a new beneficiary.
///
/// Invariant: `denied` and `completed` are mutually exclusive and terminal.
/// The creator's approval is recorded at creation, so `vote_count` starts
/// at 1 and `voters` always contains the creator.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecoveryRequest {
    pub id: u64,
    pub beneficiary: Address,
    pub created_at: Timestamp,
    pub denied: bool,
    pub completed: bool,
    pub vote_count: u32,
    pub voters: HashSet<Address>,
}

impl RecoveryRequest {
    fn status(&self) -> RecoveryStatus {
        RecoveryStatus {
            id: self.id,
            timestamp: self.created_at,
            denied: self.denied,
            completed: self.completed,
            vote_count: self.vote_count,
        }
    }
}

/// Creates, tracks, and finalizes beneficiary-recovery requests.
pub struct RecoveryRegistry {
    top_role: RoleId,
    base_delay_secs: u64,
    vote_decay_secs: u64,
    /// Next request id; ids are monotonic and start at 1.
    next_id: u64,
    requests: BTreeMap<u64, RecoveryRequest>,
}

impl RecoveryRegistry {
    pub fn new(top_role: RoleId, params: &GovernanceParams) -> Self {
        Self {
            top_role,
            base_delay_secs: params.recovery_base_delay_secs,
            vote_decay_secs: params.recovery_vote_decay_secs,
            next_id: 1,
            requests: BTreeMap::new(),
        }
    }

    /// The role a completed recovery grants.
    pub fn top_role(&self) -> RoleId {
        self.top_role
    }

    /// Open a recovery request for `beneficiary` and record the caller's
    /// approval. Returns the new request id.
    pub fn create<S: RoleStore>(
        &mut self,
        store: &S,
        caller: &Address,
        beneficiary: &Address,
        now: Timestamp,
    ) -> Result<u64, GovernanceError> {
        if !store.has_role(&self.top_role, caller)? {
            return Err(GovernanceError::Unauthorized(caller.to_string()));
        }
        if beneficiary.is_null() {
            return Err(GovernanceError::InvalidBeneficiary(
                "the null address".to_string(),
            ));
        }
        if beneficiary == caller {
            return Err(GovernanceError::InvalidBeneficiary(
                "beneficiary must differ from the caller".to_string(),
            ));
        }

        let id = self.next_id;
        self.next_id += 1;
        let request = RecoveryRequest {
            id,
            beneficiary: *beneficiary,
            created_at: now,
            denied: false,
            completed: false,
            vote_count: 1,
            voters: HashSet::from([*caller]),
        };
        let status = request.status();
        self.requests.insert(id, request);
        log_status(&status, "recovery request created");
        Ok(id)
    }

    /// Cast a vote on an open request.
    ///
    /// An approval adds the caller to the voter set and increments the vote
    /// count. A deny vote vetoes the request outright: the first denial is
    /// final, and the denier is not recorded as a voter.
    pub fn vote(
        &mut self,
        caller: &Address,
        id: u64,
        deny: bool,
    ) -> Result<RecoveryStatus, GovernanceError> {
        let request = self
            .requests
            .get_mut(&id)
            .ok_or(GovernanceError::RequestNotFound(id))?;
        if request.denied {
            return Err(GovernanceError::AlreadyDenied(id));
        }
        if request.completed {
            return Err(GovernanceError::AlreadyCompleted(id));
        }
        if request.voters.contains(caller) {
            return Err(GovernanceError::AlreadyVoted(caller.to_string()));
        }

        if deny {
            request.denied = true;
        } else {
            request.voters.insert(*caller);
            request.vote_count += 1;
        }
        let status = request.status();
        log_status(&status, if deny { "recovery request denied" } else { "recovery vote recorded" });
        Ok(status)
    }

    /// Finalize a request once its waiting period has elapsed, granting the
    /// top-level role to the beneficiary.
    ///
    /// The grant is additive: no existing holder loses the role. The
    /// boundary is inclusive, `elapsed == required` succeeds.
    pub fn apply<S: RoleStore>(
        &mut self,
        store: &S,
        caller: &Address,
        id: u64,
        now: Timestamp,
    ) -> Result<RecoveryStatus, GovernanceError> {
        let required = {
            let request = self
                .requests
                .get(&id)
                .ok_or(GovernanceError::RequestNotFound(id))?;
            if request.denied {
                return Err(GovernanceError::AlreadyDenied(id));
            }
            if request.completed {
                return Err(GovernanceError::AlreadyCompleted(id));
            }
            if request.vote_count == 0 {
                // Unreachable through `create`, kept as a defensive invariant.
                return Err(GovernanceError::NoVotes(id));
            }
            let elapsed = request.created_at.elapsed_since(now);
            let required = self.required_elapsed_secs(request.vote_count);
            if elapsed < required {
                return Err(GovernanceError::TooEarly {
                    id,
                    remaining_secs: required - elapsed,
                });
            }
            required
        };

        let request = self
            .requests
            .get_mut(&id)
            .ok_or(GovernanceError::RequestNotFound(id))?;
        store.grant_role(&self.top_role, &request.beneficiary)?;
        request.completed = true;
        let status = request.status();
        info!(
            id,
            beneficiary = %request.beneficiary,
            applied_by = %caller,
            votes = request.vote_count,
            waited_secs = required,
            "recovery request applied"
        );
        Ok(status)
    }

    /// The mandatory waiting period for a request with `vote_count` votes.
    ///
    /// `base_delay − decay_per_vote × vote_count`, floored at zero. With the
    /// default constants, four votes collapse the period entirely.
    pub fn required_elapsed_secs(&self, vote_count: u32) -> u64 {
        self.base_delay_secs
            .saturating_sub(self.vote_decay_secs.saturating_mul(u64::from(vote_count)))
    }

    pub fn get(&self, id: u64) -> Option<&RecoveryRequest> {
        self.requests.get(&id)
    }

    /// The current status of a request, if it exists.
    pub fn status(&self, id: u64) -> Option<RecoveryStatus> {
        self.requests.get(&id).map(RecoveryRequest::status)
    }

    /// Requests that are neither denied nor completed, in id order.
    pub fn open_requests(&self) -> Vec<&RecoveryRequest> {
        self.requests
            .values()
            .filter(|r| !r.denied && !r.completed)
            .collect()
    }

    /// Total number of requests ever created, terminal ones included.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

fn log_status(status: &RecoveryStatus, message: &'static str) {
    info!(
        id = status.id,
        created_at = %status.timestamp,
        denied = status.denied,
        completed = status.completed,
        votes = status.vote_count,
        "{message}"
    );
}

/// Meta-store key used for persisting the recovery registry state.
const RECOVERY_REGISTRY_META_KEY: &str = "recovery_registry_state";

/// Serializable snapshot of the registry's request records.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecoverySnapshot {
    pub next_id: u64,
    pub requests: BTreeMap<u64, RecoveryRequest>,
}

impl RecoveryRegistry {
    /// Serialize the request records to bytes for meta-store persistence.
    ///
    /// Configuration (top role, decay constants) is not part of the
    /// snapshot; it is supplied again on restore.
    pub fn save_state(&self) -> Vec<u8> {
        let snapshot = RecoverySnapshot {
            next_id: self.next_id,
            requests: self.requests.clone(),
        };
        bincode::serialize(&snapshot).unwrap_or_default()
    }

    /// Restore a registry from serialized bytes.
    pub fn load_state(top_role: RoleId, params: &GovernanceParams, data: &[u8]) -> Self {
        match bincode::deserialize::<RecoverySnapshot>(data) {
            Ok(snapshot) => Self {
                top_role,
                base_delay_secs: params.recovery_base_delay_secs,
                vote_decay_secs: params.recovery_vote_decay_secs,
                next_id: snapshot.next_id,
                requests: snapshot.requests,
            },
            Err(_) => Self::new(top_role, params),
        }
    }

    /// The meta-store key used for registry persistence.
    pub fn meta_key() -> &'static str {
        RECOVERY_REGISTRY_META_KEY
    }
}
