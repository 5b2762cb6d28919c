//! Role governor — multi-party approval in front of the role store.
//!
//! Grant and revoke requests share one shape: the caller's vote is recorded
//! in the ledger, and the request only reaches the role store once
//! `required_votes` distinct admins have voted the same way on the same
//! target. Crossing the threshold applies the mutation and clears the
//! target's ledger entries in the same operation.

use crate::error::GovernanceError;
use crate::ledger::{VoteDirection, VoteTarget, VotingLedger};
use tracing::{debug, info};
use warden_store::RoleStore;
use warden_types::{Address, GovernanceParams, RoleId};

/// What a grant/revoke request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VoteOutcome {
    /// The vote was recorded; the threshold has not been reached yet.
    Recorded(u32),
    /// The threshold was reached and the role mutation was applied.
    Applied,
}

/// Gates role grants and revocations behind distinct-admin vote thresholds.
///
/// `required_votes` is immutable for the lifetime of the governor. With a
/// threshold of 1 every request is immediately effective, which preserves
/// plain single-admin governance.
pub struct RoleGovernor {
    required_votes: u32,
    ledger: VotingLedger,
}

impl RoleGovernor {
    /// # Panics
    /// Panics if `params.required_votes` is zero.
    pub fn new(params: &GovernanceParams) -> Self {
        Self::with_ledger(params, VotingLedger::new())
    }

    /// Build a governor around a previously restored ledger.
    ///
    /// # Panics
    /// Panics if `params.required_votes` is zero.
    pub fn with_ledger(params: &GovernanceParams, ledger: VotingLedger) -> Self {
        assert!(params.required_votes >= 1, "required_votes must be at least 1");
        Self {
            required_votes: params.required_votes,
            ledger,
        }
    }

    pub fn required_votes(&self) -> u32 {
        self.required_votes
    }

    /// The ledger of outstanding votes (for introspection and persistence).
    pub fn ledger(&self) -> &VotingLedger {
        &self.ledger
    }

    /// Vote to grant `role` to `account`; applies the grant at threshold.
    pub fn request_grant<S: RoleStore>(
        &mut self,
        store: &S,
        caller: &Address,
        role: &RoleId,
        account: &Address,
    ) -> Result<VoteOutcome, GovernanceError> {
        self.request(store, caller, role, account, VoteDirection::Approve)
    }

    /// Vote to revoke `role` from `account`; applies the revocation at
    /// threshold.
    pub fn request_revoke<S: RoleStore>(
        &mut self,
        store: &S,
        caller: &Address,
        role: &RoleId,
        account: &Address,
    ) -> Result<VoteOutcome, GovernanceError> {
        self.request(store, caller, role, account, VoteDirection::Revoke)
    }

    fn request<S: RoleStore>(
        &mut self,
        store: &S,
        caller: &Address,
        role: &RoleId,
        account: &Address,
        direction: VoteDirection,
    ) -> Result<VoteOutcome, GovernanceError> {
        let admin_role = store.get_role_admin(role)?;
        if !store.has_role(&admin_role, caller)? {
            return Err(GovernanceError::Unauthorized(caller.to_string()));
        }
        if account.is_null() {
            return Err(GovernanceError::InvalidAccount);
        }

        let target = VoteTarget::new(*role, *account);
        let count = self.ledger.cast_vote(target, direction, caller)?;
        if count < self.required_votes {
            debug!(
                role = %role,
                account = %account,
                ?direction,
                votes = count,
                needed = self.required_votes,
                "governance vote recorded"
            );
            return Ok(VoteOutcome::Recorded(count));
        }

        let mutation = match direction {
            VoteDirection::Approve => store.grant_role(role, account),
            VoteDirection::Revoke => store.revoke_role(role, account),
        };
        if let Err(e) = mutation {
            // Ledger and store must change as a pair: withdraw the vote that
            // crossed the threshold before surfacing the failure.
            self.ledger.retract_vote(target, direction, caller);
            return Err(e.into());
        }
        self.ledger.clear(target);
        info!(
            role = %role,
            account = %account,
            ?direction,
            votes = count,
            "role change applied"
        );
        Ok(VoteOutcome::Applied)
    }
}
