use thiserror::Error;
use warden_store::StoreError;

#[derive(Debug, Error)]
pub enum GovernanceError {
    #[error("caller {0} does not hold the admin role for the target role")]
    Unauthorized(String),

    #[error("the null address cannot be the target of a role change")]
    InvalidAccount,

    #[error("invalid recovery beneficiary: {0}")]
    InvalidBeneficiary(String),

    #[error("account {0} has already voted on this target")]
    AlreadyVoted(String),

    #[error("recovery request {0} not found")]
    RequestNotFound(u64),

    #[error("recovery request {0} has already been denied")]
    AlreadyDenied(u64),

    #[error("recovery request {0} has already been completed")]
    AlreadyCompleted(u64),

    #[error("recovery request {0} has no recorded votes")]
    NoVotes(u64),

    #[error("recovery request {id} cannot be applied for another {remaining_secs}s")]
    TooEarly { id: u64, remaining_secs: u64 },

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
