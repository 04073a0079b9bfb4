use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: only {role} can perform this action")]
    Unauthorized { role: String },

    #[error("contract is paused")]
    Paused,

    #[error("contract is not paused")]
    NotPaused,

    #[error("token not found: {token_id}")]
    TokenNotFound { token_id: u64 },

    #[error("token {token_id} is already enumerated")]
    DuplicateEntry { token_id: u64 },

    #[error("enumeration index {index} out of range (length {len})")]
    IndexOutOfRange { index: u64, len: u64 },

    #[error("token {token_id} is not marked requestable")]
    NotRequestable { token_id: u64 },

    #[error("secret does not match the stored hash for token {token_id}")]
    SecretMismatch { token_id: u64 },

    #[error("secret hash must be a 32-byte sha256 digest, got {length} bytes")]
    InvalidSecretHash { length: usize },

    #[error("token {token_id} is not owned by {from}")]
    IncorrectOwner { token_id: u64, from: String },

    #[error("batch mint exceeds maximum of {max} items")]
    BatchTooLarge { max: u32 },

    #[error("batch mint list is empty")]
    EmptyBatch,

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,
}
