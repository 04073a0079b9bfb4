use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::HexBinary;

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    pub minter: String,
    pub name: String,
    pub symbol: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint a single token (minter only)
    Mint {
        to: String,
        token_uri: Option<String>,
    },
    /// Mint a token that is immediately requestable under the given secret hash
    MintRequestable {
        to: String,
        token_uri: Option<String>,
        secret_hash: HexBinary,
    },
    /// Batch mint up to 25 tokens (minter only)
    BatchMint {
        mints: Vec<MintRequest>,
    },
    /// Transfer a token (owner or approved)
    TransferNft {
        recipient: String,
        token_id: u64,
    },
    /// Mark a token requestable under a secret hash, or clear the flag (owner only)
    SetRequestable {
        token_id: u64,
        enable: bool,
        /// Required when enabling; ignored when disabling
        secret_hash: Option<HexBinary>,
    },
    /// Transfer a requestable token by revealing the secret. Any caller may
    /// submit this; knowledge of the preimage is the entire authorization.
    RequestTransfer {
        token_id: u64,
        secret: String,
        from: String,
        to: String,
    },
    /// Destroy a token (owner or approved)
    Burn {
        token_id: u64,
    },
    /// Approve a spender for a specific token
    Approve {
        spender: String,
        token_id: u64,
    },
    /// Revoke approval for a specific token
    Revoke {
        token_id: u64,
    },
    /// Approve an operator for all tokens owned by sender
    ApproveAll {
        operator: String,
    },
    /// Revoke operator approval
    RevokeAll {
        operator: String,
    },
    /// Pause the contract (owner only)
    Pause {},
    /// Unpause the contract (owner only)
    Unpause {},
}

#[cw_serde]
pub struct MintRequest {
    pub to: String,
    pub token_uri: Option<String>,
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get contract configuration
    #[returns(crate::state::Config)]
    Config {},
    /// Get token info (owner + uri + requestable flag)
    #[returns(NftInfoResponse)]
    NftInfo { token_id: u64 },
    /// Get owner of a token
    #[returns(OwnerOfResponse)]
    OwnerOf { token_id: u64 },
    /// Whether a token currently exists
    #[returns(ExistsResponse)]
    Exists { token_id: u64 },
    /// Count of live tokens
    #[returns(NumTokensResponse)]
    NumTokens {},
    /// Count of tokens held by one owner
    #[returns(BalanceResponse)]
    Balance { owner: String },
    /// Token id at a position in the global enumeration
    #[returns(TokenIndexResponse)]
    TokenByIndex { index: u64 },
    /// Token id at a position in one owner's enumeration
    #[returns(TokenIndexResponse)]
    TokenOfOwnerByIndex { owner: String, index: u64 },
    /// Page of token ids owned by an address, by position
    #[returns(TokensResponse)]
    Tokens {
        owner: String,
        start: Option<u64>,
        limit: Option<u32>,
    },
    /// Page of all token ids, by position
    #[returns(TokensResponse)]
    AllTokens {
        start: Option<u64>,
        limit: Option<u32>,
    },
    /// Requestable-transfer state of a token
    #[returns(RequestableResponse)]
    Requestable { token_id: u64 },
    /// Check approval
    #[returns(ApprovalResponse)]
    Approval { token_id: u64, spender: String },
    /// Check operator approval
    #[returns(OperatorResponse)]
    Operator { owner: String, operator: String },
}

#[cw_serde]
pub struct NftInfoResponse {
    pub token_id: u64,
    pub owner: String,
    /// Empty string when no metadata was ever set
    pub token_uri: String,
    pub requestable: bool,
    pub approval: Option<String>,
}

#[cw_serde]
pub struct OwnerOfResponse {
    pub owner: String,
    pub approvals: Vec<String>,
}

#[cw_serde]
pub struct ExistsResponse {
    pub exists: bool,
}

#[cw_serde]
pub struct NumTokensResponse {
    pub count: u64,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: u64,
}

#[cw_serde]
pub struct TokenIndexResponse {
    pub token_id: u64,
}

#[cw_serde]
pub struct TokensResponse {
    pub tokens: Vec<u64>,
}

#[cw_serde]
pub struct RequestableResponse {
    pub requestable: bool,
    pub secret_hash: Option<HexBinary>,
}

#[cw_serde]
pub struct ApprovalResponse {
    pub approved: bool,
}

#[cw_serde]
pub struct OperatorResponse {
    pub approved: bool,
}

#[cw_serde]
pub struct MigrateMsg {}
