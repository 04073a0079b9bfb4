use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary};
use cw_storage_plus::{Item, Map};

use crate::indexed_list::IndexedList;

/// Contract-level configuration
#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub minter: Addr,
    pub paused: bool,
    pub name: String,
    pub symbol: String,
}

/// Secret-gated transfer state for one token.
///
/// While `requestable` is true, anyone who can produce a preimage of
/// `secret_hash` may move the token, regardless of who they are.
#[cw_serde]
pub struct RequestableEntry {
    pub requestable: bool,
    /// sha256 digest of the transfer secret (32 bytes)
    pub secret_hash: HexBinary,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Monotonic id counter. Never decremented, so burned ids are never reissued.
pub const NEXT_ID: Item<u64> = Item::new("next_id");

/// token_id -> current owner; the single source of truth for ownership
pub const OWNERS: Map<u64, Addr> = Map::new("owners");

/// token_id -> metadata URI (only stored when one was provided at mint)
pub const TOKEN_URIS: Map<u64, String> = Map::new("token_uris");

/// token_id -> requestable flag + secret hash
pub const REQUESTABLE: Map<u64, RequestableEntry> = Map::new("requestable");

/// Global enumeration of every live token
pub const ALL_TOKENS: Item<IndexedList> = Item::new("all_tokens");

/// owner -> enumeration of that owner's tokens; entry removed when it empties
pub const OWNED_TOKENS: Map<&Addr, IndexedList> = Map::new("owned_tokens");

/// token_id -> spender Addr (single approval per token)
pub const TOKEN_APPROVALS: Map<u64, Addr> = Map::new("approvals");

/// (owner, operator) -> bool
pub const OPERATOR_APPROVALS: Map<(&Addr, &Addr), bool> = Map::new("operators");
