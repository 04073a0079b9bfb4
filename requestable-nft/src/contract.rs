use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, HexBinary, MessageInfo, Response, Storage,
};
use cw2::set_contract_version;
use sha2::{Digest, Sha256};

use crate::error::ContractError;
use crate::helpers::{
    assert_minter, assert_not_paused, assert_owner, is_authorized, reject_funds, token_owner,
};
use crate::indexed_list::IndexedList;
use crate::msg::*;
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:requestable-nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const MAX_BATCH_SIZE: u32 = 25;
const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;
const SECRET_HASH_LEN: usize = 32;

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let minter = deps.api.addr_validate(&msg.minter)?;

    let config = Config {
        owner,
        minter,
        paused: false,
        name: msg.name,
        symbol: msg.symbol,
    };
    CONFIG.save(deps.storage, &config)?;
    NEXT_ID.save(deps.storage, &0u64)?;
    ALL_TOKENS.save(deps.storage, &IndexedList::default())?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("owner", config.owner.as_str())
        .add_attribute("minter", config.minter.as_str()))
}

// ─── Execute: Minting ───────────────────────────────────────────────────────

pub fn execute_mint(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    to: String,
    token_uri: Option<String>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;
    assert_minter(deps.as_ref(), &info.sender)?;

    let recipient = deps.api.addr_validate(&to)?;
    let token_id = mint_single(deps, &recipient, token_uri)?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("to", recipient.as_str()))
}

pub fn execute_mint_requestable(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    to: String,
    token_uri: Option<String>,
    secret_hash: HexBinary,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;
    assert_minter(deps.as_ref(), &info.sender)?;
    validate_secret_hash(&secret_hash)?;

    let recipient = deps.api.addr_validate(&to)?;
    let token_id = mint_single(deps.branch(), &recipient, token_uri)?;
    REQUESTABLE.save(
        deps.storage,
        token_id,
        &RequestableEntry {
            requestable: true,
            secret_hash,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "mint_requestable")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("to", recipient.as_str()))
}

pub fn execute_batch_mint(
    mut deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    mints: Vec<MintRequest>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;
    assert_minter(deps.as_ref(), &info.sender)?;

    if mints.is_empty() {
        return Err(ContractError::EmptyBatch);
    }
    if mints.len() as u32 > MAX_BATCH_SIZE {
        return Err(ContractError::BatchTooLarge {
            max: MAX_BATCH_SIZE,
        });
    }

    // Validate all recipients upfront
    let validated: Vec<(Addr, Option<String>)> = mints
        .into_iter()
        .map(|m| Ok((deps.api.addr_validate(&m.to)?, m.token_uri)))
        .collect::<Result<Vec<_>, ContractError>>()?;

    let mut token_ids = Vec::with_capacity(validated.len());
    for (recipient, token_uri) in validated {
        let token_id = mint_single(deps.branch(), &recipient, token_uri)?;
        token_ids.push(token_id);
    }

    Ok(Response::new()
        .add_attribute("action", "batch_mint")
        .add_attribute("count", token_ids.len().to_string())
        .add_attribute("first_token_id", token_ids[0].to_string())
        .add_attribute("last_token_id", token_ids[token_ids.len() - 1].to_string()))
}

/// Assign the next id and write ownership, enumeration, and metadata together.
fn mint_single(
    deps: DepsMut,
    recipient: &Addr,
    token_uri: Option<String>,
) -> Result<u64, ContractError> {
    // Ids come from a counter that only grows, so a burned token's id is never
    // handed out again. NumTokens reports live tokens, not this counter.
    let token_id = NEXT_ID.load(deps.storage)?;
    NEXT_ID.save(deps.storage, &(token_id + 1))?;

    OWNERS.save(deps.storage, token_id, recipient)?;
    if let Some(uri) = token_uri {
        TOKEN_URIS.save(deps.storage, token_id, &uri)?;
    }

    let mut all = ALL_TOKENS.load(deps.storage)?;
    all.append(token_id)?;
    ALL_TOKENS.save(deps.storage, &all)?;

    let mut owned = OWNED_TOKENS
        .may_load(deps.storage, recipient)?
        .unwrap_or_default();
    owned.append(token_id)?;
    OWNED_TOKENS.save(deps.storage, recipient, &owned)?;

    Ok(token_id)
}

// ─── Execute: Transfers ─────────────────────────────────────────────────────

pub fn execute_transfer_nft(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;

    let owner = token_owner(deps.as_ref(), token_id)?;
    if !is_authorized(deps.as_ref(), token_id, &info.sender)? {
        return Err(ContractError::Unauthorized {
            role: "owner or approved".to_string(),
        });
    }

    let new_owner = deps.api.addr_validate(&recipient)?;
    transfer_token(deps.storage, &owner, &new_owner, token_id)?;

    Ok(Response::new()
        .add_attribute("action", "transfer_nft")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("from", owner.as_str())
        .add_attribute("to", new_owner.as_str()))
}

pub fn execute_set_requestable(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: u64,
    enable: bool,
    secret_hash: Option<HexBinary>,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;

    // Only the current owner may open or close the capability path
    let owner = token_owner(deps.as_ref(), token_id)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized {
            role: "token owner".to_string(),
        });
    }

    if enable {
        let hash = secret_hash.ok_or(ContractError::InvalidSecretHash { length: 0 })?;
        validate_secret_hash(&hash)?;
        REQUESTABLE.save(
            deps.storage,
            token_id,
            &RequestableEntry {
                requestable: true,
                secret_hash: hash,
            },
        )?;
    } else if let Some(mut entry) = REQUESTABLE.may_load(deps.storage, token_id)? {
        entry.requestable = false;
        REQUESTABLE.save(deps.storage, token_id, &entry)?;
    }

    Ok(Response::new()
        .add_attribute("action", "set_requestable")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("requestable", enable.to_string()))
}

pub fn execute_request_transfer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: u64,
    secret: String,
    from: String,
    to: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;

    let entry = REQUESTABLE
        .may_load(deps.storage, token_id)?
        .filter(|e| e.requestable)
        .ok_or(ContractError::NotRequestable { token_id })?;

    let digest = Sha256::digest(secret.as_bytes());
    if digest.as_slice() != entry.secret_hash.as_slice() {
        return Err(ContractError::SecretMismatch { token_id });
    }

    // No sender check: revealing the preimage is the entire authorization.
    // `from` must still be the listed owner for the transfer to be coherent.
    let from_addr = deps.api.addr_validate(&from)?;
    let to_addr = deps.api.addr_validate(&to)?;
    transfer_token(deps.storage, &from_addr, &to_addr, token_id)?;

    // The preimage is now on-chain, so the spent hash must not stay armed
    REQUESTABLE.save(
        deps.storage,
        token_id,
        &RequestableEntry {
            requestable: false,
            secret_hash: entry.secret_hash,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "request_transfer")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("from", from_addr.as_str())
        .add_attribute("to", to_addr.as_str()))
}

/// Move `token_id` from `from` to `to`, keeping ownership and both
/// enumerations in step. Fails if `from` is not the listed owner.
fn transfer_token(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    token_id: u64,
) -> Result<(), ContractError> {
    let owner = OWNERS
        .may_load(storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;
    if owner != *from {
        return Err(ContractError::IncorrectOwner {
            token_id,
            from: from.to_string(),
        });
    }

    let mut from_list = OWNED_TOKENS
        .may_load(storage, from)?
        .unwrap_or_default();
    from_list.swap_remove(token_id)?;
    if from_list.is_empty() {
        OWNED_TOKENS.remove(storage, from);
    } else {
        OWNED_TOKENS.save(storage, from, &from_list)?;
    }

    let mut to_list = OWNED_TOKENS.may_load(storage, to)?.unwrap_or_default();
    to_list.append(token_id)?;
    OWNED_TOKENS.save(storage, to, &to_list)?;

    OWNERS.save(storage, token_id, to)?;
    TOKEN_APPROVALS.remove(storage, token_id);
    Ok(())
}

// ─── Execute: Burn ──────────────────────────────────────────────────────────

pub fn execute_burn(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;

    let owner = token_owner(deps.as_ref(), token_id)?;
    if !is_authorized(deps.as_ref(), token_id, &info.sender)? {
        return Err(ContractError::Unauthorized {
            role: "owner or approved".to_string(),
        });
    }

    let mut owned = OWNED_TOKENS
        .may_load(deps.storage, &owner)?
        .unwrap_or_default();
    owned.swap_remove(token_id)?;
    if owned.is_empty() {
        OWNED_TOKENS.remove(deps.storage, &owner);
    } else {
        OWNED_TOKENS.save(deps.storage, &owner, &owned)?;
    }

    let mut all = ALL_TOKENS.load(deps.storage)?;
    all.swap_remove(token_id)?;
    ALL_TOKENS.save(deps.storage, &all)?;

    OWNERS.remove(deps.storage, token_id);
    TOKEN_URIS.remove(deps.storage, token_id);
    REQUESTABLE.remove(deps.storage, token_id);
    TOKEN_APPROVALS.remove(deps.storage, token_id);

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("owner", owner.as_str()))
}

// ─── Execute: Approvals ─────────────────────────────────────────────────────

pub fn execute_approve(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    spender: String,
    token_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;

    let owner = token_owner(deps.as_ref(), token_id)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized {
            role: "token owner".to_string(),
        });
    }

    let spender_addr = deps.api.addr_validate(&spender)?;
    TOKEN_APPROVALS.save(deps.storage, token_id, &spender_addr)?;

    Ok(Response::new()
        .add_attribute("action", "approve")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("spender", spender_addr.as_str()))
}

pub fn execute_revoke(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    token_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let owner = token_owner(deps.as_ref(), token_id)?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized {
            role: "token owner".to_string(),
        });
    }

    TOKEN_APPROVALS.remove(deps.storage, token_id);

    Ok(Response::new()
        .add_attribute("action", "revoke")
        .add_attribute("token_id", token_id.to_string()))
}

pub fn execute_approve_all(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    operator: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;

    let operator_addr = deps.api.addr_validate(&operator)?;
    OPERATOR_APPROVALS.save(deps.storage, (&info.sender, &operator_addr), &true)?;

    Ok(Response::new()
        .add_attribute("action", "approve_all")
        .add_attribute("owner", info.sender.as_str())
        .add_attribute("operator", operator_addr.as_str()))
}

pub fn execute_revoke_all(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    operator: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let operator_addr = deps.api.addr_validate(&operator)?;
    OPERATOR_APPROVALS.remove(deps.storage, (&info.sender, &operator_addr));

    Ok(Response::new()
        .add_attribute("action", "revoke_all")
        .add_attribute("owner", info.sender.as_str())
        .add_attribute("operator", operator_addr.as_str()))
}

// ─── Execute: Admin ─────────────────────────────────────────────────────────

pub fn execute_pause(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    CONFIG.update(deps.storage, |mut c| -> cosmwasm_std::StdResult<_> {
        c.paused = true;
        Ok(c)
    })?;

    Ok(Response::new().add_attribute("action", "pause"))
}

pub fn execute_unpause(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    if !config.paused {
        return Err(ContractError::NotPaused);
    }

    CONFIG.update(deps.storage, |mut c| -> cosmwasm_std::StdResult<_> {
        c.paused = false;
        Ok(c)
    })?;

    Ok(Response::new().add_attribute("action", "unpause"))
}

fn validate_secret_hash(hash: &HexBinary) -> Result<(), ContractError> {
    if hash.as_slice().len() != SECRET_HASH_LEN {
        return Err(ContractError::InvalidSecretHash {
            length: hash.as_slice().len(),
        });
    }
    Ok(())
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query_config(deps: Deps) -> Result<Binary, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(to_json_binary(&config)?)
}

pub fn query_nft_info(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let owner = token_owner(deps, token_id)?;
    // A token that exists but never had metadata set reads as an empty string
    let token_uri = TOKEN_URIS
        .may_load(deps.storage, token_id)?
        .unwrap_or_default();
    let requestable = REQUESTABLE
        .may_load(deps.storage, token_id)?
        .map(|e| e.requestable)
        .unwrap_or(false);
    let approval = TOKEN_APPROVALS
        .may_load(deps.storage, token_id)?
        .map(|a| a.to_string());

    Ok(to_json_binary(&NftInfoResponse {
        token_id,
        owner: owner.to_string(),
        token_uri,
        requestable,
        approval,
    })?)
}

pub fn query_owner_of(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let owner = token_owner(deps, token_id)?;
    let approval = TOKEN_APPROVALS
        .may_load(deps.storage, token_id)?
        .map(|a| a.to_string());
    let approvals = approval.into_iter().collect();

    Ok(to_json_binary(&OwnerOfResponse {
        owner: owner.to_string(),
        approvals,
    })?)
}

pub fn query_exists(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let exists = OWNERS.may_load(deps.storage, token_id)?.is_some();
    Ok(to_json_binary(&ExistsResponse { exists })?)
}

pub fn query_num_tokens(deps: Deps) -> Result<Binary, ContractError> {
    let all = ALL_TOKENS.load(deps.storage)?;
    Ok(to_json_binary(&NumTokensResponse { count: all.len() })?)
}

pub fn query_balance(deps: Deps, owner: String) -> Result<Binary, ContractError> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let balance = OWNED_TOKENS
        .may_load(deps.storage, &owner_addr)?
        .map(|list| list.len())
        .unwrap_or(0);
    Ok(to_json_binary(&BalanceResponse { balance })?)
}

pub fn query_token_by_index(deps: Deps, index: u64) -> Result<Binary, ContractError> {
    let all = ALL_TOKENS.load(deps.storage)?;
    let token_id = all.at(index).ok_or(ContractError::IndexOutOfRange {
        index,
        len: all.len(),
    })?;
    Ok(to_json_binary(&TokenIndexResponse { token_id })?)
}

pub fn query_token_of_owner_by_index(
    deps: Deps,
    owner: String,
    index: u64,
) -> Result<Binary, ContractError> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let owned = OWNED_TOKENS
        .may_load(deps.storage, &owner_addr)?
        .unwrap_or_default();
    let token_id = owned.at(index).ok_or(ContractError::IndexOutOfRange {
        index,
        len: owned.len(),
    })?;
    Ok(to_json_binary(&TokenIndexResponse { token_id })?)
}

pub fn query_tokens(
    deps: Deps,
    owner: String,
    start: Option<u64>,
    limit: Option<u32>,
) -> Result<Binary, ContractError> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start.unwrap_or(0) as usize;

    let owned = OWNED_TOKENS
        .may_load(deps.storage, &owner_addr)?
        .unwrap_or_default();
    let tokens: Vec<u64> = owned.iter().skip(start).take(limit).collect();

    Ok(to_json_binary(&TokensResponse { tokens })?)
}

pub fn query_all_tokens(
    deps: Deps,
    start: Option<u64>,
    limit: Option<u32>,
) -> Result<Binary, ContractError> {
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start.unwrap_or(0) as usize;

    let all = ALL_TOKENS.load(deps.storage)?;
    let tokens: Vec<u64> = all.iter().skip(start).take(limit).collect();

    Ok(to_json_binary(&TokensResponse { tokens })?)
}

pub fn query_requestable(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let entry = REQUESTABLE.may_load(deps.storage, token_id)?;
    let resp = match entry {
        Some(e) => RequestableResponse {
            requestable: e.requestable,
            secret_hash: Some(e.secret_hash),
        },
        None => RequestableResponse {
            requestable: false,
            secret_hash: None,
        },
    };
    Ok(to_json_binary(&resp)?)
}

pub fn query_approval(deps: Deps, token_id: u64, spender: String) -> Result<Binary, ContractError> {
    let spender_addr = deps.api.addr_validate(&spender)?;
    let approved = TOKEN_APPROVALS
        .may_load(deps.storage, token_id)?
        .map(|a| a == spender_addr)
        .unwrap_or(false);

    Ok(to_json_binary(&ApprovalResponse { approved })?)
}

pub fn query_operator(deps: Deps, owner: String, operator: String) -> Result<Binary, ContractError> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let operator_addr = deps.api.addr_validate(&operator)?;
    let approved = OPERATOR_APPROVALS
        .may_load(deps.storage, (&owner_addr, &operator_addr))?
        .unwrap_or(false);

    Ok(to_json_binary(&OperatorResponse { approved })?)
}

// ─── Migrate ────────────────────────────────────────────────────────────────

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
