use cosmwasm_std::{Addr, Deps, MessageInfo};

use crate::error::ContractError;
use crate::state::{CONFIG, OPERATOR_APPROVALS, OWNERS, TOKEN_APPROVALS};

pub fn assert_owner(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.owner {
        return Err(ContractError::Unauthorized {
            role: "owner".to_string(),
        });
    }
    Ok(())
}

pub fn assert_minter(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.minter {
        return Err(ContractError::Unauthorized {
            role: "minter".to_string(),
        });
    }
    Ok(())
}

pub fn assert_not_paused(deps: Deps) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::Paused);
    }
    Ok(())
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}

/// Load the current owner of `token_id`, or fail if the token does not exist.
pub fn token_owner(deps: Deps, token_id: u64) -> Result<Addr, ContractError> {
    OWNERS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })
}

/// Check if `spender` is authorized to act on `token_id`: the owner, the
/// per-token approved spender, or an operator for the owner.
pub fn is_authorized(deps: Deps, token_id: u64, spender: &Addr) -> Result<bool, ContractError> {
    let owner = token_owner(deps, token_id)?;
    if *spender == owner {
        return Ok(true);
    }
    if let Some(approved) = TOKEN_APPROVALS.may_load(deps.storage, token_id)? {
        if approved == *spender {
            return Ok(true);
        }
    }
    if let Some(true) = OPERATOR_APPROVALS.may_load(deps.storage, (&owner, spender))? {
        return Ok(true);
    }
    Ok(false)
}
