pub mod contract;
pub mod error;
pub mod helpers;
pub mod indexed_list;
pub mod msg;
pub mod state;

#[cfg(not(feature = "library"))]
mod entry {
    use super::*;
    use cosmwasm_std::{entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response};
    use msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};

    #[entry_point]
    pub fn instantiate(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: InstantiateMsg,
    ) -> Result<Response, error::ContractError> {
        contract::instantiate(deps, env, info, msg)
    }

    #[entry_point]
    pub fn execute(
        deps: DepsMut,
        env: Env,
        info: MessageInfo,
        msg: ExecuteMsg,
    ) -> Result<Response, error::ContractError> {
        match msg {
            ExecuteMsg::Mint { to, token_uri } => {
                contract::execute_mint(deps, env, info, to, token_uri)
            }
            ExecuteMsg::MintRequestable {
                to,
                token_uri,
                secret_hash,
            } => contract::execute_mint_requestable(deps, env, info, to, token_uri, secret_hash),
            ExecuteMsg::BatchMint { mints } => {
                contract::execute_batch_mint(deps, env, info, mints)
            }
            ExecuteMsg::TransferNft {
                recipient,
                token_id,
            } => contract::execute_transfer_nft(deps, env, info, recipient, token_id),
            ExecuteMsg::SetRequestable {
                token_id,
                enable,
                secret_hash,
            } => contract::execute_set_requestable(deps, env, info, token_id, enable, secret_hash),
            ExecuteMsg::RequestTransfer {
                token_id,
                secret,
                from,
                to,
            } => contract::execute_request_transfer(deps, env, info, token_id, secret, from, to),
            ExecuteMsg::Burn { token_id } => contract::execute_burn(deps, env, info, token_id),
            ExecuteMsg::Approve { spender, token_id } => {
                contract::execute_approve(deps, env, info, spender, token_id)
            }
            ExecuteMsg::Revoke { token_id } => contract::execute_revoke(deps, env, info, token_id),
            ExecuteMsg::ApproveAll { operator } => {
                contract::execute_approve_all(deps, env, info, operator)
            }
            ExecuteMsg::RevokeAll { operator } => {
                contract::execute_revoke_all(deps, env, info, operator)
            }
            ExecuteMsg::Pause {} => contract::execute_pause(deps, env, info),
            ExecuteMsg::Unpause {} => contract::execute_unpause(deps, env, info),
        }
    }

    #[entry_point]
    pub fn query(
        deps: Deps,
        _env: Env,
        msg: QueryMsg,
    ) -> Result<Binary, error::ContractError> {
        match msg {
            QueryMsg::Config {} => contract::query_config(deps),
            QueryMsg::NftInfo { token_id } => contract::query_nft_info(deps, token_id),
            QueryMsg::OwnerOf { token_id } => contract::query_owner_of(deps, token_id),
            QueryMsg::Exists { token_id } => contract::query_exists(deps, token_id),
            QueryMsg::NumTokens {} => contract::query_num_tokens(deps),
            QueryMsg::Balance { owner } => contract::query_balance(deps, owner),
            QueryMsg::TokenByIndex { index } => contract::query_token_by_index(deps, index),
            QueryMsg::TokenOfOwnerByIndex { owner, index } => {
                contract::query_token_of_owner_by_index(deps, owner, index)
            }
            QueryMsg::Tokens {
                owner,
                start,
                limit,
            } => contract::query_tokens(deps, owner, start, limit),
            QueryMsg::AllTokens { start, limit } => contract::query_all_tokens(deps, start, limit),
            QueryMsg::Requestable { token_id } => contract::query_requestable(deps, token_id),
            QueryMsg::Approval { token_id, spender } => {
                contract::query_approval(deps, token_id, spender)
            }
            QueryMsg::Operator { owner, operator } => {
                contract::query_operator(deps, owner, operator)
            }
        }
    }

    #[entry_point]
    pub fn migrate(
        deps: DepsMut,
        env: Env,
        msg: MigrateMsg,
    ) -> Result<Response, error::ContractError> {
        contract::migrate(deps, env, msg)
    }
}
