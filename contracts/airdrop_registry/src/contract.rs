#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;

use cosmwasm_std::{
    attr, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult, Storage,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use std::collections::BTreeSet;

use airdrop_allocation::{distribution_chart, wallet_key, Allocation};

use crate::error::ContractError;
use crate::msg::{
    AllocationResponse, AllocationRow, AllocationsResponse, ConfigResponse,
    DistributionChartResponse, ExecuteMsg, InstantiateMsg, LookupResponse, MigrateMsg, QueryMsg,
};
use crate::state::{Config, ALLOCATIONS, CONFIG, RECORD_COUNT, TABLE_VERSION, WALLET_INDEX};

const CONTRACT_NAME: &str = "crates.io:airdrop_registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// settings for pagination
const MAX_LIMIT: u8 = 100;
const DEFAULT_LIMIT: u8 = 20;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = msg.owner.unwrap_or(info.sender);
    CONFIG.save(deps.storage, &Config { owner: Some(owner) })?;

    // no table yet; version 0 is never a registered table's identity
    TABLE_VERSION.save(deps.storage, &0u64)?;
    RECORD_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::UpdateConfig { new_owner } => execute_update_config(deps, info, new_owner),
        ExecuteMsg::RegisterTable { allocations } => {
            execute_register_table(deps, info, allocations)
        }
    }
}

pub fn execute_update_config(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: Option<Addr>,
) -> Result<Response, ContractError> {
    assert_owner(deps.as_ref(), &info)?;

    // None locks the table for good
    CONFIG.save(deps.storage, &Config { owner: new_owner })?;

    Ok(Response::new().add_attributes(vec![attr("action", "update_config")]))
}

pub fn execute_register_table(
    deps: DepsMut,
    info: MessageInfo,
    rows: Vec<AllocationRow>,
) -> Result<Response, ContractError> {
    assert_owner(deps.as_ref(), &info)?;

    if rows.is_empty() {
        return Err(ContractError::EmptyTable {});
    }

    // validation pass: every row is checked before anything is written, so
    // a malformed table leaves the previous one untouched
    let mut seen = BTreeSet::new();
    let mut allocations = Vec::with_capacity(rows.len());
    for (position, row) in rows.into_iter().enumerate() {
        let position = position as u64;
        if row.name.trim().is_empty() {
            return Err(ContractError::EmptyName { position });
        }
        if row.wallet.trim().is_empty() {
            return Err(ContractError::EmptyWallet { position });
        }
        let key = wallet_key(&row.wallet);
        if !seen.insert(key.clone()) {
            return Err(ContractError::DuplicateWallet { wallet_key: key });
        }
        allocations.push(Allocation {
            name: row.name,
            wallet_address: row.wallet,
            wallet_key: key,
            drop_amount: row.drop_amount,
            shard_count: row.shard_count,
        });
    }

    // the previous table is invalidated wholesale; row order defines rank
    clear_table(deps.storage)?;

    let record_count = allocations.len() as u64;
    for (position, allocation) in allocations.into_iter().enumerate() {
        let position = position as u64;
        WALLET_INDEX.save(deps.storage, &allocation.wallet_key, &position)?;
        ALLOCATIONS.save(deps.storage, position, &allocation)?;
    }
    RECORD_COUNT.save(deps.storage, &record_count)?;
    let table_version =
        TABLE_VERSION.update(deps.storage, |version| -> StdResult<_> { Ok(version + 1) })?;

    Ok(Response::new().add_attributes(vec![
        attr("action", "register_table"),
        attr("table_version", table_version.to_string()),
        attr("record_count", record_count.to_string()),
    ]))
}

fn assert_owner(deps: Deps, info: &MessageInfo) -> Result<(), ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    let owner = cfg.owner.ok_or(ContractError::Unauthorized {
        sender: info.sender.to_string(),
    })?;
    if info.sender != owner {
        return Err(ContractError::Unauthorized {
            sender: info.sender.to_string(),
        });
    }
    Ok(())
}

fn clear_table(storage: &mut dyn Storage) -> StdResult<()> {
    let positions: Vec<u64> = ALLOCATIONS
        .keys(storage, None, None, Order::Ascending)
        .collect::<StdResult<_>>()?;
    for position in positions {
        ALLOCATIONS.remove(storage, position);
    }

    let wallet_keys: Vec<String> = WALLET_INDEX
        .keys(storage, None, None, Order::Ascending)
        .collect::<StdResult<_>>()?;
    for key in wallet_keys {
        WALLET_INDEX.remove(storage, &key);
    }
    Ok(())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Lookup { wallet } => to_json_binary(&query_lookup(deps, wallet)?),
        QueryMsg::Allocation { position } => to_json_binary(&query_allocation(deps, position)?),
        QueryMsg::Allocations {
            offset,
            limit,
            order,
        } => to_json_binary(&query_allocations(deps, offset, limit, order)?),
        QueryMsg::DistributionChart { highlight } => {
            to_json_binary(&query_distribution_chart(deps, highlight)?)
        }
    }
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let cfg = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: cfg.owner.map(|o| o.to_string()),
        table_version: TABLE_VERSION.load(deps.storage)?,
        record_count: RECORD_COUNT.load(deps.storage)?,
    })
}

pub fn query_lookup(deps: Deps, wallet: String) -> StdResult<LookupResponse> {
    if wallet.is_empty() {
        return Ok(LookupResponse { matched: None });
    }

    let key = wallet_key(&wallet);
    let matched = match WALLET_INDEX.may_load(deps.storage, &key)? {
        Some(position) => Some(into_response(
            position,
            ALLOCATIONS.load(deps.storage, position)?,
        )),
        None => None,
    };
    Ok(LookupResponse { matched })
}

pub fn query_allocation(deps: Deps, position: u64) -> StdResult<AllocationResponse> {
    let allocation = ALLOCATIONS.load(deps.storage, position)?;
    Ok(into_response(position, allocation))
}

pub fn query_allocations(
    deps: Deps,
    offset: Option<u64>,
    limit: Option<u8>,
    order: Option<u8>,
) -> StdResult<AllocationsResponse> {
    let (limit, min, max, order_enum) = get_range_params(offset, limit, order);
    let allocations = ALLOCATIONS
        .range(deps.storage, min, max, order_enum)
        .take(limit)
        .map(|item| item.map(|(position, allocation)| into_response(position, allocation)))
        .collect::<StdResult<_>>()?;
    Ok(AllocationsResponse { allocations })
}

pub fn query_distribution_chart(
    deps: Deps,
    highlight: Option<u64>,
) -> StdResult<DistributionChartResponse> {
    let allocations: Vec<Allocation> = ALLOCATIONS
        .range(deps.storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, allocation)| allocation))
        .collect::<StdResult<_>>()?;

    // positions beyond usize (or the table) silently mean no highlight
    let highlight = highlight.and_then(|position| usize::try_from(position).ok());
    let chart = distribution_chart(&allocations, highlight);

    Ok(DistributionChartResponse {
        table_version: TABLE_VERSION.load(deps.storage)?,
        chart,
    })
}

fn get_range_params(
    offset: Option<u64>,
    limit: Option<u8>,
    order: Option<u8>,
) -> (
    usize,
    Option<Bound<'static, u64>>,
    Option<Bound<'static, u64>>,
    Order,
) {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let mut min: Option<Bound<u64>> = None;
    let mut max: Option<Bound<u64>> = None;
    let mut order_enum = Order::Ascending;
    if let Some(num) = order {
        if num == 2 {
            order_enum = Order::Descending;
        }
    }

    // if there is offset, assign to min or max
    let offset_value = offset.map(Bound::exclusive);
    match order_enum {
        Order::Ascending => min = offset_value,
        Order::Descending => max = offset_value,
    }

    (limit, min, max, order_enum)
}

fn into_response(position: u64, allocation: Allocation) -> AllocationResponse {
    AllocationResponse {
        position,
        rank: position + 1,
        name: allocation.name,
        wallet_address: allocation.wallet_address,
        drop_amount: allocation.drop_amount,
        shard_count: allocation.shard_count,
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
