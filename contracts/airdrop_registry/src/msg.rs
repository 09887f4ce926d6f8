use cosmwasm_std::{Addr, Decimal};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use airdrop_allocation::ChartDescription;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    /// Owner if none set to info.sender.
    pub owner: Option<Addr>,
}

/// One row of the source allocation table. Every field is required; a row
/// missing any of them fails deserialization before the handler runs.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AllocationRow {
    pub name: String,
    /// canonical mixed-case wallet address
    pub wallet: String,
    pub drop_amount: Decimal,
    pub shard_count: Decimal,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    UpdateConfig {
        /// NewOwner if non sent, contract gets locked. Lookups keep
        /// working but no new table can be registered.
        new_owner: Option<Addr>,
    },
    /// Replace the allocation table wholesale. Row order defines rank.
    /// Rejected entirely if any row is malformed, so the previous table
    /// stays intact on failure.
    RegisterTable { allocations: Vec<AllocationRow> },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    /// Exact-match search by raw wallet string, any length or casing.
    Lookup { wallet: String },
    Allocation { position: u64 },
    Allocations {
        offset: Option<u64>,
        limit: Option<u8>,
        order: Option<u8>,
    },
    /// The dual-series reward distribution chart, optionally emphasizing
    /// the record at `highlight`. An out-of-range position is ignored.
    DistributionChart { highlight: Option<u64> },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub owner: Option<String>,
    pub table_version: u64,
    pub record_count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AllocationResponse {
    /// 0-based position in the registered sequence
    pub position: u64,
    /// 1-based display rank
    pub rank: u64,
    pub name: String,
    pub wallet_address: String,
    pub drop_amount: Decimal,
    pub shard_count: Decimal,
}

/// `matched: None` means the search completed without a hit. Whether a
/// search happened at all is the caller's state, not the contract's.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct LookupResponse {
    pub matched: Option<AllocationResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct AllocationsResponse {
    pub allocations: Vec<AllocationResponse>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DistributionChartResponse {
    pub table_version: u64,
    pub chart: ChartDescription,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
