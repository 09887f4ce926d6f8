use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use airdrop_allocation::Allocation;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    /// Only the owner can register tables. None locks the registry:
    /// lookups and charts keep working but the table is frozen.
    pub owner: Option<Addr>,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Identity of the currently registered table. Bumped on every
/// registration so consumers can key caches on it; 0 means no table yet.
pub const TABLE_VERSION: Item<u64> = Item::new("table_version");
pub const RECORD_COUNT: Item<u64> = Item::new("record_count");

/// ALLOCATIONS maps the 0-based table position to the record; rank is
/// position + 1. WALLET_INDEX maps the normalized wallet key back to the
/// position.
pub const ALLOCATIONS: Map<u64, Allocation> = Map::new("allocations");
pub const WALLET_INDEX: Map<&str, u64> = Map::new("wallet_index");
