use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, export_schema_with_title, remove_schemas, schema_for};

use airdrop_registry::msg::{
    AllocationResponse, AllocationsResponse, ConfigResponse, DistributionChartResponse, ExecuteMsg,
    InstantiateMsg, LookupResponse, MigrateMsg, QueryMsg,
};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema_with_title(&mut schema_for!(ConfigResponse), &out_dir, "ConfigResponse");
    export_schema_with_title(&mut schema_for!(LookupResponse), &out_dir, "LookupResponse");
    export_schema_with_title(
        &mut schema_for!(AllocationResponse),
        &out_dir,
        "AllocationResponse",
    );
    export_schema_with_title(
        &mut schema_for!(AllocationsResponse),
        &out_dir,
        "AllocationsResponse",
    );
    export_schema_with_title(
        &mut schema_for!(DistributionChartResponse),
        &out_dir,
        "DistributionChartResponse",
    );
}
