use std::env::current_dir;

use bridge_commitment::msg::{
    BridgeCommitmentInclusionProofResponse, BridgeCommitmentResponse, QueryMsg,
};
use bridge_commitment::Config;
use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    std::fs::create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(Config), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(BridgeCommitmentResponse), &out_dir);
    export_schema(&schema_for!(BridgeCommitmentInclusionProofResponse), &out_dir);
}
