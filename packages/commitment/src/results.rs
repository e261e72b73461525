//! Deterministic transaction results.
//!
//! The `LastResultsHash` in a CometBFT header only commits to the fields of
//! `ExecTxResult` every validator agrees on. The rest (logs, info, events,
//! codespace) is stripped before hashing.
//!
//! Ref: https://github.com/cometbft/cometbft/blob/v0.38.5/types/results.go

use bridge_merkle::{empty_hash, hash_from_byte_slices, MerkleError};
use prost::Message;
use tendermint_proto::v0_38::abci::ExecTxResult;

/// Keeps only the deterministic fields of a transaction result.
pub fn deterministic_tx_result(result: &ExecTxResult) -> ExecTxResult {
    ExecTxResult {
        code: result.code,
        data: result.data.clone(),
        gas_wanted: result.gas_wanted,
        gas_used: result.gas_used,
        ..Default::default()
    }
}

/// Protobuf encoding of the deterministic form of each result. These are
/// the leaves of the results tree.
pub fn marshal_tx_results(results: &[ExecTxResult]) -> Vec<Vec<u8>> {
    results
        .iter()
        .map(|result| deterministic_tx_result(result).encode_to_vec())
        .collect()
}

/// Root of the results tree, as recorded in the next block's header.
/// A block without transactions commits to the empty hash.
pub fn results_hash(results: &[ExecTxResult]) -> Result<Vec<u8>, MerkleError> {
    if results.is_empty() {
        return Ok(empty_hash());
    }
    hash_from_byte_slices(&marshal_tx_results(results))
}
