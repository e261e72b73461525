//! Encoding of bridge commitment leaves, matching Solidity's
//! `abi.encode(uint256 height, bytes32 lastResultsHash)` so that a verifier
//! on another chain recomputes the same root.

use bridge_merkle::HASH_SIZE;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::HexBinary;

use crate::error::CommitmentError;

/// Width of an ABI word.
pub const ABI_WORD_SIZE: usize = 32;

/// Size of an encoded leaf: two ABI words.
pub const ENCODED_LEAF_SIZE: usize = 2 * ABI_WORD_SIZE;

/// The leaf of a bridge commitment.
#[cw_serde]
pub struct BridgeCommitmentLeaf {
    pub height: u64,
    /// Results root recorded in the header at `height`. It is derived from
    /// the transaction results of `height - 1`.
    pub last_results_hash: HexBinary,
}

/// Left-pads `bytes` with zeros up to `length`.
pub fn pad_bytes(bytes: &[u8], length: usize) -> Result<Vec<u8>, CommitmentError> {
    if bytes.len() > length {
        return Err(CommitmentError::EncodingOverflow {
            len: bytes.len(),
            max: length,
        });
    }
    let mut padded = vec![0u8; length];
    padded[length - bytes.len()..].copy_from_slice(bytes);
    Ok(padded)
}

/// Big-endian representation of `number`, padded to an ABI word.
pub fn to_32_padded_bytes(number: u64) -> Result<Vec<u8>, CommitmentError> {
    let be = number.to_be_bytes();
    let first = be.iter().position(|b| *b != 0).unwrap_or(be.len());
    pad_bytes(&be[first..], ABI_WORD_SIZE)
}

/// Encodes a single leaf as `pad32(height) || last_results_hash`.
pub fn encode_leaf(leaf: &BridgeCommitmentLeaf) -> Result<Vec<u8>, CommitmentError> {
    if leaf.last_results_hash.len() != HASH_SIZE {
        return Err(CommitmentError::MalformedHash {
            height: leaf.height,
            len: leaf.last_results_hash.len(),
        });
    }
    let mut encoded = to_32_padded_bytes(leaf.height)?;
    encoded.extend_from_slice(leaf.last_results_hash.as_slice());
    Ok(encoded)
}

pub fn encode_leaves(leaves: &[BridgeCommitmentLeaf]) -> Result<Vec<Vec<u8>>, CommitmentError> {
    leaves.iter().map(encode_leaf).collect()
}
