use bridge_merkle::hash_from_byte_slices;

use crate::config::Config;
use crate::error::CommitmentError;
use crate::leaf::{encode_leaves, BridgeCommitmentLeaf};
use crate::store::FetchError;
use crate::validation::validate_range;

/// Fetches the leaves of the end exclusive range `[start, end)` in ascending
/// order. The first missing block aborts the whole fetch.
pub fn fetch_leaves<F>(
    start: u64,
    end: u64,
    mut fetch_leaf: F,
) -> Result<Vec<BridgeCommitmentLeaf>, CommitmentError>
where
    F: FnMut(u64) -> Result<BridgeCommitmentLeaf, FetchError>,
{
    (start..end)
        .map(|height| {
            fetch_leaf(height).map_err(|source| CommitmentError::BlockNotFound { height, source })
        })
        .collect()
}

/// Builds the Merkle root over the results hashes of the blocks in
/// `[start, end)`.
pub fn build_commitment<F>(
    cfg: &Config,
    start: u64,
    end: u64,
    chain_height: i64,
    fetch_leaf: F,
) -> Result<Vec<u8>, CommitmentError>
where
    F: FnMut(u64) -> Result<BridgeCommitmentLeaf, FetchError>,
{
    validate_range(cfg, start, end, chain_height)?;
    let leaves = fetch_leaves(start, end, fetch_leaf)?;
    let encoded = encode_leaves(&leaves)?;
    Ok(hash_from_byte_slices(&encoded)?)
}
