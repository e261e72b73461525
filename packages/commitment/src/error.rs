use bridge_merkle::MerkleError;
use cosmwasm_std::StdError;
use thiserror::Error;

use crate::store::FetchError;

/// Error type for the configuration.
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Bridge commitment blocks limit must be greater than 0")]
    ZeroBlocksLimit,
}

/// Errors returned while building bridge commitments and their inclusion proofs.
///
/// The first group is caused by the request and can be fixed by the caller.
/// The second group means a store could not supply the data; nothing is
/// retried here. The last group signals corrupted data or a logic defect and
/// aborts the request.
#[derive(Error, Debug, PartialEq)]
pub enum CommitmentError {
    #[error("the first block is 0")]
    FirstBlockZero,

    #[error("last block is smaller than first block")]
    InvertedRange,

    #[error("cannot create the bridge commitments for an empty set of blocks")]
    EmptyRange,

    #[error("the query exceeds the limit of allowed blocks {limit}")]
    RangeTooLarge { limit: u64 },

    #[error("end block {end} is higher than current chain height {chain_height}")]
    RangeBeyondChainHeight { end: u64, chain_height: i64 },

    #[error(
        "height {height} should be in the end exclusive interval first_block {start} last_block {end}"
    )]
    HeightOutsideRange { height: u64, start: u64, end: u64 },

    #[error("transaction index too high {tx_index}: block has {num_txs} transactions")]
    TxIndexOutOfRange { tx_index: i64, num_txs: usize },

    #[error("couldn't load block {height}: {source}")]
    BlockNotFound { height: u64, source: FetchError },

    #[error("couldn't load the transaction results of block {height}: {source}")]
    ResultsNotFound { height: u64, source: FetchError },

    #[error("cannot pad bytes because length of bytes array: {len} is greater than given length: {max}")]
    EncodingOverflow { len: usize, max: usize },

    #[error("last results hash of block {height} must be 32 bytes, got {len}")]
    MalformedHash { height: u64, len: usize },

    #[error(transparent)]
    Merkle(#[from] MerkleError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Std(#[from] StdError),
}
