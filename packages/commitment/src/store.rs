//! Read-only views over the node's storage.
//!
//! Implementations are shared by concurrent requests and must be safe for
//! concurrent reads. Nothing in this crate writes to them.

use cosmwasm_std::HexBinary;
use tendermint_proto::v0_38::abci::ExecTxResult;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("no data stored at height {0}")]
    NotFound(u64),
    #[error("storage error: {0}")]
    Storage(String),
}

pub trait BlockStore {
    /// Height of the latest committed block.
    fn height(&self) -> i64;

    /// `LastResultsHash` recorded in the header of the block at `height`,
    /// i.e. the results root of the block at `height - 1`.
    fn load_last_results_hash(&self, height: u64) -> Result<HexBinary, FetchError>;
}

pub trait StateStore {
    /// Transaction results finalized at `height`, in execution order.
    fn load_tx_results(&self, height: u64) -> Result<Vec<ExecTxResult>, FetchError>;
}

impl<T: BlockStore + ?Sized> BlockStore for &T {
    fn height(&self) -> i64 {
        (**self).height()
    }

    fn load_last_results_hash(&self, height: u64) -> Result<HexBinary, FetchError> {
        (**self).load_last_results_hash(height)
    }
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn load_tx_results(&self, height: u64) -> Result<Vec<ExecTxResult>, FetchError> {
        (**self).load_tx_results(height)
    }
}
