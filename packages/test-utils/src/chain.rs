use std::collections::BTreeMap;

use bridge_commitment::results::results_hash;
use bridge_commitment::{BlockStore, FetchError, StateStore};
use bridge_merkle::empty_hash;
use cosmwasm_std::HexBinary;
use tendermint_proto::v0_38::abci::ExecTxResult;

/// An in-memory chain serving both the block and the state store.
///
/// The header at height `h` records the results root of the block at
/// `h - 1`, like CometBFT's `LastResultsHash`.
#[derive(Debug, Clone, Default)]
pub struct MockChain {
    last_results_hashes: BTreeMap<u64, HexBinary>,
    tx_results: BTreeMap<u64, Vec<ExecTxResult>>,
    height: u64,
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commits a new block holding `txs` and returns its height.
    pub fn push_block(&mut self, txs: Vec<ExecTxResult>) -> u64 {
        let height = self.height + 1;
        let last_results_hash = match self.tx_results.get(&self.height) {
            Some(prev) => results_hash(prev).expect("results hash of a stored block"),
            None => empty_hash(),
        };
        self.last_results_hashes
            .insert(height, last_results_hash.into());
        self.tx_results.insert(height, txs);
        self.height = height;
        height
    }

    pub fn tx_results(&self, height: u64) -> &[ExecTxResult] {
        self.tx_results
            .get(&height)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn last_results_hash(&self, height: u64) -> Option<&HexBinary> {
        self.last_results_hashes.get(&height)
    }

    /// Forgets the header at `height`, as a pruned node would.
    pub fn prune_block(&mut self, height: u64) {
        self.last_results_hashes.remove(&height);
    }

    /// Forgets the transaction results finalized at `height`.
    pub fn prune_results(&mut self, height: u64) {
        self.tx_results.remove(&height);
    }
}

impl BlockStore for MockChain {
    fn height(&self) -> i64 {
        self.height as i64
    }

    fn load_last_results_hash(&self, height: u64) -> Result<HexBinary, FetchError> {
        self.last_results_hashes
            .get(&height)
            .cloned()
            .ok_or(FetchError::NotFound(height))
    }
}

impl StateStore for MockChain {
    fn load_tx_results(&self, height: u64) -> Result<Vec<ExecTxResult>, FetchError> {
        self.tx_results
            .get(&height)
            .cloned()
            .ok_or(FetchError::NotFound(height))
    }
}
