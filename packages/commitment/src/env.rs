use cosmwasm_std::{to_json_binary, Binary, HexBinary};
use log::{debug, error, info, warn};

use crate::commitment::build_commitment;
use crate::config::Config;
use crate::error::CommitmentError;
use crate::inclusion::{compose_inclusion_proof, BridgeCommitmentInclusionProof};
use crate::leaf::BridgeCommitmentLeaf;
use crate::msg::{BridgeCommitmentInclusionProofResponse, BridgeCommitmentResponse, QueryMsg};
use crate::store::{BlockStore, FetchError, StateStore};

/// Serves bridge commitment requests from the node's stores.
#[derive(Debug)]
pub struct Environment<B, S> {
    config: Config,
    block_store: B,
    state_store: S,
}

impl<B: BlockStore, S: StateStore> Environment<B, S> {
    pub fn new(config: Config, block_store: B, state_store: S) -> Result<Self, CommitmentError> {
        config.validate()?;
        Ok(Environment {
            config,
            block_store,
            state_store,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn fetch_leaf(&self, height: u64) -> Result<BridgeCommitmentLeaf, FetchError> {
        let last_results_hash = self.block_store.load_last_results_hash(height)?;
        Ok(BridgeCommitmentLeaf {
            height,
            last_results_hash,
        })
    }

    /// Collects the results hashes over the end exclusive range `[start, end)`
    /// and returns their Merkle root.
    pub fn bridge_commitment(&self, start: u64, end: u64) -> Result<HexBinary, CommitmentError> {
        debug!("bridge commitment requested for [{start}, {end})");
        let chain_height = self.block_store.height();
        let root = build_commitment(&self.config, start, end, chain_height, |height| {
            self.fetch_leaf(height)
        })
        .inspect_err(|e| log_failure(e))?;
        let root = HexBinary::from(root);
        info!("bridge commitment for [{start}, {end}): {root}");
        Ok(root)
    }

    /// Builds the proofs that the transaction result at `tx_index`, committed
    /// in the header at `height`, is part of the bridge commitment over
    /// `[start, end)`.
    pub fn bridge_commitment_inclusion_proof(
        &self,
        height: u64,
        tx_index: i64,
        start: u64,
        end: u64,
    ) -> Result<BridgeCommitmentInclusionProof, CommitmentError> {
        debug!(
            "inclusion proof requested for tx {tx_index} at height {height} in [{start}, {end})"
        );
        let chain_height = self.block_store.height();
        compose_inclusion_proof(
            &self.config,
            height,
            tx_index,
            start,
            end,
            chain_height,
            |h| self.fetch_leaf(h),
            |h| self.state_store.load_tx_results(h),
        )
        .inspect_err(|e| log_failure(e))
    }

    /// Dispatches a query and JSON encodes its response.
    pub fn query(&self, msg: QueryMsg) -> Result<Binary, CommitmentError> {
        match msg {
            QueryMsg::BridgeCommitment { start, end } => {
                let bridge_commitment = self.bridge_commitment(start, end)?;
                Ok(to_json_binary(&BridgeCommitmentResponse { bridge_commitment })?)
            }
            QueryMsg::BridgeCommitmentInclusionProof {
                height,
                tx_index,
                start,
                end,
            } => {
                let proof = self.bridge_commitment_inclusion_proof(height, tx_index, start, end)?;
                Ok(to_json_binary(&BridgeCommitmentInclusionProofResponse::from(proof))?)
            }
        }
    }
}

fn log_failure(err: &CommitmentError) {
    match err {
        CommitmentError::BlockNotFound { .. } | CommitmentError::ResultsNotFound { .. } => {
            warn!("{err}")
        }
        CommitmentError::Merkle(_)
        | CommitmentError::EncodingOverflow { .. }
        | CommitmentError::MalformedHash { .. } => error!("{err}"),
        _ => debug!("request rejected: {err}"),
    }
}
