use bridge_merkle::{empty_hash, proof_from_byte_slices, MerkleError, Proof};
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;
use log::debug;
use tendermint_proto::v0_38::abci::ExecTxResult;

use crate::commitment::fetch_leaves;
use crate::config::Config;
use crate::error::CommitmentError;
use crate::leaf::{encode_leaf, encode_leaves, BridgeCommitmentLeaf};
use crate::results::marshal_tx_results;
use crate::store::FetchError;
use crate::validation::validate_height_in_range;

/// Proof that a transaction result is part of a block's results root.
#[cw_serde]
pub struct TxResultInclusion {
    /// Proves `raw_tx_result` was used to form the leaf's `last_results_hash`.
    pub results_proof: Proof,
    /// Marshalled deterministic form of the queried transaction result.
    pub raw_tx_result: Binary,
}

/// Two chained proofs: the transaction result is in the block's results root,
/// and the block's leaf is in the bridge commitment.
#[cw_serde]
pub struct BridgeCommitmentInclusionProof {
    /// Proves the encoded `leaf` was used to construct the bridge commitment.
    pub bridge_proof: Proof,
    pub leaf: BridgeCommitmentLeaf,
    /// `None` when the block whose results the leaf commits to had no
    /// transactions.
    pub tx_result: Option<TxResultInclusion>,
}

impl BridgeCommitmentInclusionProof {
    /// Verifies both layers against the bridge commitment root.
    pub fn verify(&self, commitment_root: &[u8]) -> Result<(), CommitmentError> {
        let encoded_leaf = encode_leaf(&self.leaf)?;
        self.bridge_proof.verify(commitment_root, &encoded_leaf)?;

        match &self.tx_result {
            Some(tx_result) => tx_result
                .results_proof
                .verify(&self.leaf.last_results_hash, &tx_result.raw_tx_result)?,
            None => {
                if self.leaf.last_results_hash.as_slice() != empty_hash().as_slice() {
                    return Err(MerkleError::mismatch(format!(
                        "block {} commits to transaction results but no transaction proof was given",
                        self.leaf.height
                    ))
                    .into());
                }
            }
        }
        Ok(())
    }
}

/// Builds the inclusion proofs of the transaction result at `tx_index` whose
/// results root is recorded in the header at `height`, against the bridge
/// commitment over `[start, end)`.
///
/// The results committed at `height` were produced by block `height - 1`,
/// which is what `fetch_prior_results` is queried for.
#[allow(clippy::too_many_arguments)]
pub fn compose_inclusion_proof<F, R>(
    cfg: &Config,
    height: u64,
    tx_index: i64,
    start: u64,
    end: u64,
    chain_height: i64,
    fetch_leaf: F,
    fetch_prior_results: R,
) -> Result<BridgeCommitmentInclusionProof, CommitmentError>
where
    F: FnMut(u64) -> Result<BridgeCommitmentLeaf, FetchError>,
    R: FnOnce(u64) -> Result<Vec<ExecTxResult>, FetchError>,
{
    validate_height_in_range(cfg, height, start, end, chain_height)?;

    let leaves = fetch_leaves(start, end, fetch_leaf)?;
    let encoded_leaves = encode_leaves(&leaves)?;
    let position = height - start;
    let bridge_proof = proof_from_byte_slices(&encoded_leaves, position as i64)?;
    let total = leaves.len() as i64;
    let leaf = leaves
        .into_iter()
        .nth(position as usize)
        .ok_or(MerkleError::IndexOutOfRange {
            index: position as i64,
            total,
        })?;

    // `height >= start > 0`, so there is always a prior block.
    let prior_height = height - 1;
    let tx_results = fetch_prior_results(prior_height).map_err(|source| {
        CommitmentError::ResultsNotFound {
            height: prior_height,
            source,
        }
    })?;

    // Without transactions there is nothing to prove in the block, but the
    // block itself is still proven to be part of the commitment.
    if tx_results.is_empty() && tx_index == 0 {
        debug!("block {prior_height} has no transactions, returning the bridge proof only");
        return Ok(BridgeCommitmentInclusionProof {
            bridge_proof,
            leaf,
            tx_result: None,
        });
    }

    let num_txs = tx_results.len();
    if tx_index < 0 || tx_index as u64 >= num_txs as u64 {
        return Err(CommitmentError::TxIndexOutOfRange { tx_index, num_txs });
    }

    let mut marshalled = marshal_tx_results(&tx_results);
    let results_proof = proof_from_byte_slices(&marshalled, tx_index)?;
    let raw_tx_result = marshalled.swap_remove(tx_index as usize);

    Ok(BridgeCommitmentInclusionProof {
        bridge_proof,
        leaf,
        tx_result: Some(TxResultInclusion {
            results_proof,
            raw_tx_result: raw_tx_result.into(),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commitment::build_commitment;
    use crate::results::results_hash;
    use assert_matches::assert_matches;
    use prost::Message;

    fn tx_result(code: u32, data: &[u8]) -> ExecTxResult {
        ExecTxResult {
            code,
            data: data.to_vec().into(),
            ..Default::default()
        }
    }

    /// Block `height` records the results root of `results`, produced at `height - 1`.
    fn leaf_for(height: u64, results: &[ExecTxResult]) -> BridgeCommitmentLeaf {
        BridgeCommitmentLeaf {
            height,
            last_results_hash: results_hash(results).unwrap().into(),
        }
    }

    #[test]
    fn test_inclusion_proof_two_transactions() {
        // Transactions from height 10 are committed in the header at height 11.
        let txs_h10 = vec![tx_result(0, b"one"), tx_result(0, b"two")];
        let leaf_11 = leaf_for(11, &txs_h10);
        let cfg = Config::default();

        let fetch_leaf = |height: u64| {
            if height == 11 {
                Ok(leaf_11.clone())
            } else {
                Err(FetchError::NotFound(height))
            }
        };
        let root = build_commitment(&cfg, 11, 12, 20, fetch_leaf).unwrap();

        let mut fetched = None;
        let proof = compose_inclusion_proof(&cfg, 11, 1, 11, 12, 20, fetch_leaf, |height| {
            fetched = Some(height);
            Ok(txs_h10.clone())
        })
        .unwrap();
        assert_eq!(fetched, Some(10));

        // First, the transaction is in the results hash of the next block.
        let tx1_bz = txs_h10[1].encode_to_vec();
        let tx_result = proof.tx_result.as_ref().unwrap();
        assert_eq!(tx_result.raw_tx_result.as_slice(), tx1_bz.as_slice());
        tx_result
            .results_proof
            .verify(&leaf_11.last_results_hash, &tx1_bz)
            .unwrap();

        // Second, that block is in the bridge commitment.
        let leaf_bz = encode_leaf(&leaf_11).unwrap();
        proof.bridge_proof.verify(&root, &leaf_bz).unwrap();

        assert_eq!(proof.leaf, leaf_11);
        proof.verify(&root).unwrap();
    }

    #[test]
    fn test_inclusion_proof_empty_block() {
        let leaf_11 = leaf_for(11, &[]);
        let cfg = Config::default();
        let fetch_leaf = |_| Ok(leaf_11.clone());
        let root = build_commitment(&cfg, 11, 12, 20, fetch_leaf).unwrap();

        let proof =
            compose_inclusion_proof(&cfg, 11, 0, 11, 12, 20, fetch_leaf, |_| Ok(vec![])).unwrap();
        assert_eq!(proof.tx_result, None);
        assert_eq!(proof.bridge_proof.total, 1);
        proof.verify(&root).unwrap();

        let err =
            compose_inclusion_proof(&cfg, 11, 1, 11, 12, 20, fetch_leaf, |_| Ok(vec![]))
                .unwrap_err();
        assert_eq!(
            err,
            CommitmentError::TxIndexOutOfRange {
                tx_index: 1,
                num_txs: 0
            }
        );
    }

    #[test]
    fn test_inclusion_proof_tx_index_out_of_range() {
        let txs = vec![tx_result(0, b"one"), tx_result(3, b"")];
        let cfg = Config::default();
        let leaf = leaf_for(5, &txs);
        let fetch_leaf = |_| Ok(leaf.clone());

        for tx_index in [2, 3, -1] {
            let err = compose_inclusion_proof(&cfg, 5, tx_index, 5, 6, 5, fetch_leaf, |_| {
                Ok(txs.clone())
            })
            .unwrap_err();
            assert_eq!(err, CommitmentError::TxIndexOutOfRange { tx_index, num_txs: 2 });
        }
        assert_eq!(
            CommitmentError::TxIndexOutOfRange {
                tx_index: 2,
                num_txs: 2
            }
            .to_string(),
            "transaction index too high 2: block has 2 transactions"
        );
    }

    #[test]
    fn test_inclusion_proof_validation_and_fetch_errors() {
        let cfg = Config::default();
        let leaf = leaf_for(5, &[]);

        // Height outside the range fails before any fetch.
        let err = compose_inclusion_proof(
            &cfg,
            9,
            0,
            5,
            9,
            100,
            |_| -> Result<BridgeCommitmentLeaf, FetchError> { panic!("must not fetch") },
            |_| -> Result<Vec<ExecTxResult>, FetchError> { panic!("must not fetch") },
        )
        .unwrap_err();
        assert_eq!(
            err,
            CommitmentError::HeightOutsideRange {
                height: 9,
                start: 5,
                end: 9
            }
        );

        let err = compose_inclusion_proof(
            &cfg,
            5,
            0,
            5,
            6,
            100,
            |_| Ok(leaf.clone()),
            |height| Err(FetchError::Storage(format!("pruned {height}"))),
        )
        .unwrap_err();
        assert_matches!(err, CommitmentError::ResultsNotFound { height: 4, .. });

        let err = compose_inclusion_proof(
            &cfg,
            5,
            0,
            5,
            6,
            100,
            |height| Err(FetchError::NotFound(height)),
            |_| Ok(vec![]),
        )
        .unwrap_err();
        assert_matches!(err, CommitmentError::BlockNotFound { height: 5, .. });
    }

    #[test]
    fn test_inclusion_proof_strips_non_deterministic_fields() {
        let mut noisy = tx_result(0, b"one");
        noisy.log = "gas used by the tx".to_string();
        noisy.info = "info".to_string();
        let txs = vec![noisy, tx_result(1, b"two")];

        let cfg = Config::default();
        let leaf = leaf_for(3, &txs);
        let fetch_leaf = |_| Ok(leaf.clone());
        let root = build_commitment(&cfg, 3, 4, 3, fetch_leaf).unwrap();
        let proof =
            compose_inclusion_proof(&cfg, 3, 0, 3, 4, 3, fetch_leaf, |_| Ok(txs.clone())).unwrap();

        let raw = &proof.tx_result.as_ref().unwrap().raw_tx_result;
        assert_eq!(raw.as_slice(), tx_result(0, b"one").encode_to_vec().as_slice());
        proof.verify(&root).unwrap();
    }

    #[test]
    fn test_verify_rejects_mismatched_layers() {
        let txs = vec![tx_result(0, b"one"), tx_result(0, b"two"), tx_result(0, b"three")];
        let cfg = Config::default();
        let leaves: Vec<BridgeCommitmentLeaf> = (1..5).map(|h| leaf_for(h, &txs)).collect();
        let fetch_leaf = |h: u64| Ok(leaves[(h - 1) as usize].clone());
        let root = build_commitment(&cfg, 1, 5, 10, fetch_leaf).unwrap();

        let proof =
            compose_inclusion_proof(&cfg, 3, 2, 1, 5, 10, fetch_leaf, |_| Ok(txs.clone())).unwrap();
        proof.verify(&root).unwrap();
        assert_eq!(proof.bridge_proof.index, 2);
        assert_eq!(proof.bridge_proof.total, 4);

        // Wrong commitment root
        assert_matches!(
            proof.verify(&[0u8; 32]),
            Err(CommitmentError::Merkle(MerkleError::ProofMismatch(_)))
        );

        // Another transaction result
        let mut forged = proof.clone();
        forged.tx_result.as_mut().unwrap().raw_tx_result = txs[0].encode_to_vec().into();
        assert_matches!(
            forged.verify(&root),
            Err(CommitmentError::Merkle(MerkleError::ProofMismatch(_)))
        );

        // Dropping the transaction proof of a non-empty block
        let mut forged = proof.clone();
        forged.tx_result = None;
        assert_matches!(
            forged.verify(&root),
            Err(CommitmentError::Merkle(MerkleError::ProofMismatch(_)))
        );

        // Another height
        let mut forged = proof;
        forged.leaf.height = 4;
        assert_matches!(
            forged.verify(&root),
            Err(CommitmentError::Merkle(MerkleError::ProofMismatch(_)))
        );
    }
}
