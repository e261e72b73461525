use bridge_merkle::{HexProof, MerkleError, Proof};
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::HexBinary;

use crate::error::CommitmentError;
use crate::inclusion::{BridgeCommitmentInclusionProof, TxResultInclusion};
use crate::leaf::BridgeCommitmentLeaf;

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Merkle root over the results hashes of the blocks in the end
    /// exclusive range `[start, end)`.
    #[returns(BridgeCommitmentResponse)]
    BridgeCommitment { start: u64, end: u64 },
    /// Proofs that the transaction result at `tx_index`, committed in the
    /// header at `height`, is part of the bridge commitment over `[start, end)`.
    #[returns(BridgeCommitmentInclusionProofResponse)]
    BridgeCommitmentInclusionProof {
        height: u64,
        tx_index: i64,
        start: u64,
        end: u64,
    },
}

#[cw_serde]
pub struct BridgeCommitmentResponse {
    pub bridge_commitment: HexBinary,
}

/// Transport form of [`BridgeCommitmentInclusionProof`], with every hash hex
/// encoded.
#[cw_serde]
pub struct BridgeCommitmentInclusionProofResponse {
    pub bridge_commitment_proof: HexProof,
    pub leaf: BridgeCommitmentLeaf,
    /// Absent when the block had no transactions.
    pub last_results_proof: Option<HexProof>,
    /// Absent when the block had no transactions.
    pub tx_result_marshalled: Option<HexBinary>,
}

impl From<BridgeCommitmentInclusionProof> for BridgeCommitmentInclusionProofResponse {
    fn from(proof: BridgeCommitmentInclusionProof) -> Self {
        let (last_results_proof, tx_result_marshalled) = match proof.tx_result {
            Some(tx_result) => (
                Some(HexProof::from(tx_result.results_proof)),
                Some(HexBinary::from(tx_result.raw_tx_result.to_vec())),
            ),
            None => (None, None),
        };
        BridgeCommitmentInclusionProofResponse {
            bridge_commitment_proof: proof.bridge_proof.into(),
            leaf: proof.leaf,
            last_results_proof,
            tx_result_marshalled,
        }
    }
}

impl TryFrom<BridgeCommitmentInclusionProofResponse> for BridgeCommitmentInclusionProof {
    type Error = CommitmentError;

    fn try_from(res: BridgeCommitmentInclusionProofResponse) -> Result<Self, Self::Error> {
        let tx_result = match (res.last_results_proof, res.tx_result_marshalled) {
            (Some(results_proof), Some(raw)) => Some(TxResultInclusion {
                results_proof: Proof::from(results_proof),
                raw_tx_result: raw.to_vec().into(),
            }),
            (None, None) => None,
            _ => {
                return Err(MerkleError::malformed(
                    "last results proof and marshalled tx result must be given together",
                )
                .into())
            }
        };
        Ok(BridgeCommitmentInclusionProof {
            bridge_proof: res.bridge_commitment_proof.into(),
            leaf: res.leaf,
            tx_result,
        })
    }
}
