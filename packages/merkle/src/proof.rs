//! Merkle inclusion proofs, wire-compatible with CometBFT's `crypto/merkle/proof.go`.

use crate::error::MerkleError;
use crate::hash::{inner_hash, leaf_hash, HASH_SIZE};
use crate::tree::get_split_point;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Binary;

/// Upper bound on the path length of a proof, i.e. trees of up to 2^100 leaves.
const MAX_AUNTS: usize = 100;

/// Inclusion proof of a single leaf. It carries the leaf hash but never the
/// root, which the verifier supplies.
///
/// `total` and `index` are signed to stay isomorphic with the protobuf
/// `tendermint.crypto.Proof` message; negative values never verify.
#[cw_serde]
pub struct Proof {
    /// Number of leaves in the tree.
    pub total: i64,
    /// Position of the proven leaf.
    pub index: i64,
    pub leaf_hash: Binary,
    /// Sibling hashes along the path, ordered from the leaf up to the root.
    pub aunts: Vec<Binary>,
}

impl Proof {
    /// Checks that `leaf` hashes to `leaf_hash` and that the path leads to
    /// `root_hash`.
    pub fn verify(&self, root_hash: &[u8], leaf: &[u8]) -> Result<(), MerkleError> {
        if root_hash.is_empty() {
            return Err(MerkleError::malformed("Invalid root hash: cannot be empty"));
        }
        self.validate_basic()?;
        let leaf_hash = leaf_hash(leaf);
        if self.leaf_hash.as_slice() != leaf_hash.as_slice() {
            return Err(MerkleError::mismatch(format!(
                "Invalid leaf hash: wanted {} got {}",
                hex::encode_upper(&self.leaf_hash),
                hex::encode_upper(&leaf_hash)
            )));
        }
        let computed_hash = self.compute_root_hash()?;
        if computed_hash != root_hash {
            return Err(MerkleError::mismatch(format!(
                "Invalid root hash: wanted {} got {}",
                hex::encode_upper(root_hash),
                hex::encode_upper(&computed_hash)
            )));
        }
        Ok(())
    }

    /// Computes the root hash from the leaf hash and the aunts.
    pub fn compute_root_hash(&self) -> Result<Vec<u8>, MerkleError> {
        compute_hash_from_aunts(self.index, self.total, &self.leaf_hash, &self.aunts)
    }

    /// Structural checks only: sign of `total` and `index`, hash sizes, and
    /// the `MAX_AUNTS` bound.
    pub fn validate_basic(&self) -> Result<(), MerkleError> {
        if self.total < 0 {
            return Err(MerkleError::malformed("Proof total must be positive"));
        }
        if self.index < 0 {
            return Err(MerkleError::malformed("Proof index cannot be negative"));
        }
        if self.leaf_hash.len() != HASH_SIZE {
            return Err(MerkleError::malformed(format!(
                "Expected leaf_hash size to be {HASH_SIZE}, got {}",
                self.leaf_hash.len()
            )));
        }
        if self.aunts.len() > MAX_AUNTS {
            return Err(MerkleError::malformed(format!(
                "Expected no more than {MAX_AUNTS} aunts, got {}",
                self.aunts.len()
            )));
        }
        for (i, aunt_hash) in self.aunts.iter().enumerate() {
            if aunt_hash.len() != HASH_SIZE {
                return Err(MerkleError::malformed(format!(
                    "Expected aunt #{i} size to be {HASH_SIZE}, got {}",
                    aunt_hash.len()
                )));
            }
        }
        Ok(())
    }
}

impl From<&tendermint_proto::crypto::Proof> for Proof {
    fn from(proof_proto: &tendermint_proto::crypto::Proof) -> Self {
        Proof {
            total: proof_proto.total,
            index: proof_proto.index,
            leaf_hash: proof_proto.leaf_hash.clone().into(),
            aunts: proof_proto
                .aunts
                .iter()
                .cloned()
                .map(|aunt| aunt.into())
                .collect(),
        }
    }
}

impl From<tendermint_proto::crypto::Proof> for Proof {
    fn from(proof_proto: tendermint_proto::crypto::Proof) -> Self {
        Proof::from(&proof_proto)
    }
}

impl From<Proof> for tendermint_proto::crypto::Proof {
    fn from(proof: Proof) -> Self {
        tendermint_proto::crypto::Proof {
            total: proof.total,
            index: proof.index,
            leaf_hash: proof.leaf_hash.into(),
            aunts: proof.aunts.into_iter().map(|aunt| aunt.into()).collect(),
        }
    }
}

// Inner hashes are consumed from the tail, the last one being the sibling of
// the root's child on the path. The slice length must match the path length.
fn compute_hash_from_aunts(
    index: i64,
    total: i64,
    leaf_hash: &[u8],
    inner_hashes: &[Binary],
) -> Result<Vec<u8>, MerkleError> {
    if index < 0 || total <= 0 || index >= total {
        return Err(MerkleError::malformed(format!(
            "Invalid index ({index}) and/or total ({total})"
        )));
    }
    if total == 1 {
        if !inner_hashes.is_empty() {
            return Err(MerkleError::malformed("Unexpected inner hashes"));
        }
        return Ok(leaf_hash.to_vec());
    }
    let Some((last, rest)) = inner_hashes.split_last() else {
        return Err(MerkleError::malformed("Expected at least one inner hash"));
    };
    let num_left = get_split_point(total as u64)? as i64;
    if index < num_left {
        let left_hash = compute_hash_from_aunts(index, num_left, leaf_hash, rest)?;
        Ok(inner_hash(&left_hash, last))
    } else {
        let right_hash =
            compute_hash_from_aunts(index - num_left, total - num_left, leaf_hash, rest)?;
        Ok(inner_hash(last, &right_hash))
    }
}
