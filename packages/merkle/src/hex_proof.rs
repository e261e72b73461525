use crate::proof::Proof;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::HexBinary;

/// A [`Proof`] whose hashes are encoded as hex strings for transport.
///
/// Structurally identical to [`Proof`]; converting back and forth is lossless.
#[cw_serde]
pub struct HexProof {
    /// Total number of items.
    pub total: i64,
    /// Index of item to prove.
    pub index: i64,
    /// Hash of item value.
    pub leaf_hash: HexBinary,
    /// Hashes from leaf's sibling to a root's child.
    pub aunts: Vec<HexBinary>,
}

impl From<&Proof> for HexProof {
    fn from(proof: &Proof) -> Self {
        HexProof {
            total: proof.total,
            index: proof.index,
            leaf_hash: proof.leaf_hash.to_vec().into(),
            aunts: proof.aunts.iter().map(|aunt| aunt.to_vec().into()).collect(),
        }
    }
}

impl From<Proof> for HexProof {
    fn from(proof: Proof) -> Self {
        HexProof::from(&proof)
    }
}

impl From<&HexProof> for Proof {
    fn from(proof: &HexProof) -> Self {
        Proof {
            total: proof.total,
            index: proof.index,
            leaf_hash: proof.leaf_hash.to_vec().into(),
            aunts: proof.aunts.iter().map(|aunt| aunt.to_vec().into()).collect(),
        }
    }
}

impl From<HexProof> for Proof {
    fn from(proof: HexProof) -> Self {
        Proof::from(&proof)
    }
}
