use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MerkleError {
    #[error("Cannot build a Merkle tree from an empty list of items")]
    EmptyInput,
    #[error("Leaf index {index} is out of range for a tree of {total} leaves")]
    IndexOutOfRange { index: i64, total: i64 },
    #[error("Merkle proof mismatch: {0}")]
    ProofMismatch(String),
    #[error("Malformed Merkle proof: {0}")]
    MalformedProof(String),
}

impl MerkleError {
    pub fn mismatch(msg: impl Into<String>) -> Self {
        MerkleError::ProofMismatch(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        MerkleError::MalformedProof(msg.into())
    }
}
