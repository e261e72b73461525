//! CometBFT compatible binary Merkle trees.
//!
//! The tree splits `n` leaves into a left subtree of the largest power of two
//! strictly below `n` and a right subtree of the rest, hashing leaves as
//! `SHA256(0x00 || leaf)` and inner nodes as `SHA256(0x01 || left || right)`.

mod error;
mod hash;
mod hex_proof;
mod proof;
mod tree;

pub use self::error::MerkleError;
pub use self::hash::{empty_hash, inner_hash, leaf_hash, HASH_SIZE};
pub use self::hex_proof::HexProof;
pub use self::proof::Proof;
pub use self::tree::{
    get_split_point, hash_from_byte_slices, proof_from_byte_slices, proofs_from_byte_slices,
};
