//! Hashing rules shared by every tree, matching CometBFT's `crypto/merkle`.

use sha2::{Digest, Sha256};

const LEAF_PREFIX: u8 = 0;
const INNER_PREFIX: u8 = 1;

/// Size in bytes of every digest produced by this crate.
pub const HASH_SIZE: usize = 32;

/// tmhash(<empty>)
///
/// The results root CometBFT records for a block without transactions.
pub fn empty_hash() -> Vec<u8> {
    Sha256::digest([]).to_vec()
}

/// tmhash(0x00 || leaf)
pub fn leaf_hash(leaf: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    leaf_hash_opt(&mut hasher, leaf)
}

/// tmhash(0x00 || leaf), reusing the given hasher.
pub(crate) fn leaf_hash_opt(hasher: &mut Sha256, leaf: &[u8]) -> Vec<u8> {
    hasher.reset();
    hasher.update([LEAF_PREFIX]);
    hasher.update(leaf);
    hasher.finalize_reset().to_vec()
}

/// tmhash(0x01 || left || right)
pub fn inner_hash(left: &[u8], right: &[u8]) -> Vec<u8> {
    let mut hasher = Sha256::new();
    inner_hash_opt(&mut hasher, left, right)
}

/// tmhash(0x01 || left || right), reusing the given hasher.
pub(crate) fn inner_hash_opt(hasher: &mut Sha256, left: &[u8], right: &[u8]) -> Vec<u8> {
    hasher.reset();
    hasher.update([INNER_PREFIX]);
    hasher.update(left);
    hasher.update(right);
    hasher.finalize_reset().to_vec()
}
