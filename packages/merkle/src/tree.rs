//! Tree construction, following CometBFT's `crypto/merkle/tree.go` and
//! `crypto/merkle/proof.go` (`ProofsFromByteSlices`).

use crate::error::MerkleError;
use crate::hash::{inner_hash_opt, leaf_hash_opt};
use crate::proof::Proof;
use cosmwasm_std::Binary;
use sha2::{Digest, Sha256};

/// Returns the largest power of 2 less than length.
pub fn get_split_point(length: u64) -> Result<u64, MerkleError> {
    if length < 1 {
        return Err(MerkleError::malformed("Trying to split a tree with size < 1"));
    }
    let bit_len = length.next_power_of_two().trailing_zeros();
    let k = 1u64 << bit_len.saturating_sub(1);
    if k == length {
        Ok(k >> 1)
    } else {
        Ok(k)
    }
}

/// Computes the Merkle root of the given items.
///
/// Unlike CometBFT, an empty list is rejected instead of hashing to the empty
/// digest; callers that need the empty-block convention use
/// [`crate::empty_hash`] explicitly.
pub fn hash_from_byte_slices<T: AsRef<[u8]>>(items: &[T]) -> Result<Vec<u8>, MerkleError> {
    let mut hasher = Sha256::new();
    hash_from_byte_slices_opt(&mut hasher, items)
}

fn hash_from_byte_slices_opt<T: AsRef<[u8]>>(
    hasher: &mut Sha256,
    items: &[T],
) -> Result<Vec<u8>, MerkleError> {
    match items.len() {
        0 => Err(MerkleError::EmptyInput),
        1 => Ok(leaf_hash_opt(hasher, items[0].as_ref())),
        n => {
            let k = get_split_point(n as u64)? as usize;
            let left = hash_from_byte_slices_opt(hasher, &items[..k])?;
            let right = hash_from_byte_slices_opt(hasher, &items[k..])?;
            Ok(inner_hash_opt(hasher, &left, &right))
        }
    }
}

/// Computes the inclusion proof of the item at `index`.
pub fn proof_from_byte_slices<T: AsRef<[u8]>>(
    items: &[T],
    index: i64,
) -> Result<Proof, MerkleError> {
    let total = items.len() as i64;
    if index < 0 || index >= total {
        return Err(MerkleError::IndexOutOfRange { index, total });
    }
    let tree = Tree::build(items)?;
    tree.proof(index as usize)
}

/// Computes the root and the inclusion proofs of every item, building the
/// tree only once.
pub fn proofs_from_byte_slices<T: AsRef<[u8]>>(
    items: &[T],
) -> Result<(Vec<u8>, Vec<Proof>), MerkleError> {
    let tree = Tree::build(items)?;
    let proofs = (0..items.len())
        .map(|index| tree.proof(index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((tree.root.hash.clone(), proofs))
}

struct Node {
    hash: Vec<u8>,
    children: Option<Box<(Node, Node)>>,
}

impl Node {
    fn build<T: AsRef<[u8]>>(hasher: &mut Sha256, items: &[T]) -> Result<Node, MerkleError> {
        match items.len() {
            0 => Err(MerkleError::EmptyInput),
            1 => Ok(Node {
                hash: leaf_hash_opt(hasher, items[0].as_ref()),
                children: None,
            }),
            n => {
                let k = get_split_point(n as u64)? as usize;
                let left = Node::build(hasher, &items[..k])?;
                let right = Node::build(hasher, &items[k..])?;
                Ok(Node {
                    hash: inner_hash_opt(hasher, &left.hash, &right.hash),
                    children: Some(Box::new((left, right))),
                })
            }
        }
    }
}

struct Tree {
    root: Node,
    total: usize,
}

impl Tree {
    fn build<T: AsRef<[u8]>>(items: &[T]) -> Result<Tree, MerkleError> {
        let mut hasher = Sha256::new();
        Ok(Tree {
            root: Node::build(&mut hasher, items)?,
            total: items.len(),
        })
    }

    /// Walks from the root down to the leaf at `index`, then returns the
    /// collected aunts in leaf-to-root order.
    fn proof(&self, index: usize) -> Result<Proof, MerkleError> {
        if index >= self.total {
            return Err(MerkleError::IndexOutOfRange {
                index: index as i64,
                total: self.total as i64,
            });
        }
        let mut aunts: Vec<Binary> = Vec::new();
        let mut node = &self.root;
        let (mut idx, mut total) = (index, self.total);
        while let Some(children) = &node.children {
            let (left, right) = children.as_ref();
            let k = get_split_point(total as u64)? as usize;
            if idx < k {
                aunts.push(right.hash.clone().into());
                node = left;
                total = k;
            } else {
                aunts.push(left.hash.clone().into());
                node = right;
                idx -= k;
                total -= k;
            }
        }
        aunts.reverse();

        Ok(Proof {
            total: self.total as i64,
            index: index as i64,
            leaf_hash: node.hash.clone().into(),
            aunts,
        })
    }
}
