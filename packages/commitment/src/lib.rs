//! Bridge commitments: a Merkle root over the results hashes of a range of
//! CometBFT blocks, and the two-layer proofs tying a transaction result to it.

pub mod commitment;
pub mod config;
pub mod env;
pub mod error;
pub mod inclusion;
pub mod leaf;
pub mod msg;
pub mod results;
pub mod store;
pub mod validation;

pub use crate::config::{Config, DEFAULT_BRIDGE_COMMITMENT_BLOCKS_LIMIT};
pub use crate::env::Environment;
pub use crate::error::{CommitmentError, ConfigError};
pub use crate::inclusion::{BridgeCommitmentInclusionProof, TxResultInclusion};
pub use crate::leaf::BridgeCommitmentLeaf;
pub use crate::store::{BlockStore, FetchError, StateStore};
