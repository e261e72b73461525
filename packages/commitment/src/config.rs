use cosmwasm_schema::cw_serde;
use cosmwasm_std::from_json;

use crate::error::{CommitmentError, ConfigError};

/// Maximum number of blocks a bridge commitment may span by default.
/// This bounds the work of a ZK prover consuming the commitment.
pub const DEFAULT_BRIDGE_COMMITMENT_BLOCKS_LIMIT: u64 = 1000;

fn default_blocks_limit() -> u64 {
    DEFAULT_BRIDGE_COMMITMENT_BLOCKS_LIMIT
}

/// Config are the node-selectable bridge commitment settings
#[cw_serde]
pub struct Config {
    /// Maximum number of blocks in a single commitment range.
    #[serde(default = "default_blocks_limit")]
    pub bridge_commitment_blocks_limit: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bridge_commitment_blocks_limit: DEFAULT_BRIDGE_COMMITMENT_BLOCKS_LIMIT,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bridge_commitment_blocks_limit == 0 {
            return Err(ConfigError::ZeroBlocksLimit);
        }
        Ok(())
    }

    /// Loads and validates a JSON encoded config. Missing fields take their
    /// default value.
    pub fn from_json(data: impl AsRef<[u8]>) -> Result<Self, CommitmentError> {
        let cfg: Config = from_json(data)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
