use crate::config::Config;
use crate::error::CommitmentError;

/// Runs basic checks on the end exclusive range of heights `[start, end)`
/// a bridge commitment is built over.
pub fn validate_range(
    cfg: &Config,
    start: u64,
    end: u64,
    chain_height: i64,
) -> Result<(), CommitmentError> {
    if start == 0 {
        return Err(CommitmentError::FirstBlockZero);
    }
    if start > end {
        return Err(CommitmentError::InvertedRange);
    }
    let heights_range = end - start;
    if heights_range == 0 {
        return Err(CommitmentError::EmptyRange);
    }
    if heights_range > cfg.bridge_commitment_blocks_limit {
        return Err(CommitmentError::RangeTooLarge {
            limit: cfg.bridge_commitment_blocks_limit,
        });
    }
    // The range is end exclusive, so the last included block is `end - 1`.
    if i128::from(end) > i128::from(chain_height) + 1 {
        return Err(CommitmentError::RangeBeyondChainHeight { end, chain_height });
    }
    Ok(())
}

/// Validates the range, then checks `height` lies within it.
pub fn validate_height_in_range(
    cfg: &Config,
    height: u64,
    start: u64,
    end: u64,
    chain_height: i64,
) -> Result<(), CommitmentError> {
    validate_range(cfg, start, end, chain_height)?;
    if height < start || height >= end {
        return Err(CommitmentError::HeightOutsideRange { height, start, end });
    }
    Ok(())
}
