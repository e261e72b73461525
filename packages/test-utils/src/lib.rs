mod chain;
mod datagen;

pub use chain::MockChain;
pub use datagen::{gen_random_bytes, gen_random_chain, gen_random_tx_result, tx_result};
