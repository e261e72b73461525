use rand::Rng;
use rand::RngCore;
use tendermint_proto::v0_38::abci::ExecTxResult;

use crate::chain::MockChain;

/// Generate random bytes of specified length using the provided RNG
pub fn gen_random_bytes<R: RngCore>(rng: &mut R, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen()).collect()
}

/// A deterministic transaction result with the given code and data.
pub fn tx_result(code: u32, data: &[u8]) -> ExecTxResult {
    ExecTxResult {
        code,
        data: data.to_vec().into(),
        ..Default::default()
    }
}

/// A random transaction result, including the non-deterministic fields a
/// node would store.
pub fn gen_random_tx_result<R: RngCore>(rng: &mut R) -> ExecTxResult {
    let data_len = rng.gen_range(0..48);
    ExecTxResult {
        code: rng.gen_range(0..4),
        data: gen_random_bytes(rng, data_len).into(),
        log: format!("log {}", rng.gen::<u32>()),
        info: format!("info {}", rng.gen::<u32>()),
        gas_wanted: rng.gen_range(0..1_000_000),
        gas_used: rng.gen_range(0..1_000_000),
        ..Default::default()
    }
}

/// Generate a chain of `num_blocks` blocks, each with up to `max_txs`
/// random transaction results. Roughly one block in four is empty.
pub fn gen_random_chain<R: RngCore>(rng: &mut R, num_blocks: u64, max_txs: usize) -> MockChain {
    let mut chain = MockChain::new();
    for _ in 0..num_blocks {
        let num_txs = if rng.gen_ratio(1, 4) {
            0
        } else {
            rng.gen_range(1..=max_txs.max(1))
        };
        let txs = (0..num_txs).map(|_| gen_random_tx_result(rng)).collect();
        chain.push_block(txs);
    }
    chain
}
