//! Deterministic workload fixtures.
//!
//! - [`SCENARIO_WORDS`]: the five-word insert/search/remove scenario.
//! - [`churn_script`]: seeded insert/remove mix for stress tests and
//!   benchmarks.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Words inserted, in order, by the reference scenario. With an initial
/// capacity of 4 the fifth insert forces the first bucket growth.
pub const SCENARIO_WORDS: [&str; 5] = ["foo", "bar", "baz", "hello", "world"];

/// One step of a churn workload.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChurnOp {
    /// Insert this value.
    Insert(u32),
    /// Remove the live value at this position, modulo the live count.
    /// A no-op when nothing is live.
    Remove(usize),
}

/// Generate `len` churn steps from `seed`.
///
/// `insert_percent` of the steps are inserts; the rest are removals at a
/// uniformly random live position. The same seed always yields the same
/// script.
pub fn churn_script(seed: u64, len: usize, insert_percent: u32) -> Vec<ChurnOp> {
    assert!(insert_percent <= 100, "insert_percent must be at most 100");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..len)
        .map(|_| {
            if rng.gen_ratio(insert_percent, 100) {
                ChurnOp::Insert(rng.gen())
            } else {
                ChurnOp::Remove(rng.gen_range(0..usize::MAX))
            }
        })
        .collect()
}
