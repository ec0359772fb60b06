//! Benchmark workloads for the Colony workspace.
//!
//! - [`filled_colony`]: a colony holding `0..len` plus the addresses handed out
//! - [`apply_churn`]: replay a seeded insert/remove script against a colony

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use colony_pool::{Address, Colony};
use colony_test_utils::ChurnOp;

/// Build a colony holding `0..len`, in order, with its addresses.
pub fn filled_colony(len: u64) -> (Colony<u64>, Vec<Address>) {
    let mut colony = Colony::new();
    let addresses = (0..len)
        .map(|v| colony.insert(v).expect("benchmark colony fits in memory"))
        .collect();
    (colony, addresses)
}

/// Replay `script` against `colony`, tracking live addresses in `live`.
///
/// A `Remove(i)` picks `live[i % live.len()]` and is skipped when nothing
/// is live. Returns the number of operations that changed the colony.
pub fn apply_churn(
    colony: &mut Colony<u64>,
    live: &mut Vec<Address>,
    script: &[ChurnOp],
) -> usize {
    let mut applied = 0;
    for op in script {
        match *op {
            ChurnOp::Insert(v) => {
                let address = colony
                    .insert(u64::from(v))
                    .expect("benchmark colony fits in memory");
                live.push(address);
                applied += 1;
            }
            ChurnOp::Remove(i) if !live.is_empty() => {
                let address = live.swap_remove(i % live.len());
                if colony.remove(address).is_ok() {
                    applied += 1;
                }
            }
            ChurnOp::Remove(_) => {}
        }
    }
    applied
}
