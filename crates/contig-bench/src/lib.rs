//! Benchmark workloads for the contig container.
//!
//! Provides deterministic input builders shared by the criterion benches:
//! value ramps and pseudo-random insert positions that need no external
//! RNG.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use contig::Contig;

/// A sequence holding `0..n`.
pub fn ramp(n: usize) -> Contig<u64> {
    (0..n as u64).collect()
}

/// Deterministic pseudo-random insert positions (LCG, no external RNG).
///
/// Position `i` is valid for a sequence of length `i`, so inserting the
/// positions in order exercises arbitrary-offset insertion from an empty
/// sequence upward.
pub fn insert_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut state = seed;
    (0..n)
        .map(|i| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (state >> 33) as usize % (i + 1)
        })
        .collect()
}
