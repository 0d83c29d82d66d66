//! Sample fixtures shared by embkit tests, benches and examples.
//!
//! - [`COURSE_DATA_SET`]: the 40-value data set from the course exercise.
//! - [`SCENARIO_SAMPLE`]: a 5-value sample with hand-checked statistics.
//! - [`pseudo_random_sample`]: deterministic byte samples of any length.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The course's 40-element data set.
pub const COURSE_DATA_SET: [u8; 40] = [
    34, 201, 190, 154, 8, 194, 2, 6, 114, 88, 45, 76, 123, 87, 25, 23, 200, 122, 150, 90, 92, 87,
    177, 244, 201, 6, 12, 60, 8, 2, 5, 67, 7, 87, 250, 230, 99, 3, 100, 90,
];

/// Expected statistics for [`COURSE_DATA_SET`]: min, max, mean, median.
pub const COURSE_DATA_SET_STATS: (u8, u8, u8, u8) = (2, 250, 93, 87);

/// Five values whose statistics are easy to check by hand.
pub const SCENARIO_SAMPLE: [u8; 5] = [34, 201, 190, 154, 8];

/// [`SCENARIO_SAMPLE`] in descending order.
pub const SCENARIO_SAMPLE_SORTED: [u8; 5] = [201, 190, 154, 34, 8];

/// Deterministic pseudo-random bytes.
///
/// Uses a 64-bit LCG so benches and tests get the same data on every run
/// without pulling in an RNG.
pub fn pseudo_random_sample(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed ^ 0x9E37_79B9_7F4A_7C15;
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6_364_136_223_846_793_005)
                .wrapping_add(1_442_695_040_888_963_407);
            (state >> 56) as u8
        })
        .collect()
}

/// `len` values in ascending order, the worst case for a last-element pivot.
pub fn ascending_sample(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 255 / len.max(1)) as u8).collect()
}
