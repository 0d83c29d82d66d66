//! Benchmark inputs for embkit.
//!
//! Provides the sample shapes the criterion suites sweep over:
//!
//! - [`SAMPLE_SIZES`]: lengths from the course data set up to 64K values
//! - [`sample_profiles`]: random, ascending and constant samples per length

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use embkit_test_utils::{ascending_sample, pseudo_random_sample};

/// Sample lengths exercised by the statistics benchmarks.
pub const SAMPLE_SIZES: [usize; 4] = [40, 1_024, 16_384, 65_536];

/// A named benchmark input.
pub struct SampleProfile {
    /// Short label used in the benchmark id.
    pub name: &'static str,
    /// The values to sort or summarise.
    pub values: Vec<u8>,
}

/// Random, ascending and constant samples of length `len`.
///
/// The ascending and constant shapes are the partition sort's worst
/// cases; they are capped at 4096 values to keep runs short.
pub fn sample_profiles(len: usize) -> Vec<SampleProfile> {
    let mut profiles = vec![SampleProfile {
        name: "random",
        values: pseudo_random_sample(len, 0xC0FFEE),
    }];
    if len <= 4_096 {
        profiles.push(SampleProfile {
            name: "ascending",
            values: ascending_sample(len),
        });
        profiles.push(SampleProfile {
            name: "constant",
            values: vec![0x5A; len],
        });
    }
    profiles
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_sizes_only_get_random_profile() {
        assert_eq!(sample_profiles(40).len(), 3);
        assert_eq!(sample_profiles(65_536).len(), 1);
        assert!(sample_profiles(1_024).iter().all(|p| p.values.len() == 1_024));
    }
}
