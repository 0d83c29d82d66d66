//! Minimum, maximum, mean and median over byte samples.
//!
//! Every aggregate rejects an empty sample with
//! [`StatsError::EmptySample`] before looking at it.

use crate::error::StatsError;
use crate::sort::sort_descending;

fn non_empty(sample: &[u8]) -> Result<(), StatsError> {
    if sample.is_empty() {
        Err(StatsError::EmptySample)
    } else {
        Ok(())
    }
}

/// Smallest value in the sample.
///
/// # Errors
///
/// [`StatsError::EmptySample`] if `sample` is empty.
pub fn find_minimum(sample: &[u8]) -> Result<u8, StatsError> {
    non_empty(sample)?;
    let mut min = sample[0];
    for &v in &sample[1..] {
        if v < min {
            min = v;
        }
    }
    Ok(min)
}

/// Largest value in the sample.
///
/// # Errors
///
/// [`StatsError::EmptySample`] if `sample` is empty.
pub fn find_maximum(sample: &[u8]) -> Result<u8, StatsError> {
    non_empty(sample)?;
    let mut max = sample[0];
    for &v in &sample[1..] {
        if v > max {
            max = v;
        }
    }
    Ok(max)
}

/// Arithmetic mean, truncated towards zero.
///
/// The sum is accumulated in 64 bits, so no sample length can overflow it.
/// The quotient of a byte sum by its count always fits in a byte.
///
/// # Errors
///
/// [`StatsError::EmptySample`] if `sample` is empty.
pub fn find_mean(sample: &[u8]) -> Result<u8, StatsError> {
    non_empty(sample)?;
    let sum: u64 = sample.iter().map(|&v| u64::from(v)).sum();
    Ok((sum / sample.len() as u64) as u8)
}

/// Median of the sample. **Sorts `sample` descending in place first.**
///
/// The caller's data is left in descending order; use
/// [`find_median_of_copy`] to keep the original order. For an odd length
/// the middle value is returned. For an even length it is the truncated
/// average of the two middle values.
///
/// # Errors
///
/// [`StatsError::EmptySample`] if `sample` is empty. The sample is not
/// touched in that case.
///
/// # Examples
///
/// ```
/// use embkit_stats::find_median;
///
/// let mut sample = [34, 201, 190, 154, 8];
/// assert_eq!(find_median(&mut sample), Ok(154));
/// assert_eq!(sample, [201, 190, 154, 34, 8]);
/// ```
pub fn find_median(sample: &mut [u8]) -> Result<u8, StatsError> {
    non_empty(sample)?;
    sort_descending(sample);
    Ok(median_of_sorted(sample))
}

/// Median of the sample without reordering it.
///
/// Sorts a private copy; otherwise identical to [`find_median`].
///
/// # Errors
///
/// [`StatsError::EmptySample`] if `sample` is empty.
pub fn find_median_of_copy(sample: &[u8]) -> Result<u8, StatsError> {
    let mut copy = sample.to_vec();
    find_median(&mut copy)
}

/// Median of a non-empty sample that is already sorted (either direction).
pub(crate) fn median_of_sorted(sorted: &[u8]) -> u8 {
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        ((u16::from(sorted[mid - 1]) + u16::from(sorted[mid])) / 2) as u8
    } else {
        sorted[mid]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embkit_test_utils::{
        COURSE_DATA_SET, COURSE_DATA_SET_STATS, SCENARIO_SAMPLE, SCENARIO_SAMPLE_SORTED,
    };

    #[test]
    fn scenario_sample_statistics() {
        assert_eq!(find_minimum(&SCENARIO_SAMPLE), Ok(8));
        assert_eq!(find_maximum(&SCENARIO_SAMPLE), Ok(201));
        assert_eq!(find_mean(&SCENARIO_SAMPLE), Ok(117));

        let mut sample = SCENARIO_SAMPLE;
        assert_eq!(find_median(&mut sample), Ok(154));
        assert_eq!(sample, SCENARIO_SAMPLE_SORTED);
    }

    #[test]
    fn course_data_set_statistics() {
        let (min, max, mean, median) = COURSE_DATA_SET_STATS;
        assert_eq!(find_minimum(&COURSE_DATA_SET), Ok(min));
        assert_eq!(find_maximum(&COURSE_DATA_SET), Ok(max));
        assert_eq!(find_mean(&COURSE_DATA_SET), Ok(mean));
        assert_eq!(find_median_of_copy(&COURSE_DATA_SET), Ok(median));
    }

    #[test]
    fn empty_sample_rejected_everywhere() {
        let mut empty: [u8; 0] = [];
        assert_eq!(find_minimum(&empty), Err(StatsError::EmptySample));
        assert_eq!(find_maximum(&empty), Err(StatsError::EmptySample));
        assert_eq!(find_mean(&empty), Err(StatsError::EmptySample));
        assert_eq!(find_median(&mut empty), Err(StatsError::EmptySample));
        assert_eq!(find_median_of_copy(&empty), Err(StatsError::EmptySample));
    }

    #[test]
    fn mean_truncates() {
        assert_eq!(find_mean(&[1, 2]), Ok(1));
        assert_eq!(find_mean(&[255, 254]), Ok(254));
        assert_eq!(find_mean(&[255; 1000]), Ok(255));
    }

    #[test]
    fn even_median_truncates_without_overflow() {
        let mut sample = [255, 254, 1, 0];
        // Middle pair after sorting is (254, 1).
        assert_eq!(find_median(&mut sample), Ok(127));
        let mut high = [255, 255, 254, 254];
        assert_eq!(find_median(&mut high), Ok(254));
        let mut top = [255, 255];
        assert_eq!(find_median(&mut top), Ok(255));
    }

    #[test]
    fn single_value_is_every_statistic() {
        let mut one = [9];
        assert_eq!(find_minimum(&one), Ok(9));
        assert_eq!(find_maximum(&one), Ok(9));
        assert_eq!(find_mean(&one), Ok(9));
        assert_eq!(find_median(&mut one), Ok(9));
    }

    #[test]
    fn median_of_copy_preserves_order() {
        let sample = SCENARIO_SAMPLE;
        assert_eq!(find_median_of_copy(&sample), Ok(154));
        assert_eq!(sample, SCENARIO_SAMPLE);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn min_and_max_bound_every_value(
                sample in proptest::collection::vec(any::<u8>(), 1..200),
            ) {
                let min = find_minimum(&sample).unwrap();
                let max = find_maximum(&sample).unwrap();
                prop_assert!(sample.iter().all(|&v| min <= v && v <= max));
                prop_assert_eq!(Some(&min), sample.iter().min());
                prop_assert_eq!(Some(&max), sample.iter().max());
            }

            #[test]
            fn mean_lies_between_min_and_max(
                sample in proptest::collection::vec(any::<u8>(), 1..200),
            ) {
                let mean = find_mean(&sample).unwrap();
                prop_assert!(find_minimum(&sample).unwrap() <= mean);
                prop_assert!(mean <= find_maximum(&sample).unwrap());
            }

            #[test]
            fn median_splits_sample_in_half(
                sample in proptest::collection::vec(any::<u8>(), 1..200),
            ) {
                let mut sorted = sample.clone();
                let median = find_median(&mut sorted).unwrap();
                let n = sample.len();
                let at_most = sample.iter().filter(|&&v| v <= median).count();
                let at_least = sample.iter().filter(|&&v| v >= median).count();
                if n % 2 == 1 {
                    prop_assert!(2 * at_most >= n);
                    prop_assert!(2 * at_least >= n);
                } else {
                    // Truncated average of the middle pair sits between them.
                    let hi = sorted[n / 2 - 1];
                    let lo = sorted[n / 2];
                    prop_assert!(lo <= median && median <= hi);
                }
            }

            #[test]
            fn median_variants_agree(sample in proptest::collection::vec(any::<u8>(), 1..200)) {
                let copied = find_median_of_copy(&sample).unwrap();
                let mut in_place = sample;
                prop_assert_eq!(find_median(&mut in_place).unwrap(), copied);
            }
        }
    }
}
