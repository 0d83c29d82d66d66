//! In-place descending partition-exchange sort.
//!
//! Each subrange is partitioned around its last element: values strictly
//! greater than the pivot are swapped to the front, then the pivot is
//! swapped in behind them. There is no recursion. Pending subranges sit on
//! an explicit work stack; the larger side of every partition is pushed and
//! the smaller side is processed next, so the stack never holds more than
//! `log2(len)` entries and stays in the inline [`SmallVec`] buffer.
//!
//! Time is O(n log n) on average and O(n²) on adversarial input such as an
//! ascending run or many equal values.

use smallvec::SmallVec;

use crate::config::SortConfig;

/// Inline capacity of the work stack. `log2(usize::MAX)` entries suffice.
const WORK_STACK_INLINE: usize = usize::BITS as usize;

/// Half-open `start..end` subranges awaiting a partition pass.
type WorkStack = SmallVec<[(usize, usize); WORK_STACK_INLINE]>;

/// Sort `sample` into descending order with the default [`SortConfig`].
///
/// Empty and single-value samples are left as they are.
///
/// # Examples
///
/// ```
/// use embkit_stats::sort_descending;
///
/// let mut sample = [34, 201, 190, 154, 8];
/// sort_descending(&mut sample);
/// assert_eq!(sample, [201, 190, 154, 34, 8]);
/// ```
pub fn sort_descending(sample: &mut [u8]) {
    sort_descending_with(sample, &SortConfig::default());
}

/// Sort `sample` into descending order.
pub fn sort_descending_with(sample: &mut [u8], config: &SortConfig) {
    let peak = sort_tracked(sample, config);
    log::trace!(
        "sorted {} values, peak work stack depth {peak}",
        sample.len()
    );
}

/// Sort and return the deepest the work stack got.
fn sort_tracked(sample: &mut [u8], config: &SortConfig) -> usize {
    let threshold = config.insertion_threshold.max(1);
    let mut stack = WorkStack::new();
    let mut peak = 0;
    let mut range = (0, sample.len());

    loop {
        let (start, end) = range;
        if end - start > threshold {
            let pivot = start + partition(&mut sample[start..end]);
            let left = (start, pivot);
            let right = (pivot + 1, end);
            let (smaller, larger) = if left.1 - left.0 <= right.1 - right.0 {
                (left, right)
            } else {
                (right, left)
            };
            if larger.1 - larger.0 > 1 {
                stack.push(larger);
                peak = peak.max(stack.len());
            }
            range = smaller;
            continue;
        }

        insertion_descending(&mut sample[start..end]);
        match stack.pop() {
            Some(next) => range = next,
            None => break,
        }
    }

    debug_assert!(!stack.spilled());
    peak
}

/// Partition around the last value and return the pivot's final index.
///
/// Afterwards everything before the index is greater than the pivot and
/// everything after it is less than or equal.
fn partition(range: &mut [u8]) -> usize {
    let last = range.len() - 1;
    let pivot = range[last];
    let mut boundary = 0;
    for j in 0..last {
        if range[j] > pivot {
            range.swap(boundary, j);
            boundary += 1;
        }
    }
    range.swap(boundary, last);
    boundary
}

fn insertion_descending(range: &mut [u8]) {
    for i in 1..range.len() {
        let value = range[i];
        let mut j = i;
        while j > 0 && range[j - 1] < value {
            range[j] = range[j - 1];
            j -= 1;
        }
        range[j] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embkit_test_utils::{ascending_sample, pseudo_random_sample, COURSE_DATA_SET};

    fn is_descending(sample: &[u8]) -> bool {
        sample.windows(2).all(|w| w[0] >= w[1])
    }

    fn std_descending(sample: &[u8]) -> Vec<u8> {
        let mut expected = sample.to_vec();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected
    }

    #[test]
    fn partition_places_pivot() {
        let mut range = [3, 9, 1, 7, 5];
        let p = partition(&mut range);
        assert_eq!(p, 2);
        assert_eq!(range[p], 5);
        assert!(range[..p].iter().all(|&v| v > 5));
        assert!(range[p + 1..].iter().all(|&v| v <= 5));
    }

    #[test]
    fn partition_with_largest_pivot() {
        let mut range = [1, 2, 3, 9];
        assert_eq!(partition(&mut range), 0);
        assert_eq!(range[0], 9);
    }

    #[test]
    fn sorts_scenario_sample() {
        let mut sample = [34, 201, 190, 154, 8];
        sort_descending(&mut sample);
        assert_eq!(sample, [201, 190, 154, 34, 8]);
    }

    #[test]
    fn sorts_course_data_set_both_ways() {
        for config in [SortConfig::default(), SortConfig::partition_only()] {
            let mut sample = COURSE_DATA_SET;
            sort_descending_with(&mut sample, &config);
            assert_eq!(sample.to_vec(), std_descending(&COURSE_DATA_SET));
        }
    }

    #[test]
    fn empty_and_single_are_noops() {
        let mut empty: [u8; 0] = [];
        sort_descending(&mut empty);
        let mut one = [7];
        sort_descending(&mut one);
        assert_eq!(one, [7]);
    }

    #[test]
    fn duplicates_and_extremes() {
        let mut sample = [0, 255, 0, 255, 128, 128, 0];
        sort_descending_with(&mut sample, &SortConfig::partition_only());
        assert_eq!(sample, [255, 255, 128, 128, 0, 0, 0]);
    }

    #[test]
    fn all_equal_values() {
        let mut sample = [42u8; 300];
        sort_descending_with(&mut sample, &SortConfig::partition_only());
        assert!(sample.iter().all(|&v| v == 42));
    }

    #[test]
    fn ascending_input_keeps_stack_shallow() {
        let mut sample = ascending_sample(4096);
        let peak = sort_tracked(&mut sample, &SortConfig::partition_only());
        assert!(is_descending(&sample));
        assert!(peak <= 12, "peak work stack {peak} exceeds log2(4096)");
    }

    #[test]
    fn random_input_keeps_stack_within_log2() {
        let mut sample = pseudo_random_sample(10_000, 3);
        let peak = sort_tracked(&mut sample, &SortConfig::partition_only());
        assert!(is_descending(&sample));
        assert!(peak <= 14);
    }

    #[test]
    fn large_threshold_is_pure_insertion() {
        let mut sample = pseudo_random_sample(50, 11);
        let expected = std_descending(&sample);
        let peak = sort_tracked(&mut sample, &SortConfig::new(usize::MAX));
        assert_eq!(peak, 0);
        assert_eq!(sample, expected);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn result_is_descending_permutation(
                sample in proptest::collection::vec(any::<u8>(), 0..200),
                threshold in 0usize..20,
            ) {
                let expected = std_descending(&sample);
                let mut actual = sample;
                sort_descending_with(&mut actual, &SortConfig::new(threshold));
                prop_assert!(is_descending(&actual));
                prop_assert_eq!(actual, expected);
            }

            #[test]
            fn sorting_twice_is_idempotent(sample in proptest::collection::vec(any::<u8>(), 0..200)) {
                let mut once = sample;
                sort_descending(&mut once);
                let mut twice = once.clone();
                sort_descending(&mut twice);
                prop_assert_eq!(twice, once);
            }
        }
    }
}
