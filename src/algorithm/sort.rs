// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Length-dispatched sorting.
//!
//! [`sort`] picks one of three strategies by sequence length:
//!
//! | length | strategy | stable |
//! |---|---|---|
//! | `..=INSERTION_SORT_MAX` | [`insertion_sort`] | yes |
//! | `..=BUBBLE_SORT_MAX` | [`bubble_sort`] (shrinking bound, early exit) | yes |
//! | above | [`merge_sort`] (top-down, `O(n)` scratch buffer) | yes |
//!
//! The thresholds are tuning, not contract. The contract is only that the
//! output is a non-decreasing permutation of the input. Elements must be
//! totally ordered for that to mean anything (`NaN` breaks it).

// Alloc imports
use alloc::vec::Vec;

/// Longest sequence handed to [`insertion_sort`] by [`sort`].
pub const INSERTION_SORT_MAX: usize = 16;

/// Longest sequence handed to [`bubble_sort`] by [`sort`].
pub const BUBBLE_SORT_MAX: usize = 64;

/// Sorts `seq` in non-decreasing order, choosing the strategy by length.
///
/// Works on anything that exposes its elements as a mutable slice: the fixed
/// and dynamic arrays, `FixedVector`, `Matrix`, plain slices and `Vec`s.
pub fn sort<T, S>(seq: &mut S)
where
    T: PartialOrd + Clone,
    S: AsMut<[T]> + ?Sized,
{
    let items = seq.as_mut();
    let len = items.len();
    if len <= INSERTION_SORT_MAX {
        log::trace!("sort: {len} elements, insertion sort");
        insertion_sort(items);
    } else if len <= BUBBLE_SORT_MAX {
        log::trace!("sort: {len} elements, bubble sort");
        bubble_sort(items);
    } else {
        log::trace!("sort: {len} elements, merge sort");
        merge_sort(items);
    }
}

/// Stable in-place insertion sort, `O(n^2)` worst case, `O(n)` when sorted.
pub fn insertion_sort<T: PartialOrd>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        // Walk the new key left past every strictly greater predecessor.
        while j > 0 && !(items[j - 1] <= items[j]) {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Stable in-place bubble sort.
///
/// Each pass settles the largest remaining element at the end of the unsorted
/// prefix, so the bound shrinks by one per pass; a pass without swaps stops.
pub fn bubble_sort<T: PartialOrd>(items: &mut [T]) {
    let mut end = items.len();
    while end > 1 {
        let mut swapped = false;
        for i in 1..end {
            if items[i - 1] > items[i] {
                items.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
        end -= 1;
    }
}

/// Stable top-down merge sort using one scratch buffer of `len` clones.
pub fn merge_sort<T: PartialOrd + Clone>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }
    let mut scratch: Vec<T> = Vec::with_capacity(items.len());
    merge_sort_into(items, &mut scratch);
}

fn merge_sort_into<T: PartialOrd + Clone>(items: &mut [T], scratch: &mut Vec<T>) {
    let len = items.len();
    if len <= 1 {
        return;
    }
    let mid = len / 2;
    merge_sort_into(&mut items[..mid], scratch);
    merge_sort_into(&mut items[mid..], scratch);
    merge(items, mid, scratch);
}

/// Merges the sorted runs `items[..mid]` and `items[mid..]`.
fn merge<T: PartialOrd + Clone>(items: &mut [T], mid: usize, scratch: &mut Vec<T>) {
    scratch.clear();
    let (left, right) = items.split_at(mid);
    let (mut l, mut r) = (0, 0);
    while l < left.len() && r < right.len() {
        // `<=` takes from the left run on ties, which keeps the merge stable.
        if left[l] <= right[r] {
            scratch.push(left[l].clone());
            l += 1;
        } else {
            scratch.push(right[r].clone());
            r += 1;
        }
    }
    scratch.extend_from_slice(&left[l..]);
    scratch.extend_from_slice(&right[r..]);
    items.clone_from_slice(scratch);
}

#[cfg(test)]
mod tests {
    // Imports
    use super::{bubble_sort, insertion_sort, merge_sort, sort, BUBBLE_SORT_MAX, INSERTION_SORT_MAX};
    use alloc::{vec, vec::Vec};

    fn is_non_decreasing<T: PartialOrd>(items: &[T]) -> bool {
        items.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn test_each_strategy_sorts() {
        let input = vec![5, -1, 3, 3, 0, 9, -7, 2];
        for f in [insertion_sort::<i32>, bubble_sort::<i32>, merge_sort::<i32>] {
            let mut v = input.clone();
            f(&mut v);
            assert_eq!(v, [-7, -1, 0, 2, 3, 3, 5, 9]);
        }
    }

    #[test]
    fn test_empty_and_single() {
        let mut empty: Vec<i32> = Vec::new();
        sort(&mut empty);
        assert!(empty.is_empty());
        let mut one = [42];
        sort(&mut one);
        assert_eq!(one, [42]);
    }

    #[test]
    fn test_dispatch_boundaries_sort_reversed_input() {
        for len in [
            INSERTION_SORT_MAX - 1,
            INSERTION_SORT_MAX,
            INSERTION_SORT_MAX + 1,
            BUBBLE_SORT_MAX,
            BUBBLE_SORT_MAX + 1,
            BUBBLE_SORT_MAX * 4,
        ] {
            let mut v: Vec<usize> = (0..len).rev().collect();
            sort(&mut v);
            assert_eq!(v, (0..len).collect::<Vec<_>>(), "len {len}");
        }
    }

    #[test]
    fn test_merge_sort_is_stable() {
        // Sort by key only; the tag records the original order.
        #[derive(Clone, Debug)]
        struct Keyed(u8, usize);
        impl PartialEq for Keyed {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let mut v: Vec<Keyed> = (0..200).map(|i| Keyed((i % 3) as u8, i)).collect();
        merge_sort(&mut v);
        for w in v.windows(2) {
            if w[0].0 == w[1].0 {
                assert!(w[0].1 < w[1].1);
            }
        }
    }

    #[test]
    fn test_sort_floats() {
        let mut v = [2.5_f64, -0.5, 1.0, 1.0];
        sort(&mut v);
        assert!(is_non_decreasing(&v));
    }
}

#[cfg(test)]
mod proptests {
    // Imports
    use super::{sort, BUBBLE_SORT_MAX};
    use alloc::vec::Vec;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn sort_yields_sorted_permutation(
            mut v in proptest::collection::vec(any::<i16>(), 0..(BUBBLE_SORT_MAX * 3))
        ) {
            let mut expected = v.clone();
            expected.sort();
            sort(&mut v);
            prop_assert_eq!(v, expected);
        }

        #[test]
        fn sort_is_idempotent(mut v in proptest::collection::vec(any::<u8>(), 0..200)) {
            sort(&mut v);
            let once: Vec<u8> = v.clone();
            sort(&mut v);
            prop_assert_eq!(v, once);
        }
    }
}
