// This file is part of seqlib.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic sequence algorithms shared by every container.
//!
//! The functions here never name a container type. They are bounded on the
//! capability they need instead:
//!
//! - **forward traversal** (`IntoIterator<Item = &T>` / `&mut T`) for
//!   [`copy`], [`move_items`], [`fill`] and [`transform`];
//! - **random access** (`&mut [T]`, or anything `AsMut<[T]>`) for the
//!   in-buffer shifts [`move_backward`] / [`move_within`] and for [`sort`];
//! - **value semantics** (`Clone`) for the container-level [`swap`].
//!
//! Reverse traversal is the iterator's business: `fill(v.iter_mut().rev(), &x)`
//! fills back to front.

mod sort;

pub use sort::{bubble_sort, insertion_sort, merge_sort, sort, BUBBLE_SORT_MAX, INSERTION_SORT_MAX};

// Core imports
use core::ops::Range;

/// Clones items from `src` into the slots yielded by `dst`, pairwise.
///
/// Stops when either side runs out and returns the unused remainder of `dst`,
/// so consecutive copies can be chained into one destination.
pub fn copy<'a, 'b, T, I, O>(src: I, dst: O) -> O::IntoIter
where
    T: Clone + 'a + 'b,
    I: IntoIterator<Item = &'a T>,
    O: IntoIterator<Item = &'b mut T>,
{
    let mut out = dst.into_iter();
    for item in src {
        match out.next() {
            Some(slot) => slot.clone_from(item),
            None => break,
        }
    }
    out
}

/// Moves items from `src` into the slots yielded by `dst`, pairwise.
///
/// Each source slot is left holding `T::default()`. Stops when either side
/// runs out and returns the unused remainder of `dst`.
pub fn move_items<'a, 'b, T, I, O>(src: I, dst: O) -> O::IntoIter
where
    T: Default + 'a + 'b,
    I: IntoIterator<Item = &'a mut T>,
    O: IntoIterator<Item = &'b mut T>,
{
    let mut out = dst.into_iter();
    for item in src {
        match out.next() {
            Some(slot) => *slot = core::mem::take(item),
            None => break,
        }
    }
    out
}

/// Moves `buf[src]` so that it ends just before `dst_end`, last element first.
///
/// This is the right-shift used to open a gap for an insertion: with
/// `dst_end >= src.end` the ranges may overlap. Vacated slots hold
/// `T::default()`. Returns the index of the first moved element.
///
/// # Panics
///
/// Panics if `src` or the destination range lies outside `buf`.
pub fn move_backward<T: Default>(buf: &mut [T], src: Range<usize>, dst_end: usize) -> usize {
    let Range { start, mut end } = src;
    let mut dst = dst_end;
    while end > start {
        end -= 1;
        dst -= 1;
        buf[dst] = core::mem::take(&mut buf[end]);
    }
    dst
}

/// Moves `buf[src]` so that it starts at `dst_start`, first element first.
///
/// The left-shift counterpart of [`move_backward`], used to close the gap left
/// by an erase: with `dst_start <= src.start` the ranges may overlap. Returns
/// the index one past the last moved element.
///
/// # Panics
///
/// Panics if `src` or the destination range lies outside `buf`.
pub fn move_within<T: Default>(buf: &mut [T], src: Range<usize>, dst_start: usize) -> usize {
    let mut dst = dst_start;
    for i in src {
        buf[dst] = core::mem::take(&mut buf[i]);
        dst += 1;
    }
    dst
}

/// Assigns a clone of `value` to every slot yielded by `dst`.
pub fn fill<'a, T, I>(dst: I, value: &T)
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    for slot in dst {
        slot.clone_from(value);
    }
}

/// Writes `op(item)` for each item of `src` into the slots yielded by `dst`.
///
/// Stops when either side runs out and returns the unused remainder of `dst`.
pub fn transform<'a, 'b, T, U, I, O, F>(src: I, dst: O, mut op: F) -> O::IntoIter
where
    T: 'a,
    U: 'b,
    I: IntoIterator<Item = &'a T>,
    O: IntoIterator<Item = &'b mut U>,
    F: FnMut(&T) -> U,
{
    let mut out = dst.into_iter();
    for item in src {
        match out.next() {
            Some(slot) => *slot = op(item),
            None => break,
        }
    }
    out
}

/// Exchanges the contents of two containers through a temporary copy.
///
/// This is three whole-container copies, `O(n)` in the element count, not a
/// pointer exchange. Applying it twice restores both operands.
pub fn swap<C: Clone>(first: &mut C, second: &mut C) {
    let temp = first.clone();
    first.clone_from(second);
    *second = temp;
}
