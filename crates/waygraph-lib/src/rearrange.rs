//! Integer-sequence algorithms for graph renumbering and reordering.
//!
//! These are the primitives applied when compacting or restructuring a graph
//! before auxiliary search structures are built: sequence generators,
//! permutation utilities, stable multi-key sort orders, and sorted-set
//! merging. A *permutation of size n* is a sequence in which each of
//! `0..n` occurs exactly once.
//!
//! Generator functions allocate fresh output and are safe for concurrent use
//! on disjoint inputs. The in-place functions ([`transform`], [`shuffle`],
//! [`remove_consecutive_duplicates`]) mutate the caller's storage and leave
//! synchronization to the caller.

use crate::error::{Error, Result};
use crate::random::RandomSource;

/// Sequence of `n` zeros.
pub fn zero(n: usize) -> Vec<i32> {
    vec![0; n]
}

/// Sequence of length `n` with every element equal to `value`.
pub fn constant(n: usize, value: i32) -> Vec<i32> {
    vec![value; n]
}

/// Ascending sequence `[0, 1, ..., n - 1]`.
pub fn iota(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

/// Ascending sequence `[from, to)`; empty when `from >= to`.
pub fn range(from: i32, to: i32) -> Vec<i32> {
    (from..to).collect()
}

/// Ascending sequence `[from, to]` inclusive.
pub fn range_closed(from: i32, to: i32) -> Vec<i32> {
    (from..=to).collect()
}

/// Uniformly random permutation of `[0, n)`, produced by a Fisher-Yates
/// shuffle of [`iota`] driven by the supplied random source.
pub fn permutation(n: usize, rng: &mut dyn RandomSource) -> Vec<i32> {
    let mut seq = iota(n);
    shuffle(&mut seq, rng);
    seq
}

/// In-place Fisher-Yates shuffle.
///
/// For `i` from `n - 1` down to `1`, swaps element `i` with the element at a
/// uniformly drawn index in `[0, i]`. A scripted [`RandomSource`] therefore
/// reproduces one specific output order.
pub fn shuffle(seq: &mut [i32], rng: &mut dyn RandomSource) {
    for i in (1..seq.len()).rev() {
        let j = rng.next_below(i as u32 + 1) as usize;
        seq.swap(i, j);
    }
}

/// True iff `seq` contains each of `0..seq.len()` exactly once.
///
/// The empty sequence is a permutation.
pub fn is_permutation(seq: &[i32]) -> bool {
    let n = seq.len();
    let mut seen = vec![false; n];
    for &v in seq {
        if v < 0 || v as usize >= n || seen[v as usize] {
            return false;
        }
        seen[v as usize] = true;
    }
    true
}

/// New sequence with the elements of `seq` in reverse order.
pub fn reverse(seq: &[i32]) -> Vec<i32> {
    seq.iter().rev().copied().collect()
}

/// Collapse runs of consecutive equal elements within `arr[..length]`, in
/// place, and return the new logical length.
///
/// Only the first returned-length elements are meaningful afterwards;
/// elements at and beyond that index are left as they were, so the trailing
/// region may still hold pre-collapse values. This keeps the operation
/// allocation free.
///
/// # Errors
///
/// Returns [`Error::LengthExceedsCapacity`] when `length` exceeds
/// `arr.len()`.
pub fn remove_consecutive_duplicates(arr: &mut [i32], length: usize) -> Result<usize> {
    if length > arr.len() {
        return Err(Error::LengthExceedsCapacity {
            requested: length,
            capacity: arr.len(),
        });
    }
    if length == 0 {
        return Ok(0);
    }
    let mut kept = 1;
    for i in 1..length {
        if arr[i] != arr[kept - 1] {
            arr[kept] = arr[i];
            kept += 1;
        }
    }
    Ok(kept)
}

/// Non-mutating variant of [`remove_consecutive_duplicates`]: returns a new
/// sequence with each run of consecutive equal elements collapsed to one
/// occurrence.
pub fn without_consecutive_duplicates(seq: &[i32]) -> Vec<i32> {
    let mut out = Vec::with_capacity(seq.len());
    for &v in seq {
        if out.last() != Some(&v) {
            out.push(v);
        }
    }
    out
}

/// Replace each element `e` of `seq` with `mapping[e]`, in place.
///
/// Every element of `seq` must be a valid index into `mapping`.
pub fn transform(seq: &mut [i32], mapping: &[i32]) {
    for v in seq.iter_mut() {
        *v = mapping[*v as usize];
    }
}

/// Permutation of `[0, keys1.len())` that sorts by `keys1` ascending,
/// breaking ties by `keys2` ascending, stably.
///
/// # Errors
///
/// Returns [`Error::KeyLengthMismatch`] when the key arrays differ in
/// length.
pub fn calc_sort_order(keys1: &[i32], keys2: &[i32]) -> Result<Vec<i32>> {
    if keys1.len() != keys2.len() {
        return Err(Error::KeyLengthMismatch {
            left: keys1.len(),
            right: keys2.len(),
        });
    }
    calc_sort_order_len(keys1, keys2, keys1.len())
}

/// Permutation of `[0, length)` that sorts the considered prefix by `keys1`
/// ascending, breaking ties by `keys2` ascending, stably: gathering either
/// key array with the result yields ascending order, and exact duplicate key
/// pairs retain their relative input order.
///
/// # Errors
///
/// Returns [`Error::SortLengthExceedsKeys`] when `length` exceeds either key
/// array.
pub fn calc_sort_order_len(keys1: &[i32], keys2: &[i32], length: usize) -> Result<Vec<i32>> {
    if length > keys1.len() {
        return Err(Error::SortLengthExceedsKeys {
            requested: length,
            available: keys1.len(),
        });
    }
    if length > keys2.len() {
        return Err(Error::SortLengthExceedsKeys {
            requested: length,
            available: keys2.len(),
        });
    }
    let mut order: Vec<i32> = (0..length as i32).collect();
    order.sort_by_key(|&i| (keys1[i as usize], keys2[i as usize]));
    Ok(order)
}

/// Gather: produce `result[i] = arr[order[i]]` for each `i`.
///
/// # Errors
///
/// Returns [`Error::OrderLongerThanArray`] when `order` has more elements
/// than `arr`.
pub fn apply_order(arr: &[i32], order: &[i32]) -> Result<Vec<i32>> {
    if order.len() > arr.len() {
        return Err(Error::OrderLongerThanArray {
            order: order.len(),
            array: arr.len(),
        });
    }
    Ok(order.iter().map(|&i| arr[i as usize]).collect())
}

/// Compute `result[v] = i` for the last `i` with `perm[i] == v`; values
/// never produced by `perm` map to `-1`.
///
/// For a true permutation this is the inverse permutation (old id to new id
/// after a renumbering); for non-injective input, later indices win.
pub fn invert(perm: &[i32]) -> Vec<i32> {
    let mut result = vec![-1; perm.len()];
    for (i, &v) in perm.iter().enumerate() {
        result[v as usize] = i as i32;
    }
    result
}

/// Two-pointer merge of two ascending arrays into one ascending array
/// containing each distinct value once — the set union of the sorted inputs.
///
/// Either input may contain internal duplicates.
pub fn merge(a: &[i32], b: &[i32]) -> Vec<i32> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        let v = if j >= b.len() || (i < a.len() && a[i] <= b[j]) {
            i += 1;
            a[i - 1]
        } else {
            j += 1;
            b[j - 1]
        };
        if out.last() != Some(&v) {
            out.push(v);
        }
    }
    out
}

/// Elements in the index range `[from, to)` as a new sequence.
pub fn sub_list(seq: &[i32], from: usize, to: usize) -> Vec<i32> {
    seq[from..to].to_vec()
}
