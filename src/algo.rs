//! Sorting algorithms.
//!
//! Two families live here:
//! - **In-place**: [`bubble_sort`], [`insertion_sort`] and [`shell_sort`] exchange elements of the
//!   caller's sequence and hand the same reference back.
//! - **Divide and conquer**: [`merge_sort`] and [`quick_sort`] read the caller's sequence and
//!   build a new `Vec`, combining partial results with [`merge`] and [`concatenate`].
//!
//! Every algorithm has a `*_by` form taking an explicit [`Comparator`]; the plain forms use
//! [`Natural`] ordering. Sequence arguments are `impl Into<Option<&S>>`, so `&mut data` can be
//! passed directly and `None` reports [`SortError::InvalidArgument`](crate::SortError).

use crate::core::{Comparator, Natural, Sequence, SortType};
use crate::error::{Result, require};
use log::{debug, trace};
use std::cmp::Ordering;

/// Quicksort may recurse `QUICKSORT_DEPTH_FACTOR * (log2(n) + 1)` levels before the remaining
/// partition is handed to merge sort.
pub const QUICKSORT_DEPTH_FACTOR: usize = 2;

/// Sorts a sequence in place by comparing every pair of positions.
///
/// For each pair `(i, j)` the two elements are exchanged whenever they violate `sort_type`.
/// All `n²` comparisons are always made. Equal elements may change their relative order.
///
/// # Arguments
///
/// * `sequence` - The sequence to sort, or `None`.
/// * `sort_type` - Whether to sort ascending or descending.
///
/// # Returns
///
/// The same sequence reference, now sorted.
///
/// # Examples
///
/// ```
/// use dsasort::{bubble_sort, SortType};
///
/// let mut data = vec![23, 1, 44, 62, 1, 6, 90, 34];
/// bubble_sort(&mut data, SortType::Descending).unwrap();
///
/// assert_eq!(data, vec![90, 62, 44, 34, 23, 6, 1, 1]);
/// ```
pub fn bubble_sort<'a, S>(
    sequence: impl Into<Option<&'a mut S>>,
    sort_type: SortType,
) -> Result<&'a mut S>
where
    S: Sequence + ?Sized + 'a,
    S::Item: Ord,
{
    bubble_sort_by(sequence, sort_type, Natural)
}

/// Like [`bubble_sort`], ordering elements with `cmp`.
pub fn bubble_sort_by<'a, S, C>(
    sequence: impl Into<Option<&'a mut S>>,
    sort_type: SortType,
    cmp: C,
) -> Result<&'a mut S>
where
    S: Sequence + ?Sized + 'a,
    C: Comparator<S::Item>,
{
    let seq = require(sequence.into(), "sequence")?;
    let len = seq.len();
    trace!("bubble_sort: len={len} sort_type={sort_type:?}");

    for i in 0..len {
        for j in 0..len {
            let violates = match sort_type {
                SortType::Ascending => cmp.is_less(seq.get(i), seq.get(j)),
                SortType::Descending => cmp.is_greater(seq.get(i), seq.get(j)),
            };
            if violates {
                seq.exchange(i, j);
            }
        }
    }

    Ok(seq)
}

/// Sorts a sequence in place, ascending, by growing a sorted prefix.
///
/// Each new element is moved left while it is strictly less than its predecessor, so equal
/// elements keep their input order. Linear on already sorted input.
///
/// # Examples
///
/// ```
/// use dsasort::insertion_sort;
///
/// let mut data = [4, 2, 9, 1];
/// insertion_sort(&mut data).unwrap();
///
/// assert_eq!(data, [1, 2, 4, 9]);
/// ```
pub fn insertion_sort<'a, S>(sequence: impl Into<Option<&'a mut S>>) -> Result<&'a mut S>
where
    S: Sequence + ?Sized + 'a,
    S::Item: Ord,
{
    insertion_sort_by(sequence, Natural)
}

/// Like [`insertion_sort`], ordering elements with `cmp`.
pub fn insertion_sort_by<'a, S, C>(
    sequence: impl Into<Option<&'a mut S>>,
    cmp: C,
) -> Result<&'a mut S>
where
    S: Sequence + ?Sized + 'a,
    C: Comparator<S::Item>,
{
    let seq = require(sequence.into(), "sequence")?;
    trace!("insertion_sort: len={}", seq.len());

    gapped_insertion(seq, 1, &cmp);
    Ok(seq)
}

/// Sorts a sequence in place, ascending, with a halving gap sequence.
///
/// Starts at a gap of `len / 2` and halves it after each pass until it reaches zero; the final
/// pass with gap 1 is a plain insertion sort. Not stable.
///
/// # Examples
///
/// ```
/// use dsasort::shell_sort;
///
/// let mut data = vec![12, 9, 8, 5, 1, 4];
/// shell_sort(&mut data).unwrap();
///
/// assert_eq!(data, vec![1, 4, 5, 8, 9, 12]);
/// ```
pub fn shell_sort<'a, S>(sequence: impl Into<Option<&'a mut S>>) -> Result<&'a mut S>
where
    S: Sequence + ?Sized + 'a,
    S::Item: Ord,
{
    shell_sort_by(sequence, Natural)
}

/// Like [`shell_sort`], ordering elements with `cmp`.
pub fn shell_sort_by<'a, S, C>(sequence: impl Into<Option<&'a mut S>>, cmp: C) -> Result<&'a mut S>
where
    S: Sequence + ?Sized + 'a,
    C: Comparator<S::Item>,
{
    let seq = require(sequence.into(), "sequence")?;
    let len = seq.len();
    trace!("shell_sort: len={len}");

    let mut gap = len / 2;
    while gap > 0 {
        gapped_insertion(seq, gap, &cmp);
        gap /= 2;
    }

    Ok(seq)
}

/// Insertion sort over elements `gap` apart.
fn gapped_insertion<S, C>(seq: &mut S, gap: usize, cmp: &C)
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item>,
{
    for i in gap..seq.len() {
        let mut j = i;
        while j >= gap && cmp.is_less(seq.get(j), seq.get(j - gap)) {
            seq.exchange(j, j - gap);
            j -= gap;
        }
    }
}

/// Merges two ascending sequences into a new ascending `Vec`.
///
/// When the front elements compare equal, the one from `first` is taken, so elements of
/// `first` stay ahead of equal elements of `second`. Once either input runs out, the rest of
/// the other is appended as is.
///
/// # Examples
///
/// ```
/// use dsasort::merge;
///
/// let merged = merge(&[1, 5, 9], &[1, 3, 6, 11]).unwrap();
/// assert_eq!(merged, vec![1, 1, 3, 5, 6, 9, 11]);
/// ```
pub fn merge<'a, 'b, A, B, T>(
    first: impl Into<Option<&'a A>>,
    second: impl Into<Option<&'b B>>,
) -> Result<Vec<T>>
where
    A: Sequence<Item = T> + ?Sized + 'a,
    B: Sequence<Item = T> + ?Sized + 'b,
    T: Ord + Clone,
{
    merge_by(first, second, Natural)
}

/// Like [`merge`], ordering elements with `cmp`.
pub fn merge_by<'a, 'b, A, B, T, C>(
    first: impl Into<Option<&'a A>>,
    second: impl Into<Option<&'b B>>,
    cmp: C,
) -> Result<Vec<T>>
where
    A: Sequence<Item = T> + ?Sized + 'a,
    B: Sequence<Item = T> + ?Sized + 'b,
    T: Clone,
    C: Comparator<T>,
{
    let first = require(first.into(), "first")?;
    let second = require(second.into(), "second")?;
    trace!("merge: first={} second={}", first.len(), second.len());

    let mut left = Vec::with_capacity(first.len());
    first.extend_into(0, first.len(), &mut left);
    let mut right = Vec::with_capacity(second.len());
    second.extend_into(0, second.len(), &mut right);

    Ok(merge_owned(left, right, &cmp))
}

/// Sorts a sequence into a new ascending `Vec`, leaving the input untouched.
///
/// Splits at `len / 2` (the left half is the smaller one on odd lengths), sorts both halves
/// recursively and merges them. Always O(n log n) and stable.
///
/// # Examples
///
/// ```
/// use dsasort::merge_sort;
///
/// let data = vec![38, 27, 43, 3, 9, 82, 10];
/// let sorted = merge_sort(&data).unwrap();
///
/// assert_eq!(sorted, vec![3, 9, 10, 27, 38, 43, 82]);
/// assert_eq!(data[0], 38);
/// ```
pub fn merge_sort<'a, S>(sequence: impl Into<Option<&'a S>>) -> Result<Vec<S::Item>>
where
    S: Sequence + ?Sized + 'a,
    S::Item: Ord + Clone,
{
    merge_sort_by(sequence, Natural)
}

/// Like [`merge_sort`], ordering elements with `cmp`.
pub fn merge_sort_by<'a, S, C>(sequence: impl Into<Option<&'a S>>, cmp: C) -> Result<Vec<S::Item>>
where
    S: Sequence + ?Sized + 'a,
    S::Item: Clone,
    C: Comparator<S::Item>,
{
    let seq = require(sequence.into(), "sequence")?;
    trace!("merge_sort: len={}", seq.len());

    Ok(merge_sort_range(seq, 0, seq.len(), &cmp))
}

fn merge_sort_range<S, C>(seq: &S, start: usize, end: usize, cmp: &C) -> Vec<S::Item>
where
    S: Sequence + ?Sized,
    S::Item: Clone,
    C: Comparator<S::Item>,
{
    if end - start <= 1 {
        let mut out = Vec::with_capacity(end - start);
        seq.extend_into(start, end, &mut out);
        return out;
    }

    let mid = start + (end - start) / 2;
    let left = merge_sort_range(seq, start, mid, cmp);
    let right = merge_sort_range(seq, mid, end, cmp);
    merge_owned(left, right, cmp)
}

/// Merges two sorted runs, taking from `left` on ties.
fn merge_owned<T, C: Comparator<T>>(left: Vec<T>, right: Vec<T>, cmp: &C) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => cmp.is_less(r, l),
            _ => break,
        };
        let next = if take_right {
            right.next()
        } else {
            left.next()
        };
        out.extend(next);
    }

    out.extend(left);
    out.extend(right);
    out
}

/// Moves the median of the first, middle and last elements to position 0.
///
/// The middle position is `len / 2`. At most three conditional exchanges order the three
/// samples as `left <= mid <= right`, then `mid` and `left` are exchanged. An empty sequence
/// is left as is.
///
/// # Examples
///
/// ```
/// use dsasort::median_of_left;
///
/// let mut data = [12, 9, 8, 5, 1, 4];
/// median_of_left(&mut data).unwrap();
///
/// // median of {12, 5, 4}
/// assert_eq!(data[0], 5);
/// ```
pub fn median_of_left<'a, S>(sequence: impl Into<Option<&'a mut S>>) -> Result<&'a mut S>
where
    S: Sequence + ?Sized + 'a,
    S::Item: Ord,
{
    median_of_left_by(sequence, Natural)
}

/// Like [`median_of_left`], ordering elements with `cmp`.
pub fn median_of_left_by<'a, S, C>(
    sequence: impl Into<Option<&'a mut S>>,
    cmp: C,
) -> Result<&'a mut S>
where
    S: Sequence + ?Sized + 'a,
    C: Comparator<S::Item>,
{
    let seq = require(sequence.into(), "sequence")?;
    median_to_front(seq, &cmp);
    Ok(seq)
}

fn median_to_front<S, C>(seq: &mut S, cmp: &C)
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item>,
{
    let len = seq.len();
    if len == 0 {
        return;
    }

    let (left, mid, right) = (0, len / 2, len - 1);

    if cmp.is_greater(seq.get(left), seq.get(mid)) {
        seq.exchange(left, mid);
    }
    if cmp.is_greater(seq.get(left), seq.get(right)) {
        seq.exchange(left, right);
    }
    if cmp.is_greater(seq.get(mid), seq.get(right)) {
        seq.exchange(mid, right);
    }
    seq.exchange(mid, left);
}

/// Appends the elements of three sequences, in order, into a new `Vec`.
///
/// No comparisons are made.
///
/// # Examples
///
/// ```
/// use dsasort::concatenate;
///
/// let all = concatenate(&[1, 2], &vec![3], &[4, 5]).unwrap();
/// assert_eq!(all, vec![1, 2, 3, 4, 5]);
/// ```
pub fn concatenate<'a, 'b, 'c, A, B, D, T>(
    first: impl Into<Option<&'a A>>,
    second: impl Into<Option<&'b B>>,
    third: impl Into<Option<&'c D>>,
) -> Result<Vec<T>>
where
    A: Sequence<Item = T> + ?Sized + 'a,
    B: Sequence<Item = T> + ?Sized + 'b,
    D: Sequence<Item = T> + ?Sized + 'c,
    T: Clone,
{
    let first = require(first.into(), "first")?;
    let second = require(second.into(), "second")?;
    let third = require(third.into(), "third")?;

    let mut out = Vec::with_capacity(first.len() + second.len() + third.len());
    first.extend_into(0, first.len(), &mut out);
    second.extend_into(0, second.len(), &mut out);
    third.extend_into(0, third.len(), &mut out);
    Ok(out)
}

/// Sorts a sequence into a new ascending `Vec` with median-of-three quicksort.
///
/// The input is copied, the median of its first, middle and last elements becomes the pivot,
/// and every element is put into a less, equal or greater bucket. The less and greater buckets
/// are sorted recursively and the three are concatenated. Heavy key duplication collapses into
/// the equal bucket instead of deepening the recursion.
///
/// Recursion is bounded by [`QUICKSORT_DEPTH_FACTOR`]; a partition that exceeds the bound is
/// finished with merge sort. Not stable.
///
/// # Examples
///
/// ```
/// use dsasort::quick_sort;
///
/// let sorted = quick_sort(&[5, 5, 5, 1, 9]).unwrap();
/// assert_eq!(sorted, vec![1, 5, 5, 5, 9]);
/// ```
pub fn quick_sort<'a, S>(sequence: impl Into<Option<&'a S>>) -> Result<Vec<S::Item>>
where
    S: Sequence + ?Sized + 'a,
    S::Item: Ord + Clone,
{
    quick_sort_by(sequence, Natural)
}

/// Like [`quick_sort`], ordering elements with `cmp`.
pub fn quick_sort_by<'a, S, C>(sequence: impl Into<Option<&'a S>>, cmp: C) -> Result<Vec<S::Item>>
where
    S: Sequence + ?Sized + 'a,
    S::Item: Clone,
    C: Comparator<S::Item>,
{
    let seq = require(sequence.into(), "sequence")?;
    let len = seq.len();
    trace!("quick_sort: len={len}");

    let mut items = Vec::with_capacity(len);
    seq.extend_into(0, len, &mut items);
    Ok(quick_sort_owned(items, &cmp, depth_limit(len)))
}

fn depth_limit(len: usize) -> usize {
    match len.checked_ilog2() {
        Some(log) => QUICKSORT_DEPTH_FACTOR * (log as usize + 1),
        None => 0,
    }
}

fn quick_sort_owned<T, C>(mut items: Vec<T>, cmp: &C, depth: usize) -> Vec<T>
where
    T: Clone,
    C: Comparator<T>,
{
    if items.len() <= 1 {
        return items;
    }
    if depth == 0 {
        debug!(
            "quick_sort: depth bound reached, merge sorting {} elements",
            items.len()
        );
        return merge_sort_range(&items, 0, items.len(), cmp);
    }

    median_to_front(&mut items, cmp);

    let mut rest = items.into_iter();
    let Some(pivot) = rest.next() else {
        return Vec::new();
    };

    let mut less = Vec::new();
    let mut equal = vec![pivot];
    let mut greater = Vec::new();
    for item in rest {
        match cmp.compare(&item, &equal[0]) {
            Ordering::Less => less.push(item),
            Ordering::Equal => equal.push(item),
            Ordering::Greater => greater.push(item),
        }
    }

    let mut out = quick_sort_owned(less, cmp, depth - 1);
    out.append(&mut equal);
    out.append(&mut quick_sort_owned(greater, cmp, depth - 1));
    out
}

/// Returns `true` if every adjacent pair of `sequence` is in non-decreasing order under `cmp`.
///
/// ```
/// use dsasort::core::{Natural, Reverse};
/// use dsasort::is_sorted_by;
///
/// assert!(is_sorted_by(&[1, 1, 2], Natural));
/// assert!(is_sorted_by(&[3, 2, 2], Reverse(Natural)));
/// ```
pub fn is_sorted_by<S, C>(sequence: &S, cmp: C) -> bool
where
    S: Sequence + ?Sized,
    C: Comparator<S::Item>,
{
    (1..sequence.len()).all(|i| !cmp.is_less(sequence.get(i), sequence.get(i - 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_limit_grows_with_log() {
        assert_eq!(depth_limit(0), 0);
        assert_eq!(depth_limit(1), 2);
        assert_eq!(depth_limit(8), 8);
        assert_eq!(depth_limit(1000), 20);
    }

    #[test]
    fn merge_owned_prefers_left_on_ties() {
        let by_key = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
        let left = vec![(1, 'a'), (2, 'a')];
        let right = vec![(1, 'b'), (2, 'b')];
        let merged = merge_owned(left, right, &by_key);
        assert_eq!(merged, vec![(1, 'a'), (1, 'b'), (2, 'a'), (2, 'b')]);
    }

    #[test]
    fn exhausted_depth_still_sorts() {
        let items = vec![9, 3, 7, 3, 1, 8];
        let sorted = quick_sort_owned(items, &Natural, 0);
        assert_eq!(sorted, vec![1, 3, 3, 7, 8, 9]);
    }

    #[test]
    fn median_to_front_on_short_inputs() {
        // mid and right coincide, so the larger element ends up in front.
        let mut two = vec![2, 8];
        median_to_front(&mut two, &Natural);
        assert_eq!(two, vec![8, 2]);

        let mut one = vec![4];
        median_to_front(&mut one, &Natural);
        assert_eq!(one, vec![4]);

        let mut none: Vec<i32> = vec![];
        median_to_front(&mut none, &Natural);
        assert!(none.is_empty());
    }
}
