//! Core traits and types for dsasort.
//!
//! This module defines:
//! - [`Sequence`]: The indexable, length-bearing collection every algorithm works on.
//! - [`Comparator`]: The three-way comparison capability, with [`Natural`] and [`Reverse`].
//! - [`SortType`]: The direction tag consumed by bubble sort.

use std::cmp::Ordering;
use std::collections::VecDeque;

/// Direction of a sort for algorithms that take one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SortType {
    /// Smallest element first.
    #[default]
    Ascending,
    /// Largest element first.
    Descending,
}

/// A total-order, three-way comparison over `T`.
///
/// Only [`compare`](Comparator::compare) needs implementing; the predicates are derived from it
/// so they can never disagree with each other.
///
/// Any closure `Fn(&T, &T) -> Ordering` is a comparator:
///
/// ```
/// use dsasort::core::Comparator;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert!(by_len.is_less(&"ab", &"abc"));
/// ```
pub trait Comparator<T: ?Sized> {
    /// Orders `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    #[inline(always)]
    fn is_less(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    #[inline(always)]
    fn is_greater(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    #[inline(always)]
    fn are_equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// The natural ordering of `T`, as given by its [`Ord`] impl.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparator<T> for Natural {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Inverts the wrapped comparator.
///
/// Used to get descending output from the algorithms that only sort ascending:
///
/// ```
/// use dsasort::prelude::*;
///
/// let data = vec![3, 1, 2];
/// let sorted = merge_sort_by(&data, Reverse(Natural)).unwrap();
/// assert_eq!(sorted, vec![3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparator<T>> Comparator<T> for Reverse<C> {
    #[inline(always)]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}

/// A finite, randomly indexable collection that can exchange two of its elements.
///
/// This is all the algorithms need from a container, so any random-access
/// collection can be sorted by implementing it.
///
/// # Examples
///
/// ```
/// use dsasort::core::Sequence;
///
/// struct Pair([u32; 2]);
///
/// impl Sequence for Pair {
///     type Item = u32;
///
///     fn len(&self) -> usize {
///         2
///     }
///
///     fn get(&self, index: usize) -> &u32 {
///         &self.0[index]
///     }
///
///     fn exchange(&mut self, i: usize, j: usize) {
///         self.0.swap(i, j);
///     }
/// }
///
/// let mut pair = Pair([9, 4]);
/// dsasort::insertion_sort(&mut pair).unwrap();
/// assert_eq!(pair.0, [4, 9]);
/// ```
pub trait Sequence {
    type Item;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the element at `index`. Callers guarantee `index < len()`.
    fn get(&self, index: usize) -> &Self::Item;

    /// Swaps the elements at `i` and `j`. Callers guarantee both are `< len()`.
    fn exchange(&mut self, i: usize, j: usize);

    /// Clones the elements of `start..end` onto the end of `out`.
    fn extend_into(&self, start: usize, end: usize, out: &mut Vec<Self::Item>)
    where
        Self::Item: Clone,
    {
        out.extend((start..end).map(|i| self.get(i).clone()));
    }
}

impl<T> Sequence for [T] {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn exchange(&mut self, i: usize, j: usize) {
        self.swap(i, j);
    }

    fn extend_into(&self, start: usize, end: usize, out: &mut Vec<T>)
    where
        T: Clone,
    {
        out.extend_from_slice(&self[start..end]);
    }
}

// Explicit Vec impl so callers can pass `&mut vec` without `.as_mut_slice()`.
impl<T> Sequence for Vec<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn exchange(&mut self, i: usize, j: usize) {
        self.swap(i, j);
    }

    fn extend_into(&self, start: usize, end: usize, out: &mut Vec<T>)
    where
        T: Clone,
    {
        out.extend_from_slice(&self[start..end]);
    }
}

// VecDeque has O(1) random access, which is all the in-place sorts rely on.
impl<T> Sequence for VecDeque<T> {
    type Item = T;

    fn len(&self) -> usize {
        self.len()
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn exchange(&mut self, i: usize, j: usize) {
        self.swap(i, j);
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;

    fn len(&self) -> usize {
        N
    }

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn exchange(&mut self, i: usize, j: usize) {
        self.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicates_agree_with_compare() {
        let cmp = Natural;
        assert!(cmp.is_less(&1, &2));
        assert!(cmp.is_greater(&2, &1));
        assert!(cmp.are_equal(&2, &2));
        assert!(!cmp.is_less(&2, &2));
    }

    #[test]
    fn reverse_flips_order() {
        let cmp = Reverse(Natural);
        assert!(cmp.is_less(&5, &3));
        assert!(cmp.are_equal(&3, &3));
    }

    #[test]
    fn deque_extend_uses_default() {
        let deque: VecDeque<u8> = VecDeque::from(vec![4, 5, 6, 7]);
        let mut out = vec![1];
        deque.extend_into(1, 3, &mut out);
        assert_eq!(out, vec![1, 5, 6]);
    }
}
