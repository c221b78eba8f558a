//! # dsasort
//!
//! `dsasort` is a small library of classic in-memory sorting algorithms that work over any
//! indexable sequence and any total-order comparator.
//!
//! ## Algorithms
//!
//! | Function           | Result                   | Stable | Cost              |
//! |--------------------|--------------------------|--------|-------------------|
//! | [`bubble_sort`]    | in place, either order   | no     | O(n²) always      |
//! | [`insertion_sort`] | in place                 | yes    | O(n²), O(n) sorted|
//! | [`shell_sort`]     | in place                 | no     | sub-quadratic     |
//! | [`merge_sort`]     | new `Vec`                | yes    | O(n log n)        |
//! | [`quick_sort`]     | new `Vec`                | no     | O(n log n) average|
//!
//! The building blocks [`merge`], [`concatenate`] and [`median_of_left`] are public as well.
//!
//! ## Usage
//!
//! In-place sorts mutate their argument and also return it:
//!
//! ```rust
//! use dsasort::prelude::*;
//!
//! let mut data = vec![23, 1, 44, 62, 1, 6, 90, 34];
//! bubble_sort(&mut data, SortType::Ascending).unwrap();
//!
//! assert_eq!(data, vec![1, 1, 6, 23, 34, 44, 62, 90]);
//! ```
//!
//! Merge sort and quicksort leave the input alone and return a new `Vec`. Pass a comparator to
//! the `*_by` variants to sort by a key or in reverse:
//!
//! ```rust
//! use dsasort::prelude::*;
//!
//! let words = ["pear", "fig", "banana"];
//! let by_len = merge_sort_by(&words, |a: &&str, b: &&str| a.len().cmp(&b.len())).unwrap();
//! assert_eq!(by_len, vec!["fig", "pear", "banana"]);
//!
//! let desc = quick_sort_by(&words, Reverse(Natural)).unwrap();
//! assert_eq!(desc, vec!["pear", "fig", "banana"]);
//! ```
//!
//! ## Absent arguments
//!
//! Sequence parameters accept `Option`, so `None` can stand for a missing input. It is reported
//! as [`SortError::InvalidArgument`] before anything is touched:
//!
//! ```rust
//! use dsasort::prelude::*;
//!
//! let err = insertion_sort(None::<&mut Vec<i32>>).unwrap_err();
//! assert_eq!(err, SortError::InvalidArgument { name: "sequence" });
//! ```
//!
//! ## Custom containers
//!
//! Implement [`Sequence`] for any random-access container to sort it directly. It is provided
//! for slices, arrays, `Vec` and `VecDeque`.

pub mod algo;
pub mod core;
pub mod error;
pub use crate::algo::*;
pub use crate::core::{Comparator, Natural, Reverse, Sequence, SortType};
pub use crate::error::{Result, SortError};

pub mod prelude {
    pub use crate::algo::{
        bubble_sort, bubble_sort_by, concatenate, insertion_sort, insertion_sort_by,
        is_sorted_by, median_of_left, median_of_left_by, merge, merge_by, merge_sort,
        merge_sort_by, quick_sort, quick_sort_by, shell_sort, shell_sort_by,
    };
    pub use crate::core::{Comparator, Natural, Reverse, Sequence, SortType};
    pub use crate::error::SortError;
}
