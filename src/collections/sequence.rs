//! Sequence helpers: chunking, lookups and closure-equality set operations.
//!
//! [`split`] partitions a sequence into consecutive chunks of at most `size`
//! elements. The input is consumed once, front to back, and element order
//! is preserved within and across chunks.

use std::iter::Flatten;
use std::option;

use crate::collections::comparer::LambdaComparer;
use crate::error::{CollectionError, Result};

const SEQUENCE: &str = "sequence";

/// Splits `sequence` into chunks of at most `size` elements.
///
/// Element `n` lands in chunk `n / size`. Every chunk except the last holds
/// exactly `size` elements. An empty sequence yields no chunks.
///
/// # Arguments
///
/// * `sequence` - The input, or `None` when absent.
/// * `size` - Maximum number of elements per chunk.
///
/// # Errors
///
/// Returns [`CollectionError::MissingCollection`] when `sequence` is `None`
/// and [`CollectionError::InvalidArgument`] when `size` is `0`.
///
/// # Examples
///
/// ```
/// use extkit::collections::split;
///
/// let chunks = split(Some(1..=9), 5).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2, 3, 4, 5], vec![6, 7, 8, 9]]);
/// ```
pub fn split<I>(sequence: Option<I>, size: usize) -> Result<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
{
    let sequence = sequence.ok_or(CollectionError::MissingCollection { name: SEQUENCE })?;
    chunk(sequence, size)
}

fn chunk<I>(sequence: I, size: usize) -> Result<Vec<Vec<I::Item>>>
where
    I: IntoIterator,
{
    if size == 0 {
        return Err(CollectionError::InvalidArgument {
            name: "size",
            reason: "chunk size must be greater than 0".to_string(),
        }
        .into());
    }

    let mut chunks: Vec<Vec<I::Item>> = Vec::new();
    for (position, item) in sequence.into_iter().enumerate() {
        if position / size == chunks.len() {
            chunks.push(Vec::new());
        }
        if let Some(current) = chunks.last_mut() {
            current.push(item);
        }
    }

    tracing::trace!(chunks = chunks.len(), size, "split sequence");
    Ok(chunks)
}

/// Extension methods for any iterator.
pub trait SequenceExt: Iterator + Sized {
    /// Splits the remaining items into chunks of at most `size` elements.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::InvalidArgument`] when `size` is `0`.
    fn split(self, size: usize) -> Result<Vec<Vec<Self::Item>>> {
        chunk(self, size)
    }

    /// Index of the first item equal to `item`.
    fn index_of(mut self, item: &Self::Item) -> Option<usize>
    where
        Self::Item: PartialEq,
    {
        self.position(|candidate| candidate == *item)
    }

    /// Index of the first item matching `predicate`.
    fn index_where<P>(mut self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.position(|candidate| predicate(&candidate))
    }

    /// Calls `action` with every item and its zero-based index.
    fn for_each_indexed<A>(self, mut action: A)
    where
        A: FnMut(Self::Item, usize),
    {
        for (index, item) in self.enumerate() {
            action(item, index);
        }
    }

    /// Keeps the first occurrence of each item under `eq`.
    fn distinct_by<F>(self, eq: F) -> Vec<Self::Item>
    where
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        let comparer = LambdaComparer::new(eq);
        let mut distinct = Vec::new();
        for item in self {
            if !comparer.contains(&distinct, &item) {
                distinct.push(item);
            }
        }
        distinct
    }

    /// Distinct items of `self` followed by distinct items of `other` not
    /// already seen.
    fn union_by<I, F>(self, other: I, eq: F) -> Vec<Self::Item>
    where
        I: IntoIterator<Item = Self::Item>,
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        self.chain(other).distinct_by(eq)
    }

    /// Distinct items of `self` that have no equal in `other`.
    fn except_by<I, F>(self, other: I, eq: F) -> Vec<Self::Item>
    where
        I: IntoIterator<Item = Self::Item>,
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        let comparer = LambdaComparer::new(eq);
        let mut seen: Vec<Self::Item> = other.into_iter().collect();
        let excluded = seen.len();
        for item in self {
            if !comparer.contains(&seen, &item) {
                seen.push(item);
            }
        }
        seen.split_off(excluded)
    }

    /// Distinct items of `self` that have an equal in `other`.
    ///
    /// Each match consumes the matching item of `other`, so an item is
    /// yielded at most once per distinct value of `other`.
    fn intersect_by<I, F>(self, other: I, eq: F) -> Vec<Self::Item>
    where
        I: IntoIterator<Item = Self::Item>,
        F: Fn(&Self::Item, &Self::Item) -> bool,
    {
        let comparer = LambdaComparer::new(eq);
        let mut remaining: Vec<Self::Item> = Vec::new();
        for item in other {
            if !comparer.contains(&remaining, &item) {
                remaining.push(item);
            }
        }

        let mut result = Vec::new();
        for item in self {
            if let Some(index) = comparer.position(&remaining, &item) {
                remaining.swap_remove(index);
                result.push(item);
            }
        }
        result
    }
}

impl<I: Iterator> SequenceExt for I {}

/// Extension methods for a sequence that may be absent.
pub trait OptionalSequenceExt<I: IntoIterator> {
    /// Returns `true` when the sequence is absent or yields nothing.
    fn is_null_or_empty(self) -> bool;

    /// Iterates the sequence, or nothing when it is absent.
    fn as_not_null(self) -> Flatten<option::IntoIter<I>>;

    /// Returns whether the sequence yields nothing.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionError::MissingCollection`] when absent.
    fn is_empty_sequence(self) -> Result<bool>;

    /// Splits the sequence into chunks of at most `size` elements.
    ///
    /// # Errors
    ///
    /// See [`split`].
    fn split(self, size: usize) -> Result<Vec<Vec<I::Item>>>;
}

impl<I: IntoIterator> OptionalSequenceExt<I> for Option<I> {
    fn is_null_or_empty(self) -> bool {
        self.is_none_or(|sequence| sequence.into_iter().next().is_none())
    }

    fn as_not_null(self) -> Flatten<option::IntoIter<I>> {
        self.into_iter().flatten()
    }

    fn is_empty_sequence(self) -> Result<bool> {
        let sequence = self.ok_or(CollectionError::MissingCollection { name: SEQUENCE })?;
        Ok(sequence.into_iter().next().is_none())
    }

    fn split(self, size: usize) -> Result<Vec<Vec<I::Item>>> {
        split(self, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use test_case::test_case;

    #[test]
    fn test_split_even() {
        let chunks = split(Some(1..=10), 5).unwrap();
        assert_eq!(chunks, vec![vec![1, 2, 3, 4, 5], vec![6, 7, 8, 9, 10]]);
    }

    #[test]
    fn test_split_remainder() {
        let chunks = split(Some(1..=9), 5).unwrap();
        assert_eq!(chunks, vec![vec![1, 2, 3, 4, 5], vec![6, 7, 8, 9]]);
    }

    #[test_case(1 ; "size one")]
    #[test_case(5 ; "size five")]
    #[test_case(usize::MAX ; "huge size")]
    fn test_split_empty_sequence(size: usize) {
        let chunks = split(Some(Vec::<i32>::new()), size).unwrap();
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_split_size_larger_than_input() {
        let chunks = split(Some(vec!["a", "b"]), 100).unwrap();
        assert_eq!(chunks, vec![vec!["a", "b"]]);
    }

    #[test]
    fn test_split_zero_size() {
        let err = split(Some(vec![1, 2, 3]), 0).unwrap_err();
        assert!(matches!(
            err,
            Error::Collection(CollectionError::InvalidArgument { name: "size", .. })
        ));
    }

    #[test]
    fn test_split_missing_sequence_reported_first() {
        let err = split(None::<Vec<i32>>, 0).unwrap_err();
        assert!(matches!(
            err,
            Error::Collection(CollectionError::MissingCollection { name: "sequence" })
        ));
    }

    #[test]
    fn test_split_consumes_iterator_once() {
        let mut pulls = 0;
        let source = std::iter::from_fn(|| {
            pulls += 1;
            (pulls <= 7).then_some(pulls)
        });
        let chunks = source.split(3).unwrap();
        assert_eq!(chunks, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    }

    #[test]
    fn test_optional_split() {
        let chunks = Some(vec![1, 2, 3]).split(2).unwrap();
        assert_eq!(chunks, vec![vec![1, 2], vec![3]]);
        assert!(None::<Vec<i32>>.split(2).is_err());
    }

    #[test]
    fn test_index_of_and_index_where() {
        let words = ["alpha", "beta", "gamma", "beta"];
        assert_eq!(words.iter().index_of(&&"beta"), Some(1));
        assert_eq!(words.iter().index_of(&&"delta"), None);
        assert_eq!(words.iter().index_where(|w| w.starts_with('g')), Some(2));
    }

    #[test]
    fn test_for_each_indexed() {
        let mut seen = Vec::new();
        ["a", "b", "c"]
            .into_iter()
            .for_each_indexed(|item, index| seen.push(format!("{index}:{item}")));
        assert_eq!(seen, vec!["0:a", "1:b", "2:c"]);
    }

    #[test]
    fn test_distinct_by() {
        let words = vec!["Apple", "apple", "Pear", "APPLE", "pear", "fig"];
        let distinct = words
            .into_iter()
            .distinct_by(|a, b| a.eq_ignore_ascii_case(b));
        assert_eq!(distinct, vec!["Apple", "Pear", "fig"]);
    }

    #[test]
    fn test_union_by() {
        let union = vec![1, 2, 2, 3]
            .into_iter()
            .union_by(vec![3, 4, 1, 5], |a, b| a == b);
        assert_eq!(union, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_except_by() {
        let except = vec![1, 2, 2, 3, 4]
            .into_iter()
            .except_by(vec![2, 4], |a, b| a == b);
        assert_eq!(except, vec![1, 3]);
    }

    #[test]
    fn test_intersect_by() {
        let intersect = vec![1, 2, 2, 3, 4]
            .into_iter()
            .intersect_by(vec![4, 2, 2, 9], |a, b| a == b);
        assert_eq!(intersect, vec![2, 4]);
    }

    #[test]
    fn test_intersect_by_with_key_closure() {
        let left = vec![(1, "one"), (2, "two"), (3, "three")];
        let right = vec![(3, "drei"), (1, "eins")];
        let intersect = left.into_iter().intersect_by(right, |a, b| a.0 == b.0);
        assert_eq!(intersect, vec![(1, "one"), (3, "three")]);
    }

    #[test]
    fn test_is_null_or_empty() {
        assert!(None::<Vec<i32>>.is_null_or_empty());
        assert!(Some(Vec::<i32>::new()).is_null_or_empty());
        assert!(!Some(vec![1]).is_null_or_empty());
    }

    #[test]
    fn test_as_not_null() {
        let collected: Vec<i32> = None::<Vec<i32>>.as_not_null().collect();
        assert!(collected.is_empty());
        let collected: Vec<i32> = Some(vec![1, 2]).as_not_null().collect();
        assert_eq!(collected, vec![1, 2]);
    }

    #[test]
    fn test_is_empty_sequence() {
        assert!(Some(Vec::<u8>::new()).is_empty_sequence().unwrap());
        assert!(!Some(vec![0_u8]).is_empty_sequence().unwrap());
        assert!(matches!(
            None::<Vec<u8>>.is_empty_sequence(),
            Err(Error::Collection(CollectionError::MissingCollection { .. }))
        ));
    }
}
