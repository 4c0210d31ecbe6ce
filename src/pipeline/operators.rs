//! Element-wise sequence operators
//!
//! Every operator takes anything iterable and hands back a lazy iterator, so
//! stages compose by plain nesting. `sorted` is the only stage that buffers.

use super::inspect::Inspector;
use crate::error::{Result, SeqflowError};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;
use std::iter::{Skip, Take};
use tracing::debug;

/// Concatenate inner sequences in outer order
pub fn flatten<I>(nested: I) -> std::iter::Flatten<I::IntoIter>
where
    I: IntoIterator,
    I::Item: IntoIterator,
{
    nested.into_iter().flatten()
}

/// Drop elements equal to one already yielded; first occurrence wins
pub fn distinct<I>(items: I) -> Distinct<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Eq + Hash + Clone,
{
    Distinct {
        iter: items.into_iter(),
        seen: HashSet::new(),
    }
}

/// Natural-order stable sort; the input is consumed, never mutated in place
pub fn sorted<I>(items: I) -> std::vec::IntoIter<I::Item>
where
    I: IntoIterator,
    I::Item: Ord,
{
    let mut buffer: Vec<I::Item> = items.into_iter().collect();
    buffer.sort();
    debug!("Sorted {} items", buffer.len());
    buffer.into_iter()
}

/// First `min(n, len)` elements
pub fn limit<I>(items: I, n: i64) -> Result<Take<I::IntoIter>>
where
    I: IntoIterator,
{
    let count = checked_count("limit", n)?;
    debug!("Limiting to {} items", count);
    Ok(items.into_iter().take(count))
}

/// Everything after the first `min(n, len)` elements
pub fn skip<I>(items: I, n: i64) -> Result<Skip<I::IntoIter>>
where
    I: IntoIterator,
{
    let count = checked_count("skip", n)?;
    debug!("Skipping {} items", count);
    Ok(items.into_iter().skip(count))
}

/// Report every element to `inspector` as it flows past, unchanged
pub fn inspect<I, S>(items: I, inspector: S) -> Inspect<I::IntoIter, S>
where
    I: IntoIterator,
    S: Inspector<I::Item>,
{
    Inspect {
        iter: items.into_iter(),
        inspector,
    }
}

pub fn map<I, U, F>(items: I, transform: F) -> std::iter::Map<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
{
    items.into_iter().map(transform)
}

pub fn filter<I, P>(items: I, predicate: P) -> std::iter::Filter<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    items.into_iter().filter(predicate)
}

/// Fallible map. Yields `Err(ElementTransformFailure)` tagged with the
/// element's position; collecting into `Result<Vec<_>>` stops at the first one.
pub fn try_map<I, U, E, F>(items: I, transform: F) -> TryMap<I::IntoIter, F>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> std::result::Result<U, E>,
    E: Display,
{
    TryMap {
        iter: items.into_iter(),
        transform,
        index: 0,
    }
}

fn checked_count(argument: &str, n: i64) -> Result<usize> {
    if n < 0 {
        return Err(SeqflowError::negative_count(argument, n));
    }
    Ok(usize::try_from(n).unwrap_or(usize::MAX))
}

/// Iterator returned by [`distinct`]
pub struct Distinct<I: Iterator> {
    iter: I,
    seen: HashSet<I::Item>,
}

impl<I> Iterator for Distinct<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.iter.by_ref() {
            if self.seen.insert(item.clone()) {
                return Some(item);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.iter.size_hint().1)
    }
}

/// Iterator returned by [`inspect`]
pub struct Inspect<I, S> {
    iter: I,
    inspector: S,
}

impl<I, S> Iterator for Inspect<I, S>
where
    I: Iterator,
    S: Inspector<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        self.inspector.inspect(&item);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

/// Iterator returned by [`try_map`]
pub struct TryMap<I, F> {
    iter: I,
    transform: F,
    index: usize,
}

impl<I, U, E, F> Iterator for TryMap<I, F>
where
    I: Iterator,
    F: FnMut(I::Item) -> std::result::Result<U, E>,
    E: Display,
{
    type Item = Result<U>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.iter.next()?;
        let index = self.index;
        self.index += 1;
        Some(
            (self.transform)(item)
                .map_err(|e| SeqflowError::transform_failure(index, e.to_string())),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::cell::Cell;

    const NAMES: [&str; 7] = [
        "Emma", "William", "James", "Sophia", "Lucas", "Sophia", "James",
    ];

    #[test]
    fn test_flatten_keeps_outer_then_inner_order() {
        let nested = vec![vec!["Emma", "William"], vec![], vec!["James", "Sophia"]];
        let flat: Vec<_> = flatten(nested).collect();
        assert_eq!(flat, vec!["Emma", "William", "James", "Sophia"]);
    }

    #[test]
    fn test_distinct_first_occurrence_wins() {
        let unique: Vec<_> = distinct(NAMES).collect();
        assert_eq!(unique, vec!["Emma", "William", "James", "Sophia", "Lucas"]);
    }

    #[test]
    fn test_distinct_is_lazy() {
        let pulled = Cell::new(0);
        let source = NAMES.iter().inspect(|_| pulled.set(pulled.get() + 1));
        let first_two: Vec<_> = distinct(source).take(2).collect();
        assert_eq!(first_two, vec![&"Emma", &"William"]);
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn test_sorted_lexicographic() {
        let ordered: Vec<_> = sorted(NAMES).collect();
        assert_eq!(
            ordered,
            vec!["Emma", "James", "James", "Lucas", "Sophia", "Sophia", "William"]
        );
    }

    #[test]
    fn test_sorted_is_stable() {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
        struct ByKey(u8, Tag);
        #[derive(Debug, PartialEq, Eq)]
        struct Tag(&'static str);
        impl PartialOrd for Tag {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Tag {
            fn cmp(&self, _: &Self) -> std::cmp::Ordering {
                std::cmp::Ordering::Equal
            }
        }

        let items = vec![ByKey(2, Tag("a")), ByKey(1, Tag("b")), ByKey(2, Tag("c"))];
        let ordered: Vec<_> = sorted(items).map(|k| (k.1).0).collect();
        assert_eq!(ordered, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_limit_and_skip() {
        let first: Vec<_> = limit(NAMES, 3).unwrap().collect();
        assert_eq!(first, vec!["Emma", "William", "James"]);

        let rest: Vec<_> = skip(NAMES, 3).unwrap().collect();
        assert_eq!(rest, vec!["Sophia", "Lucas", "Sophia", "James"]);

        assert_eq!(limit(NAMES, 100).unwrap().count(), 7);
        assert_eq!(skip(NAMES, 100).unwrap().count(), 0);
        assert_eq!(limit(NAMES, 0).unwrap().count(), 0);
        assert_eq!(skip(NAMES, 0).unwrap().count(), 7);
    }

    #[test]
    fn test_negative_counts_rejected() {
        let err = limit(NAMES, -1).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ARGUMENT_NEGATIVE_COUNT);
        assert!(matches!(err, SeqflowError::InvalidArgument { ref argument, .. } if argument == "limit"));

        let err = skip(NAMES, -5).unwrap_err();
        assert!(matches!(err, SeqflowError::InvalidArgument { ref argument, .. } if argument == "skip"));
    }

    #[test]
    fn test_inspect_sees_elements_before_next_stage() {
        let mut log = Vec::new();
        let upper: Vec<String> = map(
            inspect(["Emma", "Lucas"], |name: &&str| log.push(name.to_string())),
            |name| name.to_uppercase(),
        )
        .collect();
        assert_eq!(upper, vec!["EMMA", "LUCAS"]);
        assert_eq!(log, vec!["Emma", "Lucas"]);
    }

    #[test]
    fn test_filter_preserves_order() {
        let long: Vec<_> = filter(NAMES, |name| name.len() > 5).collect();
        assert_eq!(long, vec!["William", "Sophia", "Sophia"]);
    }

    #[test]
    fn test_try_map_reports_failing_index() {
        let result: Result<Vec<i32>> = try_map(["1", "2", "x", "4"], |s| s.parse::<i32>()).collect();
        match result.unwrap_err() {
            SeqflowError::ElementTransformFailure { index, .. } => assert_eq!(index, 2),
            other => panic!("unexpected error: {other}"),
        }

        let ok: Result<Vec<i32>> = try_map(["1", "2"], |s| s.parse::<i32>()).collect();
        assert_eq!(ok.unwrap(), vec![1, 2]);
    }
}
