//! Lazy sequence pipeline
//!
//! Operators live in [`operators`] as free functions over any iterable.
//! [`Pipeline`] chains the same functions fluently:
//!
//! ```
//! use seqflow::pipeline::Pipeline;
//!
//! let firsts: Vec<_> = Pipeline::new(["b", "a", "b", "c"])
//!     .distinct()
//!     .sorted()
//!     .limit(2)
//!     .unwrap()
//!     .collect();
//! assert_eq!(firsts, vec!["a", "b"]);
//! ```

mod inspect;
pub mod operators;

pub use inspect::{Inspector, RecordingInspector, TracingInspector};
pub use operators::{
    distinct, filter, flatten, inspect, limit, map, skip, sorted, try_map, Distinct, Inspect,
    TryMap,
};

use crate::error::Result;
use std::fmt::Display;
use std::hash::Hash;

/// Fluent wrapper over a chain of operators; itself an iterator
#[derive(Debug, Clone)]
pub struct Pipeline<I> {
    iter: I,
}

impl<I: Iterator> Pipeline<I> {
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Self {
            iter: source.into_iter(),
        }
    }

    pub fn map<U, F>(self, transform: F) -> Pipeline<std::iter::Map<I, F>>
    where
        F: FnMut(I::Item) -> U,
    {
        Pipeline {
            iter: map(self.iter, transform),
        }
    }

    pub fn filter<P>(self, predicate: P) -> Pipeline<std::iter::Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Pipeline {
            iter: filter(self.iter, predicate),
        }
    }

    pub fn flatten(self) -> Pipeline<std::iter::Flatten<I>>
    where
        I::Item: IntoIterator,
    {
        Pipeline {
            iter: flatten(self.iter),
        }
    }

    pub fn distinct(self) -> Pipeline<Distinct<I>>
    where
        I::Item: Eq + Hash + Clone,
    {
        Pipeline {
            iter: distinct(self.iter),
        }
    }

    pub fn sorted(self) -> Pipeline<std::vec::IntoIter<I::Item>>
    where
        I::Item: Ord,
    {
        Pipeline {
            iter: sorted(self.iter),
        }
    }

    pub fn limit(self, n: i64) -> Result<Pipeline<std::iter::Take<I>>> {
        Ok(Pipeline {
            iter: limit(self.iter, n)?,
        })
    }

    pub fn skip(self, n: i64) -> Result<Pipeline<std::iter::Skip<I>>> {
        Ok(Pipeline {
            iter: skip(self.iter, n)?,
        })
    }

    pub fn inspect<S>(self, inspector: S) -> Pipeline<Inspect<I, S>>
    where
        S: Inspector<I::Item>,
    {
        Pipeline {
            iter: inspect(self.iter, inspector),
        }
    }

    pub fn try_map<U, E, F>(self, transform: F) -> Pipeline<TryMap<I, F>>
    where
        F: FnMut(I::Item) -> std::result::Result<U, E>,
        E: Display,
    {
        Pipeline {
            iter: try_map(self.iter, transform),
        }
    }

    pub fn into_inner(self) -> I {
        self.iter
    }
}

impl<I: Iterator> Iterator for Pipeline<I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
