//! Terminal collectors
//!
//! Each collector consumes a sequence eagerly and returns one aggregate value.

mod summary;

pub use summary::{summarize, Summary, SummaryStatistics};

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;
use std::hash::Hash;
use tracing::debug;

/// Collect into an ordered list
pub fn to_list<I>(items: I) -> Vec<I::Item>
where
    I: IntoIterator,
{
    items.into_iter().collect()
}

/// Render every element with `Display`, `separator` between neighbours,
/// wrapped once in `prefix` and `suffix`
pub fn join<I>(items: I, separator: &str, prefix: &str, suffix: &str) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut joined = String::from(prefix);
    for (position, item) in items.into_iter().enumerate() {
        if position > 0 {
            joined.push_str(separator);
        }
        joined.push_str(&item.to_string());
    }
    joined.push_str(suffix);
    joined
}

/// Group elements by `key_fn`. Group contents keep input order; key order is
/// unspecified.
pub fn group_by<I, K, F>(items: I, mut key_fn: F) -> HashMap<K, Vec<I::Item>>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&I::Item) -> K,
{
    let mut groups: HashMap<K, Vec<I::Item>> = HashMap::new();
    for item in items {
        groups.entry(key_fn(&item)).or_default().push(item);
    }
    debug!("Grouped items into {} groups", groups.len());
    groups
}

/// Split elements on `predicate`. Both sides always exist, possibly empty.
pub fn partition_by<I, P>(items: I, mut predicate: P) -> Partition<I::Item>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    let mut partition = Partition::default();
    for item in items {
        if predicate(&item) {
            partition.matching.push(item);
        } else {
            partition.rest.push(item);
        }
    }
    debug!(
        "Partitioned items: {} matching, {} not matching",
        partition.matching.len(),
        partition.rest.len()
    );
    partition
}

/// Result of [`partition_by`], serialized as `{"false": [...], "true": [...]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition<T> {
    #[serde(rename = "false")]
    pub rest: Vec<T>,
    #[serde(rename = "true")]
    pub matching: Vec<T>,
}

impl<T> Default for Partition<T> {
    fn default() -> Self {
        Self {
            rest: Vec::new(),
            matching: Vec::new(),
        }
    }
}

impl<T> Partition<T> {
    /// Elements whose predicate outcome was `outcome`
    pub fn get(&self, outcome: bool) -> &[T] {
        if outcome {
            &self.matching
        } else {
            &self.rest
        }
    }

    pub fn into_map(self) -> BTreeMap<bool, Vec<T>> {
        BTreeMap::from([(false, self.rest), (true, self.matching)])
    }

    pub fn map<U, F>(self, mut f: F) -> Partition<U>
    where
        F: FnMut(T) -> U,
    {
        Partition {
            rest: self.rest.into_iter().map(&mut f).collect(),
            matching: self.matching.into_iter().map(&mut f).collect(),
        }
    }
}
