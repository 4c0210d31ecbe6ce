//! Numeric summary statistics

use crate::error::{Result, SeqflowError};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Final summary record produced by [`summarize`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub count: u64,
    pub sum: i64,
    pub min: i64,
    pub max: i64,
    pub average: f64,
}

/// Running accumulator for count, sum, min and max.
///
/// The running total is kept in `i128`, so `average` stays exact for any
/// `i64` input; [`sum`] reports it clamped to the `i64` bounds. Partial
/// accumulators built over disjoint chunks can be merged with [`combine`].
///
/// [`sum`]: SummaryStatistics::sum
///
/// [`combine`]: SummaryStatistics::combine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryStatistics {
    count: u64,
    total: i128,
    min: i64,
    max: i64,
}

impl Default for SummaryStatistics {
    fn default() -> Self {
        Self {
            count: 0,
            total: 0,
            min: i64::MAX,
            max: i64::MIN,
        }
    }
}

impl SummaryStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accept(&mut self, value: i64) {
        self.count += 1;
        self.total = self.total.saturating_add(i128::from(value));
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Merge another accumulator into this one
    pub fn combine(&mut self, other: &SummaryStatistics) {
        self.count += other.count;
        self.total = self.total.saturating_add(other.total);
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sum of accepted values, saturated at the `i64` bounds
    pub fn sum(&self) -> i64 {
        i64::try_from(self.total).unwrap_or(if self.total < 0 { i64::MIN } else { i64::MAX })
    }

    pub fn min(&self) -> Option<i64> {
        (self.count > 0).then_some(self.min)
    }

    pub fn max(&self) -> Option<i64> {
        (self.count > 0).then_some(self.max)
    }

    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.total as f64 / self.count as f64)
    }

    /// Freeze into a [`Summary`]; fails when nothing was accepted
    pub fn finish(&self) -> Result<Summary> {
        match (self.min(), self.max(), self.average()) {
            (Some(min), Some(max), Some(average)) => Ok(Summary {
                count: self.count,
                sum: self.sum(),
                min,
                max,
                average,
            }),
            _ => Err(SeqflowError::empty_aggregation("summarize")),
        }
    }
}

impl Extend<i64> for SummaryStatistics {
    fn extend<T: IntoIterator<Item = i64>>(&mut self, iter: T) {
        for value in iter {
            self.accept(value);
        }
    }
}

impl FromIterator<i64> for SummaryStatistics {
    fn from_iter<T: IntoIterator<Item = i64>>(iter: T) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

/// Summarize `items` through `to_number`; an empty input is an error
pub fn summarize<I, F>(items: I, to_number: F) -> Result<Summary>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> i64,
{
    let stats: SummaryStatistics = items.into_iter().map(to_number).collect();
    debug!("Summarized {} items", stats.count());
    stats.finish()
}
