//! Order-preserving parallel map
//!
//! Each element is transformed on the tokio blocking pool, with at most
//! `max_parallel` transforms in flight. Results are written back into the
//! slot matching the element's input position, so `output[i] == f(input[i])`
//! whatever order the workers finish in.

use crate::config::EngineConfig;
use crate::error::{Result, SeqflowError};
use futures::stream::{FuturesUnordered, StreamExt};
use futures::FutureExt;
use std::convert::Infallible;
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

#[derive(Debug, Clone)]
pub struct ParallelExecutor {
    max_parallel: usize,
}

impl ParallelExecutor {
    pub fn new(max_parallel: usize) -> Result<Self> {
        if max_parallel == 0 {
            return Err(SeqflowError::zero_parallelism());
        }
        Ok(Self { max_parallel })
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Self::new(config.max_parallel)
    }

    pub fn max_parallel(&self) -> usize {
        self.max_parallel
    }

    /// Apply an infallible transform to every element
    pub async fn map<T, U, F>(&self, items: Vec<T>, transform: F) -> Result<Vec<U>>
    where
        T: Send + 'static,
        U: Send + 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        self.try_map(items, move |item| Ok::<U, Infallible>(transform(item)))
            .await
    }

    /// Apply a fallible transform to every element.
    ///
    /// The first failure (or panic) aborts every task that has not started
    /// yet and is returned as `ElementTransformFailure` for that element.
    /// No partial output is returned.
    pub async fn try_map<T, U, E, F>(&self, items: Vec<T>, transform: F) -> Result<Vec<U>>
    where
        T: Send + 'static,
        U: Send + 'static,
        E: Display + Send + 'static,
        F: Fn(T) -> std::result::Result<U, E> + Send + Sync + 'static,
    {
        let total = items.len();
        if total == 0 {
            return Ok(Vec::new());
        }

        debug!(
            "Fanning out {} items (max parallel: {})",
            total, self.max_parallel
        );

        let semaphore = Arc::new(Semaphore::new(self.max_parallel));
        let transform = Arc::new(transform);
        let mut tasks = FuturesUnordered::new();
        let mut abort_handles = Vec::with_capacity(total);

        for (index, item) in items.into_iter().enumerate() {
            let semaphore = Arc::clone(&semaphore);
            let transform = Arc::clone(&transform);

            let handle = tokio::spawn(run_one(index, item, semaphore, transform));

            abort_handles.push(handle.abort_handle());
            tasks.push(handle.map(move |joined| (index, joined)));
        }

        let mut slots: Vec<Option<U>> = std::iter::repeat_with(|| None).take(total).collect();

        while let Some((index, joined)) = tasks.next().await {
            let outcome = joined.unwrap_or_else(|join_err| {
                Err(SeqflowError::transform_panicked(index, join_err.to_string()))
            });

            match outcome {
                Ok(output) => slots[index] = Some(output),
                Err(err) => {
                    warn!("Parallel map aborted at element {}: {}", index, err);
                    for handle in &abort_handles {
                        handle.abort();
                    }
                    return Err(err);
                }
            }
        }

        debug!("Fan-in complete: {} results", total);

        slots
            .into_iter()
            .enumerate()
            .map(|(index, slot)| {
                slot.ok_or_else(|| SeqflowError::transform_failure(index, "result missing"))
            })
            .collect()
    }
}

/// Transform a single element once a permit is available
async fn run_one<T, U, E, F>(
    index: usize,
    item: T,
    semaphore: Arc<Semaphore>,
    transform: Arc<F>,
) -> Result<U>
where
    T: Send + 'static,
    U: Send + 'static,
    E: Display + Send + 'static,
    F: Fn(T) -> std::result::Result<U, E> + Send + Sync + 'static,
{
    let _permit = semaphore
        .acquire_owned()
        .await
        .map_err(|e| SeqflowError::transform_failure(index, e.to_string()))?;

    match tokio::task::spawn_blocking(move || (*transform)(item)).await {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(e)) => Err(SeqflowError::transform_failure(index, e.to_string())),
        Err(join_err) => Err(SeqflowError::transform_panicked(
            index,
            join_err.to_string(),
        )),
    }
}
