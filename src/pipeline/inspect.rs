//! Side-effect hooks for the `inspect` operator

use crate::config::InspectLevel;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};
use tracing::{debug, info, trace};

/// Receives each element that passes an `inspect` stage
pub trait Inspector<T: ?Sized> {
    fn inspect(&mut self, item: &T);
}

impl<T: ?Sized, F> Inspector<T> for F
where
    F: FnMut(&T),
{
    fn inspect(&mut self, item: &T) {
        self(item)
    }
}

/// Emits one tracing event per element
#[derive(Debug, Clone, Copy)]
pub struct TracingInspector {
    level: InspectLevel,
    stage: &'static str,
}

impl TracingInspector {
    pub fn new(level: InspectLevel, stage: &'static str) -> Self {
        Self { level, stage }
    }
}

impl Default for TracingInspector {
    fn default() -> Self {
        Self::new(InspectLevel::default(), "inspect")
    }
}

impl<T: Debug + ?Sized> Inspector<T> for TracingInspector {
    fn inspect(&mut self, item: &T) {
        match self.level {
            InspectLevel::Trace => trace!(stage = self.stage, element = ?item, "inspect"),
            InspectLevel::Debug => debug!(stage = self.stage, element = ?item, "inspect"),
            InspectLevel::Info => info!(stage = self.stage, element = ?item, "inspect"),
        }
    }
}

/// Captures inspected elements; clones share the same buffer
#[derive(Debug)]
pub struct RecordingInspector<T> {
    seen: Arc<Mutex<Vec<T>>>,
}

impl<T> Clone for RecordingInspector<T> {
    fn clone(&self) -> Self {
        Self {
            seen: Arc::clone(&self.seen),
        }
    }
}

impl<T> Default for RecordingInspector<T> {
    fn default() -> Self {
        Self {
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<T: Clone> RecordingInspector<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in arrival order
    pub fn recorded(&self) -> Vec<T> {
        match self.seen.lock() {
            Ok(seen) => seen.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl<T: Clone> Inspector<T> for RecordingInspector<T> {
    fn inspect(&mut self, item: &T) {
        let mut seen = match self.seen.lock() {
            Ok(seen) => seen,
            Err(poisoned) => poisoned.into_inner(),
        };
        seen.push(item.clone());
    }
}
