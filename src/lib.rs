//! # seqflow
//!
//! Composable lazy sequence operators, terminal collectors and an
//! order-preserving parallel map, exposed as a catalog of named operations
//! over fixed sample data.
//!
//! ## Modules
//!
//! - `source` - The immutable sample sequences
//! - `pipeline` - Lazy operators (flatten, distinct, sorted, limit, skip, inspect, map, filter)
//! - `collect` - Terminal collectors (join, group_by, partition_by, summarize)
//! - `parallel` - Bounded fan-out/fan-in map with index-preserving output
//! - `operations` - Named operations returning serializable results
//! - `config` - Engine settings from defaults, TOML and environment
//! - `error` - Error taxonomy with stable codes
//! - `logging` - Tracing subscriber setup
pub mod collect;
pub mod config;
pub mod error;
pub mod logging;
pub mod operations;
pub mod parallel;
pub mod pipeline;
pub mod source;


pub use error::{Result, SeqflowError};
pub use operations::{CollectorResult, Operation, OperationContext};
