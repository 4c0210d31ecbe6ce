//! Named operations over the sample data
//!
//! Every operation reads from [`SequenceSource`], runs a fixed operator chain
//! and one collector, and returns a [`CollectorResult`] ready for encoding.

mod catalog;

pub use catalog::Operation;

use crate::collect::{self, Partition, Summary};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::parallel::ParallelExecutor;
use crate::pipeline::{Inspector, Pipeline, TracingInspector};
use crate::source::SequenceSource;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Terminal value of an operation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CollectorResult {
    Names(Vec<String>),
    Numbers(Vec<i32>),
    Text(String),
    Groups(BTreeMap<String, Vec<String>>),
    Partition(Partition<String>),
    Summary(Summary),
}

impl CollectorResult {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self)
            .unwrap_or_else(|_| serde_json::json!({ "error": "Serialization failed" }))
    }
}

fn owned(names: impl IntoIterator<Item = &'static str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

pub fn flatten_names(source: &SequenceSource) -> Vec<String> {
    owned(Pipeline::new(source.nested_names()).flatten().copied())
}

pub fn distinct_names(source: &SequenceSource) -> Vec<String> {
    owned(Pipeline::new(source.names()).distinct())
}

pub fn sorted_names(source: &SequenceSource) -> Vec<String> {
    owned(Pipeline::new(source.names()).sorted())
}

pub fn limit_names(source: &SequenceSource) -> Result<Vec<String>> {
    Ok(owned(Pipeline::new(source.names()).limit(3)?))
}

pub fn skip_names(source: &SequenceSource) -> Result<Vec<String>> {
    Ok(owned(Pipeline::new(source.names()).skip(3)?))
}

/// Report each name to `inspector`, then upper-case it
pub fn inspect_names<S>(source: &SequenceSource, inspector: S) -> Vec<String>
where
    S: Inspector<&'static str>,
{
    Pipeline::new(source.names())
        .inspect(inspector)
        .map(str::to_uppercase)
        .collect()
}

pub fn join_names(source: &SequenceSource) -> String {
    collect::join(source.names(), ", ", "Names: ", ".")
}

/// Names grouped by their first character
pub fn group_names_by_initial(source: &SequenceSource) -> BTreeMap<String, Vec<String>> {
    collect::group_by(source.names(), |name| {
        name.chars().next().map(String::from).unwrap_or_default()
    })
    .into_iter()
    .map(|(initial, names)| (initial, owned(names)))
    .collect()
}

/// Names split on `len > 5`
pub fn partition_names_by_length(source: &SequenceSource) -> Partition<String> {
    collect::partition_by(source.names(), |name| name.len() > 5).map(str::to_string)
}

pub fn summarize_numbers(source: &SequenceSource) -> Result<Summary> {
    collect::summarize(source.numbers(), i64::from)
}

/// Every number doubled on the parallel executor
pub async fn parallel_double_numbers(
    source: &SequenceSource,
    executor: &ParallelExecutor,
) -> Result<Vec<i32>> {
    executor.map(source.numbers().collect(), |n: i32| n * 2).await
}

/// Everything an invocation needs besides the operation itself
#[derive(Debug, Clone)]
pub struct OperationContext {
    source: SequenceSource,
    config: EngineConfig,
    executor: ParallelExecutor,
}

impl OperationContext {
    pub fn new(config: EngineConfig) -> Result<Self> {
        let executor = ParallelExecutor::from_config(&config)?;
        Ok(Self {
            source: SequenceSource::new(),
            config,
            executor,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one operation; the inspection stage reports through tracing
    pub async fn invoke(&self, operation: Operation) -> Result<CollectorResult> {
        let inspector = TracingInspector::new(self.config.inspect_level, "inspect");
        self.invoke_with(operation, inspector).await
    }

    /// Run one operation with a caller-supplied inspection sink
    pub async fn invoke_with<S>(
        &self,
        operation: Operation,
        inspector: S,
    ) -> Result<CollectorResult>
    where
        S: Inspector<&'static str>,
    {
        debug!("Invoking operation {}", operation);
        let source = &self.source;

        let result = match operation {
            Operation::Flatten => CollectorResult::Names(flatten_names(source)),
            Operation::Distinct => CollectorResult::Names(distinct_names(source)),
            Operation::Sorted => CollectorResult::Names(sorted_names(source)),
            Operation::Limit => CollectorResult::Names(limit_names(source)?),
            Operation::Skip => CollectorResult::Names(skip_names(source)?),
            Operation::Inspect => CollectorResult::Names(inspect_names(source, inspector)),
            Operation::Join => CollectorResult::Text(join_names(source)),
            Operation::GroupBy => CollectorResult::Groups(group_names_by_initial(source)),
            Operation::PartitionBy => {
                CollectorResult::Partition(partition_names_by_length(source))
            }
            Operation::Summarize => CollectorResult::Summary(summarize_numbers(source)?),
            Operation::ParallelMap => {
                CollectorResult::Numbers(parallel_double_numbers(source, &self.executor).await?)
            }
        };

        info!("Operation {} completed", operation);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::RecordingInspector;

    fn context() -> OperationContext {
        OperationContext::new(EngineConfig {
            max_parallel: 3,
            ..EngineConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn test_list_operations() {
        let source = SequenceSource::new();
        assert_eq!(
            flatten_names(&source),
            vec!["Emma", "William", "James", "Sophia"]
        );
        assert_eq!(
            distinct_names(&source),
            vec!["Emma", "William", "James", "Sophia", "Lucas"]
        );
        assert_eq!(
            sorted_names(&source),
            vec!["Emma", "James", "James", "Lucas", "Sophia", "Sophia", "William"]
        );
        assert_eq!(
            limit_names(&source).unwrap(),
            vec!["Emma", "William", "James"]
        );
        assert_eq!(
            skip_names(&source).unwrap(),
            vec!["Sophia", "Lucas", "Sophia", "James"]
        );
    }

    #[test]
    fn test_inspect_names_reports_originals() {
        let recorder = RecordingInspector::new();
        let upper = inspect_names(&SequenceSource::new(), recorder.clone());
        assert_eq!(
            upper,
            vec!["EMMA", "WILLIAM", "JAMES", "SOPHIA", "LUCAS", "SOPHIA", "JAMES"]
        );
        assert_eq!(
            recorder.recorded(),
            vec!["Emma", "William", "James", "Sophia", "Lucas", "Sophia", "James"]
        );
    }

    #[test]
    fn test_grouping_and_partitioning() {
        let source = SequenceSource::new();

        let groups = group_names_by_initial(&source);
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["E", "J", "L", "S", "W"]);
        assert_eq!(groups["J"], vec!["James", "James"]);

        let partition = partition_names_by_length(&source);
        assert_eq!(partition.matching, vec!["William", "Sophia", "Sophia"]);
        assert_eq!(partition.rest, vec!["Emma", "James", "Lucas", "James"]);
    }

    #[test]
    fn test_join_and_summary() {
        let source = SequenceSource::new();
        assert_eq!(
            join_names(&source),
            "Names: Emma, William, James, Sophia, Lucas, Sophia, James."
        );

        let summary = summarize_numbers(&source).unwrap();
        assert_eq!(summary.count, 10);
        assert_eq!(summary.sum, 55);
        assert_eq!(summary.average, 5.5);
    }

    #[test]
    fn test_summary_encodes_fields_in_declared_order() {
        let summary = summarize_numbers(&SequenceSource::new()).unwrap();
        let encoded = CollectorResult::Summary(summary).to_json();
        assert_eq!(
            encoded.to_string(),
            r#"{"count":10,"sum":55,"min":1,"max":10,"average":5.5}"#
        );
    }

    #[test]
    fn test_to_json_encodes_each_shape() {
        assert_eq!(
            CollectorResult::Text("Names: .".to_string()).to_json(),
            serde_json::json!("Names: .")
        );
        assert_eq!(
            CollectorResult::Numbers(vec![2, 4]).to_json(),
            serde_json::json!([2, 4])
        );
        let partition = partition_names_by_length(&SequenceSource::new());
        let encoded = CollectorResult::Partition(partition).to_json();
        assert!(encoded.get("error").is_none());
        assert_eq!(encoded["true"], serde_json::json!(["William", "Sophia", "Sophia"]));
    }

    #[tokio::test]
    async fn test_invoke_parallel_map() {
        let result = context().invoke(Operation::ParallelMap).await.unwrap();
        assert_eq!(
            result,
            CollectorResult::Numbers(vec![2, 4, 6, 8, 10, 12, 14, 16, 18, 20])
        );
    }

    #[tokio::test]
    async fn test_invoke_with_custom_inspector() {
        let recorder = RecordingInspector::new();
        let result = context()
            .invoke_with(Operation::Inspect, recorder.clone())
            .await
            .unwrap();
        assert!(matches!(result, CollectorResult::Names(ref names) if names.len() == 7));
        assert_eq!(recorder.recorded().len(), 7);
    }

    #[tokio::test]
    async fn test_every_operation_succeeds() {
        let ctx = context();
        for operation in Operation::ALL {
            assert!(ctx.invoke(operation).await.is_ok(), "{} failed", operation);
        }
    }

    #[test]
    fn test_zero_parallelism_context_rejected() {
        let config = EngineConfig {
            max_parallel: 0,
            ..EngineConfig::default()
        };
        assert!(OperationContext::new(config).is_err());
    }
}
