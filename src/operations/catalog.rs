use crate::error::{Result, SeqflowError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every operation the engine can run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Flatten,
    Distinct,
    Sorted,
    Limit,
    Skip,
    Inspect,
    Join,
    GroupBy,
    PartitionBy,
    Summarize,
    ParallelMap,
}

impl Operation {
    pub const ALL: [Operation; 11] = [
        Operation::Flatten,
        Operation::Distinct,
        Operation::Sorted,
        Operation::Limit,
        Operation::Skip,
        Operation::Inspect,
        Operation::Join,
        Operation::GroupBy,
        Operation::PartitionBy,
        Operation::Summarize,
        Operation::ParallelMap,
    ];

    /// Canonical name, also the collaborator's path segment
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flatten => "flatten",
            Self::Distinct => "distinct",
            Self::Sorted => "sorted",
            Self::Limit => "limit",
            Self::Skip => "skip",
            Self::Inspect => "inspect",
            Self::Join => "join",
            Self::GroupBy => "groupBy",
            Self::PartitionBy => "partitionBy",
            Self::Summarize => "summarize",
            Self::ParallelMap => "parallelMap",
        }
    }

    /// Older names still accepted when parsing
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Flatten => &["flatMap"],
            Self::Inspect => &["peek"],
            Self::Join => &["joining"],
            Self::GroupBy => &["groupingBy"],
            Self::PartitionBy => &["partitioningBy"],
            Self::Summarize => &["summarizingInt"],
            Self::ParallelMap => &["parallelStream"],
            Self::Distinct | Self::Sorted | Self::Limit | Self::Skip => &[],
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = SeqflowError;

    /// Accepts the canonical name or an alias, with or without a leading `/`
    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().trim_start_matches('/');
        Self::ALL
            .into_iter()
            .find(|op| op.name() == name || op.aliases().iter().any(|alias| *alias == name))
            .ok_or_else(|| SeqflowError::unknown_operation(s.trim()))
    }
}
