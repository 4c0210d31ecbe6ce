use thiserror::Error;

pub mod codes;
pub mod serialization;

pub use codes::{describe_error_code, ErrorCode};
pub use serialization::SerializableError;

/// The unified error type for every seqflow operation
#[derive(Error, Debug)]
pub enum SeqflowError {
    #[error("[E{code:04}] Invalid argument '{argument}': {message}")]
    InvalidArgument {
        code: u16,
        argument: String,
        message: String,
    },

    #[error("[E{code:04}] Transform failed on element {index}: {message}")]
    ElementTransformFailure {
        code: u16,
        index: usize,
        message: String,
    },

    #[error("[E{code:04}] Cannot {collector} an empty sequence")]
    EmptyAggregation { code: u16, collector: String },

    #[error("[E{code:04}] Unknown operation: {name}")]
    UnknownOperation { code: u16, name: String },

    #[error("[E{code:04}] Configuration error: {message}")]
    Config {
        code: u16,
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SeqflowError {
    /// Create the error raised when a worker bound of zero is requested
    pub fn zero_parallelism() -> Self {
        Self::InvalidArgument {
            code: ErrorCode::ARGUMENT_ZERO_PARALLELISM,
            argument: "max_parallel".to_string(),
            message: "must be at least 1".to_string(),
        }
    }

    /// Create the error raised for a negative `limit`/`skip` count
    pub fn negative_count(argument: impl Into<String>, value: i64) -> Self {
        Self::InvalidArgument {
            code: ErrorCode::ARGUMENT_NEGATIVE_COUNT,
            argument: argument.into(),
            message: format!("must be >= 0, got {}", value),
        }
    }

    /// Create an element transform failure for the element at `index`
    pub fn transform_failure(index: usize, message: impl Into<String>) -> Self {
        Self::ElementTransformFailure {
            code: ErrorCode::TRANSFORM_FAILED,
            index,
            message: message.into(),
        }
    }

    /// Create an element transform failure for a worker that panicked
    pub fn transform_panicked(index: usize, message: impl Into<String>) -> Self {
        Self::ElementTransformFailure {
            code: ErrorCode::TRANSFORM_PANICKED,
            index,
            message: message.into(),
        }
    }

    /// Create an empty aggregation error for the named collector
    pub fn empty_aggregation(collector: impl Into<String>) -> Self {
        Self::EmptyAggregation {
            code: ErrorCode::AGGREGATION_EMPTY,
            collector: collector.into(),
        }
    }

    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation {
            code: ErrorCode::OPERATION_UNKNOWN,
            name: name.into(),
        }
    }

    /// Create a configuration error with specific code
    pub fn config_with_code(code: u16, message: impl Into<String>) -> Self {
        Self::Config {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error to a configuration error
    pub fn with_source(
        mut self,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        if let Self::Config { source: src, .. } = &mut self {
            *src = Some(source.into());
        }
        self
    }

    /// Get the error code
    pub fn code(&self) -> u16 {
        match self {
            Self::InvalidArgument { code, .. }
            | Self::ElementTransformFailure { code, .. }
            | Self::EmptyAggregation { code, .. }
            | Self::UnknownOperation { code, .. }
            | Self::Config { code, .. } => *code,
        }
    }

    /// Name of the error category
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "InvalidArgument",
            Self::ElementTransformFailure { .. } => "ElementTransformFailure",
            Self::EmptyAggregation { .. } => "EmptyAggregation",
            Self::UnknownOperation { .. } => "UnknownOperation",
            Self::Config { .. } => "Config",
        }
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidArgument {
                argument, message, ..
            } => format!("Invalid value for '{}': {}", argument, message),
            Self::ElementTransformFailure { index, message, .. } => {
                format!("Processing element {} failed: {}", index, message)
            }
            Self::EmptyAggregation { collector, .. } => {
                format!("Nothing to {}: the sequence is empty", collector)
            }
            Self::UnknownOperation { name, .. } => format!("No operation named '{}'", name),
            Self::Config { message, .. } => format!("Configuration problem: {}", message),
        }
    }
}

/// Type alias for Results using SeqflowError
pub type Result<T> = std::result::Result<T, SeqflowError>;

impl From<std::io::Error> for SeqflowError {
    fn from(err: std::io::Error) -> Self {
        SeqflowError::config_with_code(ErrorCode::CONFIG_IO_ERROR, "Cannot read configuration")
            .with_source(err)
    }
}

impl From<toml::de::Error> for SeqflowError {
    fn from(err: toml::de::Error) -> Self {
        SeqflowError::config_with_code(ErrorCode::CONFIG_INVALID_TOML, "Invalid TOML syntax")
            .with_source(err)
    }
}
