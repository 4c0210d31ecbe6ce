/// Error code registry for seqflow
///
/// Error codes are organized by category:
/// - 1000-1999: Invalid argument errors
/// - 2000-2999: Element transform errors
/// - 3000-3999: Aggregation errors
/// - 4000-4999: Operation lookup errors
/// - 5000-5999: Configuration errors
#[allow(dead_code)]
pub struct ErrorCode;

impl ErrorCode {
    // Invalid argument errors (1000-1999)
    pub const ARGUMENT_NEGATIVE_COUNT: u16 = 1001;
    pub const ARGUMENT_ZERO_PARALLELISM: u16 = 1002;

    // Element transform errors (2000-2999)
    pub const TRANSFORM_FAILED: u16 = 2000;
    pub const TRANSFORM_PANICKED: u16 = 2001;

    // Aggregation errors (3000-3999)
    pub const AGGREGATION_EMPTY: u16 = 3000;

    // Operation lookup errors (4000-4999)
    pub const OPERATION_UNKNOWN: u16 = 4000;

    // Configuration errors (5000-5999)
    pub const CONFIG_IO_ERROR: u16 = 5001;
    pub const CONFIG_INVALID_TOML: u16 = 5002;
    pub const CONFIG_INVALID_VALUE: u16 = 5003;
}

/// Get a human-readable description for an error code
pub fn describe_error_code(code: u16) -> &'static str {
    match code {
        1001 => "Element count must not be negative",
        1002 => "Parallelism must be at least one",

        2000 => "Element transform failed",
        2001 => "Element transform panicked",

        3000 => "Aggregation over an empty sequence",

        4000 => "Unknown operation",

        5001 => "Configuration file could not be read",
        5002 => "Invalid TOML syntax in configuration",
        5003 => "Invalid value in configuration",

        _ => "Unknown error code",
    }
}
