use super::SeqflowError;
use serde::{Deserialize, Serialize};

/// Serializable error representation for JSON output
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SerializableError {
    /// Error kind as string
    pub kind: String,
    /// User-facing error message
    pub message: String,
    /// Error code
    pub code: u16,
    /// Index of the failing element, for transform failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<usize>,
}

impl From<&SeqflowError> for SerializableError {
    fn from(error: &SeqflowError) -> Self {
        let index = match error {
            SeqflowError::ElementTransformFailure { index, .. } => Some(*index),
            _ => None,
        };

        Self {
            kind: error.kind().to_string(),
            message: error.user_message(),
            code: error.code(),
            index,
        }
    }
}

impl SeqflowError {
    /// Convert error to JSON value
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(SerializableError::from(self))
            .unwrap_or_else(|_| serde_json::json!({ "error": "Serialization failed" }))
    }

    /// Convert error to JSON string
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(&SerializableError::from(self))
            .unwrap_or_else(|_| r#"{"error":"Serialization failed"}"#.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::codes::ErrorCode;

    #[test]
    fn test_basic_serialization() {
        let error = SeqflowError::negative_count("skip", -1);

        let serialized = SerializableError::from(&error);
        assert_eq!(serialized.kind, "InvalidArgument");
        assert_eq!(serialized.code, ErrorCode::ARGUMENT_NEGATIVE_COUNT);
        assert!(serialized.index.is_none());
    }

    #[test]
    fn test_transform_failure_serializes_index() {
        let error = SeqflowError::transform_failure(7, "overflow");

        let json = error.to_json();
        assert_eq!(json["kind"], "ElementTransformFailure");
        assert_eq!(json["index"], 7);
        assert_eq!(json["code"], 2000);
    }

    #[test]
    fn test_to_json_string_omits_missing_index() {
        let error = SeqflowError::unknown_operation("reverse");
        let json_str = error.to_json_string();
        assert!(json_str.contains("UnknownOperation"));
        assert!(!json_str.contains("index"));
    }
}
