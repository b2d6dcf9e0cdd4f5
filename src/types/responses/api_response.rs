use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Failure body returned by the endpoint; `message` is shown verbatim.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    pub fn from_value(value: &Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl SubmissionResult {
    pub fn success(message: impl Into<String>, data: Option<Value>) -> Self {
        SubmissionResult {
            success: true,
            message: Some(message.into()),
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        SubmissionResult {
            success: false,
            message: Some(message.into()),
            data: None,
        }
    }
}
