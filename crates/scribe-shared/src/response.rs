//! Uniform JSON envelope returned by every endpoint.

use serde::{Deserialize, Serialize};

/// Successful response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
        }
    }
}

/// List response wrapper - carries the number of returned rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn ok(data: Vec<T>) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
        }
    }
}

/// Failure envelope. `success` is always false; `error` is a human-readable
/// description and `message` optionally carries further detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_envelope_omits_message() {
        let json = serde_json::to_value(ApiResponse::ok(7)).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": 7}));
    }

    #[test]
    fn list_envelope_counts_rows() {
        let json = serde_json::to_value(ListResponse::ok(vec!["a", "b"])).unwrap();
        assert_eq!(json["count"], 2);
        assert_eq!(json["success"], true);
    }

    #[test]
    fn error_envelope_is_unsuccessful() {
        let json =
            serde_json::to_value(ErrorResponse::new("bad id").with_message("detail")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"success": false, "error": "bad id", "message": "detail"})
        );
    }
}
