//! The JSON response envelope.
//!
//! Every route handler in both server binaries responds with this shape:
//!
//! ```json
//! { "success": true, "data": ... }
//! { "success": false, "error": "message" }
//! ```

use serde::{Deserialize, Serialize};

/// Response envelope wrapping either a payload or an error message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    #[must_use]
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// A failed response carrying an error message.
    #[must_use]
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_shape() {
        let json = serde_json::to_value(ApiResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(json, serde_json::json!({"success": true, "data": [1, 2, 3]}));
    }

    #[test]
    fn test_err_shape() {
        let json = serde_json::to_value(ApiResponse::<()>::err("nope")).unwrap();
        assert_eq!(json, serde_json::json!({"success": false, "error": "nope"}));
    }

    #[test]
    fn test_deserialize_ok() {
        let resp: ApiResponse<i32> =
            serde_json::from_str(r#"{"success": true, "data": 7}"#).unwrap();
        assert!(resp.success);
        assert_eq!(resp.data, Some(7));
        assert_eq!(resp.error, None);
    }
}
