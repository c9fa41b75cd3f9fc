//! # API Error Type
//!
//! Unified error type for shell commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Basket                                 │
//! │                                                                         │
//! │  Presentation                Rust Shell                                 │
//! │  ────────────                ──────────                                 │
//! │                                                                         │
//! │  add_item(listId, form)                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Store not started? ─── CoreError::StoreNotInitialized ──┐      │  │
//! │  │         │                                                 │      │  │
//! │  │         ▼                                                 ▼      │  │
//! │  │  Bad form input? ───── ValidationError ────────────── ApiError ─►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Unknown list/item ids are NOT errors: the store ignores them.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use basket_core::{CoreError, ValidationError};
use serde::Serialize;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "item name is required"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Command ran outside the store's start/shutdown window
    NotInitialized,

    /// Input validation failed
    ValidationError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::StoreNotInitialized => {
                ApiError::new(ErrorCode::NotInitialized, err.to_string())
            }
            CoreError::Validation(e) => e.into(),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_initialized_mapping() {
        let err = ApiError::from(CoreError::StoreNotInitialized);
        assert_eq!(err.code, ErrorCode::NotInitialized);
        assert_eq!(err.message, "Store is not initialized");
    }

    #[test]
    fn test_validation_mapping_keeps_message() {
        let err = ApiError::from(ValidationError::Required {
            field: "list name".to_string(),
        });
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "list name is required");

        let wrapped = ApiError::from(CoreError::from(ValidationError::Required {
            field: "list name".to_string(),
        }));
        assert_eq!(wrapped, err);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(ApiError::validation("boom")).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "boom");
        assert_eq!(json.as_object().unwrap().len(), 2);

        let json = serde_json::to_value(ApiError::from(CoreError::StoreNotInitialized)).unwrap();
        assert_eq!(json["code"], "NOT_INITIALIZED");
    }
}
