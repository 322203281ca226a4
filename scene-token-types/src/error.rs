/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! API error types.

use serde::{Deserialize, Serialize};

/// Structured error body returned by every failed request.
///
/// The `code` field is a machine-readable identifier (e.g. `"INVALID_REQUEST"`).
/// The `message` field is a human-readable description suitable for display.
/// The `engineering_error` field carries debug-level detail such as the
/// underlying signing or decoding error.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct APIError {
    /// Machine-readable error code.
    pub code: String,

    /// Human-readable error message.
    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engineering_error: Option<String>,
}

impl APIError {
    pub fn invalid_request(detail: &str) -> Self {
        Self {
            code: "INVALID_REQUEST".to_string(),
            message: detail.to_string(),
            engineering_error: None,
        }
    }

    pub fn malformed_body(detail: &str) -> Self {
        Self {
            code: "MALFORMED_BODY".to_string(),
            message: "Request body could not be decoded".to_string(),
            engineering_error: Some(detail.to_string()),
        }
    }

    pub fn internal_error(detail: &str) -> Self {
        Self {
            code: "INTERNAL_ERROR".to_string(),
            message: "Internal server error".to_string(),
            engineering_error: Some(detail.to_string()),
        }
    }
}

impl std::fmt::Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for APIError {}
