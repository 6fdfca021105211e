// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Serializable error summaries for structured logging.

use serde::{Deserialize, Serialize};

/// Flat, serializable view of a structured error.
///
/// Serializes with camelCase keys:
///
/// ```json
/// {"type": "ExitingError", "message": "TypeMismatch: 'count' must be of type i64",
///  "causeType": "TypeMismatch", "causeMessage": "'count' must be of type i64"}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorRecord {
    #[serde(rename = "type")]
    pub error_type: String,
    pub message: String,
    pub cause_type: Option<String>,
    pub cause_message: Option<String>,
}

impl ErrorRecord {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "type": self.error_type,
            "message": self.message,
            "causeType": self.cause_type,
            "causeMessage": self.cause_message,
        })
    }
}
