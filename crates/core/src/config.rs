// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message former configuration.
//!
//! ```toml
//! locale = "en"
//! use_oxford_comma = true
//!
//! [conjunctions]
//! and = "and"
//! or = "or"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// Programmer errors raised while forming messages.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("unknown conjunction '{key}'")]
    UnknownConjunction { key: String },

    #[error("at least {min} labels are required, got {got}")]
    TooFewLabels { min: usize, got: usize },

    #[error("invalid message former config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Locale-like settings for [`MessageFormer`](crate::MessageFormer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MessageFormerConfig {
    /// Locale tag. Carried for identity only.
    pub locale: String,
    /// Put a comma before the final conjunction of three or more items.
    pub use_oxford_comma: bool,
    /// Conjunction words by key. Formatting with a missing key fails.
    pub conjunctions: BTreeMap<String, String>,
}

impl Default for MessageFormerConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            use_oxford_comma: false,
            conjunctions: BTreeMap::from([
                ("and".to_string(), "and".to_string()),
                ("or".to_string(), "or".to_string()),
            ]),
        }
    }
}

impl MessageFormerConfig {
    /// Parse a TOML document; absent fields take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigurationError> {
        Ok(toml::from_str(content)?)
    }

    /// Word configured for `key`.
    pub fn conjunction(&self, key: &str) -> Result<&str, ConfigurationError> {
        self.conjunctions
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ConfigurationError::UnknownConjunction { key: key.to_string() })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
