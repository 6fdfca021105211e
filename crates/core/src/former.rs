// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Grammatical error message formation.
//!
//! [`MessageFormer`] turns label lists into sentences such as
//! `"Both a and b are required."` or `"Either a, b or c is required."`. It
//! holds only configuration and never changes after construction; use
//! [`MessageFormer::clone_with`] for a differently configured copy.
//!
//! ```
//! use errspec_core::{FormerOverrides, MessageFormer};
//!
//! let former = MessageFormer::shared();
//! assert_eq!(former.all_required(&["a", "b"]).unwrap(), "Both a and b are required.");
//!
//! let oxford = former.clone_with(FormerOverrides::default().use_oxford_comma(true));
//! assert_eq!(oxford.all_required(&["a", "b", "c"]).unwrap(), "All a, b, and c are required.");
//! ```

use crate::config::{ConfigurationError, MessageFormerConfig};
use std::collections::BTreeMap;
use std::fmt::Display;
use std::sync::LazyLock;

static SHARED: LazyLock<MessageFormer> = LazyLock::new(MessageFormer::default);

/// Prefix and suffix around a formed message.
///
/// A `None` suffix selects the operation's default suffix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Affix<'a> {
    pub prefix: &'a str,
    pub suffix: Option<&'a str>,
}

impl<'a> Affix<'a> {
    pub fn prefix(prefix: &'a str) -> Self {
        Self { prefix, suffix: None }
    }

    pub fn suffix(suffix: &'a str) -> Self {
        Self { prefix: "", suffix: Some(suffix) }
    }

    pub fn with_prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn with_suffix(mut self, suffix: &'a str) -> Self {
        self.suffix = Some(suffix);
        self
    }
}

/// Parameters for [`MessageFormer::error_for_unexpected_choice`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnexpectedChoice<'a> {
    value: &'a str,
    emphasis: Option<&'a str>,
    choices: Vec<String>,
    prefix: &'a str,
    suffix: &'a str,
}

impl Default for UnexpectedChoice<'_> {
    fn default() -> Self {
        Self { value: "value", emphasis: None, choices: Vec::new(), prefix: "Unexpected ", suffix: "" }
    }
}

impl<'a> UnexpectedChoice<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Noun for the unexpected thing (default `"value"`).
    pub fn value(mut self, value: &'a str) -> Self {
        self.value = value;
        self
    }

    /// Word placed before the noun, e.g. `"color"` in `"Unexpected color value."`.
    pub fn emphasis(mut self, emphasis: &'a str) -> Self {
        self.emphasis = Some(emphasis);
        self
    }

    /// Accepted choices, listed after the sentence. An empty list adds nothing.
    pub fn choices<I>(mut self, choices: I) -> Self
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.choices = choices.into_iter().map(|choice| choice.to_string()).collect();
        self
    }

    /// Leading text (default `"Unexpected "`).
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = prefix;
        self
    }

    /// Trailing text, appended verbatim.
    pub fn suffix(mut self, suffix: &'a str) -> Self {
        self.suffix = suffix;
        self
    }
}

/// Field overrides for [`MessageFormer::clone_with`]. Unset fields are
/// copied from the original former.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormerOverrides {
    locale: Option<String>,
    use_oxford_comma: Option<bool>,
    conjunctions: Option<BTreeMap<String, String>>,
}

impl FormerOverrides {
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn use_oxford_comma(mut self, enabled: bool) -> Self {
        self.use_oxford_comma = Some(enabled);
        self
    }

    pub fn conjunctions<K, V>(mut self, conjunctions: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.conjunctions =
            Some(conjunctions.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }
}

/// Configurable, stateless formatter for validation messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageFormer {
    config: MessageFormerConfig,
}

impl MessageFormer {
    pub fn new(config: MessageFormerConfig) -> Self {
        Self { config }
    }

    /// Process-wide default former (English, no Oxford comma).
    pub fn shared() -> &'static MessageFormer {
        &SHARED
    }

    /// Build a former from a TOML configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigurationError> {
        MessageFormerConfig::from_toml_str(content).map(Self::new)
    }

    pub fn config(&self) -> &MessageFormerConfig {
        &self.config
    }

    /// New former with `overrides` applied; `self` is left untouched.
    pub fn clone_with(&self, overrides: FormerOverrides) -> MessageFormer {
        let FormerOverrides { locale, use_oxford_comma, conjunctions } = overrides;
        MessageFormer::new(MessageFormerConfig {
            locale: locale.unwrap_or_else(|| self.config.locale.clone()),
            use_oxford_comma: use_oxford_comma.unwrap_or(self.config.use_oxford_comma),
            conjunctions: conjunctions.unwrap_or_else(|| self.config.conjunctions.clone()),
        })
    }

    /// Join `items` with the conjunction configured under `conjunction`,
    /// surrounding each item with `wrapper`.
    ///
    /// Two items read `"a and b"`; more read `"a, b and c"`, with a comma
    /// before the conjunction in Oxford mode. A single item is returned
    /// wrapped but otherwise unchanged.
    pub fn join_with_conjunction<S: AsRef<str>>(
        &self,
        items: &[S],
        conjunction: &str,
        wrapper: &str,
    ) -> Result<String, ConfigurationError> {
        let conjunction = self.config.conjunction(conjunction)?;
        let wrapped: Vec<String> =
            items.iter().map(|item| format!("{wrapper}{}{wrapper}", item.as_ref())).collect();

        match wrapped.as_slice() {
            [] => Err(ConfigurationError::TooFewLabels { min: 1, got: 0 }),
            [only] => Ok(only.clone()),
            [first, second] => Ok(format!("{first} {conjunction} {second}")),
            [init @ .., last] => {
                let comma = if self.config.use_oxford_comma { "," } else { "" };
                Ok(format!("{}{comma} {conjunction} {last}", init.join(", ")))
            }
        }
    }

    /// `"a and b are not allowed together."`
    pub fn not_allowed_together<S: AsRef<str>>(
        &self,
        labels: &[S],
    ) -> Result<String, ConfigurationError> {
        self.not_allowed_together_with(labels, Affix::default())
    }

    pub fn not_allowed_together_with<S: AsRef<str>>(
        &self,
        labels: &[S],
        affix: Affix<'_>,
    ) -> Result<String, ConfigurationError> {
        require_pair(labels)?;
        let joined = self.join_with_conjunction(labels, "and", "")?;
        let suffix = affix.suffix.unwrap_or(" are not allowed together.");
        Ok(format!("{}{joined}{suffix}", affix.prefix))
    }

    /// `"Either a or b is required."`
    pub fn at_least_one_required<S: AsRef<str>>(
        &self,
        labels: &[S],
    ) -> Result<String, ConfigurationError> {
        self.at_least_one_required_with(labels, Affix::default())
    }

    pub fn at_least_one_required_with<S: AsRef<str>>(
        &self,
        labels: &[S],
        affix: Affix<'_>,
    ) -> Result<String, ConfigurationError> {
        require_pair(labels)?;
        let joined = self.join_with_conjunction(labels, "or", "")?;
        let suffix = affix.suffix.unwrap_or(" is required.");
        Ok(format!("{}Either {joined}{suffix}", affix.prefix))
    }

    /// `"Both a and b are required."` / `"All a, b and c are required."`
    pub fn all_required<S: AsRef<str>>(&self, labels: &[S]) -> Result<String, ConfigurationError> {
        self.all_required_with(labels, Affix::default())
    }

    pub fn all_required_with<S: AsRef<str>>(
        &self,
        labels: &[S],
        affix: Affix<'_>,
    ) -> Result<String, ConfigurationError> {
        require_pair(labels)?;
        let keyword = if labels.len() == 2 { "Both" } else { "All" };
        let joined = self.join_with_conjunction(labels, "and", "")?;
        let suffix = affix.suffix.unwrap_or(" are required.");
        Ok(format!("{}{keyword} {joined}{suffix}", affix.prefix))
    }

    /// `"Unexpected color value. Choose from 'red', 'green' and 'blue'."`
    pub fn error_for_unexpected_choice(
        &self,
        choice: &UnexpectedChoice<'_>,
    ) -> Result<String, ConfigurationError> {
        let mut message = choice.prefix.to_string();
        if let Some(emphasis) = choice.emphasis.filter(|emphasis| !emphasis.is_empty()) {
            message.push_str(emphasis);
            message.push(' ');
        }
        message.push_str(choice.value);
        message.push('.');
        if !choice.choices.is_empty() {
            let joined = self.join_with_conjunction(&choice.choices, "and", "'")?;
            message.push_str(&format!(" Choose from {joined}."));
        }
        message.push_str(choice.suffix);
        Ok(message)
    }

    /// Parser diagnostic for a flag that may not be supplied at all, e.g.
    /// `"argument -m/--mirror: Not allowed"`.
    pub fn argument_not_allowed<S: AsRef<str>>(&self, flags: &[S]) -> String {
        let flags: Vec<&str> = flags.iter().map(AsRef::as_ref).collect();
        format!("argument {}: Not allowed", flags.join("/"))
    }
}

fn require_pair<S>(labels: &[S]) -> Result<(), ConfigurationError> {
    if labels.len() < 2 {
        return Err(ConfigurationError::TooFewLabels { min: 2, got: labels.len() });
    }
    Ok(())
}

#[cfg(test)]
#[path = "former_tests.rs"]
mod tests;
