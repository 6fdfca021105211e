// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failures of external commands.
//!
//! [`ProcessFailure`] captures a command that terminated with a non-success
//! status. [`CommandError`] is the exit-code-bearing error that wraps it.

use crate::error::{render, Cause, CauseView, ExitingError, Structured, StructuredError};
use crate::exit_code::{HasExitCode, INVALID_USAGE};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::process::{ExitStatus, Output};
use thiserror::Error;

/// Command line of a failed process: an argument vector or a shell string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CommandLine {
    Args(Vec<String>),
    Shell(String),
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandLine::Args(args) => f.write_str(&args.join(" ")),
            CommandLine::Shell(line) => f.write_str(line),
        }
    }
}

impl From<Vec<String>> for CommandLine {
    fn from(args: Vec<String>) -> Self {
        CommandLine::Args(args)
    }
}

impl From<&[&str]> for CommandLine {
    fn from(args: &[&str]) -> Self {
        CommandLine::Args(args.iter().map(|arg| arg.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for CommandLine {
    fn from(args: [&str; N]) -> Self {
        CommandLine::from(&args[..])
    }
}

impl From<String> for CommandLine {
    fn from(line: String) -> Self {
        CommandLine::Shell(line)
    }
}

impl From<&str> for CommandLine {
    fn from(line: &str) -> Self {
        CommandLine::Shell(line.to_string())
    }
}

/// Captured outcome of an external command that exited unsuccessfully.
///
/// Negative return codes denote termination by signal (`-9` for `SIGKILL`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessFailure {
    pub command: CommandLine,
    pub return_code: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stdout: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
}

impl ProcessFailure {
    pub fn new(command: impl Into<CommandLine>, return_code: i32) -> Self {
        Self { command: command.into(), return_code, stdout: None, stderr: None }
    }

    pub fn with_stdout(mut self, stdout: impl Into<String>) -> Self {
        self.stdout = Some(stdout.into());
        self
    }

    pub fn with_stderr(mut self, stderr: impl Into<String>) -> Self {
        self.stderr = Some(stderr.into());
        self
    }

    /// Build a failure from captured process output.
    ///
    /// Returns `None` when the process succeeded. Empty streams are not kept.
    pub fn from_output(command: impl Into<CommandLine>, output: &Output) -> Option<Self> {
        if output.status.success() {
            return None;
        }
        Some(Self {
            command: command.into(),
            return_code: return_code(output.status),
            stdout: captured(&output.stdout),
            stderr: captured(&output.stderr),
        })
    }
}

fn return_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return -signal;
        }
    }
    -1
}

fn captured(stream: &[u8]) -> Option<String> {
    if stream.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(stream).into_owned())
    }
}

impl fmt::Display for ProcessFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.return_code < 0 {
            write!(f, "Command '{}' died with signal {}.", self.command, -self.return_code)
        } else {
            write!(
                f,
                "Command '{}' returned non-zero exit status {}.",
                self.command, self.return_code
            )
        }
    }
}

impl StdError for ProcessFailure {}

/// A command error was chained to something other than a [`ProcessFailure`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("command error cause must be a ProcessFailure, found {found}")]
pub struct CauseMismatch {
    pub found: String,
}

impl HasExitCode for CauseMismatch {
    fn exit_code(&self) -> i32 {
        INVALID_USAGE
    }
}

/// An [`ExitingError`] raised for a failed external command.
///
/// The exit code defaults to the wrapped failure's return code.
#[derive(Debug)]
pub struct CommandError {
    base: StructuredError,
    failure: ProcessFailure,
    exit_code: i32,
}

impl CommandError {
    pub fn new(failure: ProcessFailure) -> Self {
        let exit_code = failure.return_code;
        Self { base: StructuredError::new(), failure, exit_code }
    }

    /// Report `exit_code` instead of the failure's return code.
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    /// The wrapped failure.
    pub fn failure(&self) -> &ProcessFailure {
        &self.failure
    }

    /// Effective cause: the explicitly chained error when there is one (it
    /// must be a [`ProcessFailure`]), otherwise the wrapped failure.
    pub fn cause(&self) -> Result<&ProcessFailure, CauseMismatch> {
        match self.base.cause() {
            Some(cause) => cause
                .downcast_ref::<ProcessFailure>()
                .ok_or_else(|| CauseMismatch { found: cause.type_name().to_string() }),
            None => Ok(&self.failure),
        }
    }

    pub fn message(&self) -> Option<String> {
        self.base.message()
    }

    pub fn chained_cause(&self) -> Option<&Cause> {
        self.base.cause()
    }

    fn effective_cause(&self) -> CauseView<'_> {
        match self.base.cause() {
            Some(cause) => CauseView::from(cause),
            None => CauseView {
                type_name: "ProcessFailure",
                message: Some(self.failure.to_string()),
            },
        }
    }
}

crate::structured_builders!(CommandError => base);

impl HasExitCode for CommandError {
    fn exit_code(&self) -> i32 {
        self.exit_code
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(f, self.base.message().as_deref(), Some(self.effective_cause()))
    }
}

impl StdError for CommandError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self.base.cause() {
            Some(cause) => Some(cause.error() as &(dyn StdError + 'static)),
            None => Some(&self.failure),
        }
    }
}

impl Structured for CommandError {
    fn type_name(&self) -> &'static str {
        "CommandError"
    }

    fn structured(&self) -> &StructuredError {
        &self.base
    }

    fn cause_summary(&self) -> Option<(String, String)> {
        let cause = self.effective_cause();
        Some((cause.type_name.to_string(), cause.message.unwrap_or_default()))
    }
}

/// Widen to an [`ExitingError`]. The wrapped failure becomes the chained
/// cause unless another cause was chained already.
impl From<CommandError> for ExitingError {
    fn from(err: CommandError) -> Self {
        let CommandError { mut base, failure, exit_code } = err;
        if base.cause().is_none() {
            base.set_cause(Cause::new(failure));
        }
        ExitingError::from_structured(base, exit_code)
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
