// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! POSIX-style process exit codes.
//!
//! Values follow the advanced bash scripting guide's exit code table and
//! `sysexits.h`. Several names deliberately alias the same value: callers
//! pick the name that reads best at the failure site, the invoking shell
//! only ever sees the number.

/// Everything is okay.
pub const EXIT_OK: i32 = 0;

/// Some generic error.
pub const GENERIC_ERR: i32 = 1;

/// Invalid usage of a command.
pub const INVALID_USAGE: i32 = 2;

/// State already exists.
pub const STATE_ALREADY_EXISTS: i32 = 4;

/// File already exists.
pub const FILE_ALREADY_EXISTS: i32 = STATE_ALREADY_EXISTS;

/// Directory already exists.
pub const DIR_ALREADY_EXISTS: i32 = STATE_ALREADY_EXISTS;

/// Data format error, for example while reading a config file (`EX_DATAERR`).
pub const DATA_FORMAT_ERR: i32 = 65;

/// Service unavailable (`EX_UNAVAILABLE`).
pub const UNAVAILABLE_SERVICE_ERR: i32 = 69;

/// A component is in an unstable state (`EX_UNAVAILABLE`).
pub const UNSTABLE_STATE_ERR: i32 = UNAVAILABLE_SERVICE_ERR;

/// A component was used before initialisation (`EX_UNAVAILABLE`).
pub const UNINITIALISED_ERR: i32 = UNAVAILABLE_SERVICE_ERR;

/// Command cannot be executed.
pub const CANNOT_EXECUTE_CMD: i32 = 126;

/// Operation unauthorized.
pub const CMD_EXECUTION_PERMISSION_DENIED: i32 = CANNOT_EXECUTE_CMD;

/// Command not found.
pub const CMD_NOT_FOUND: i32 = 127;

/// File not found.
pub const FILE_NOT_FOUND: i32 = CMD_NOT_FOUND;

/// Directory not found.
pub const DIR_NOT_FOUND: i32 = CMD_NOT_FOUND;

/// Underlying command execution error.
pub const UNDERLYING_CMD_ERR: i32 = 128;

/// Interrupt signal received (Ctrl-C).
pub const SIGINT_RECEIVED: i32 = 130;

/// Every named exit code, in ascending order of value.
///
/// The first entry for a value is its canonical name; later entries with the
/// same value are aliases.
pub const REGISTRY: &[(&str, i32)] = &[
    ("EXIT_OK", EXIT_OK),
    ("GENERIC_ERR", GENERIC_ERR),
    ("INVALID_USAGE", INVALID_USAGE),
    ("STATE_ALREADY_EXISTS", STATE_ALREADY_EXISTS),
    ("FILE_ALREADY_EXISTS", FILE_ALREADY_EXISTS),
    ("DIR_ALREADY_EXISTS", DIR_ALREADY_EXISTS),
    ("DATA_FORMAT_ERR", DATA_FORMAT_ERR),
    ("UNAVAILABLE_SERVICE_ERR", UNAVAILABLE_SERVICE_ERR),
    ("UNSTABLE_STATE_ERR", UNSTABLE_STATE_ERR),
    ("UNINITIALISED_ERR", UNINITIALISED_ERR),
    ("CANNOT_EXECUTE_CMD", CANNOT_EXECUTE_CMD),
    ("CMD_EXECUTION_PERMISSION_DENIED", CMD_EXECUTION_PERMISSION_DENIED),
    ("CMD_NOT_FOUND", CMD_NOT_FOUND),
    ("FILE_NOT_FOUND", FILE_NOT_FOUND),
    ("DIR_NOT_FOUND", DIR_NOT_FOUND),
    ("UNDERLYING_CMD_ERR", UNDERLYING_CMD_ERR),
    ("SIGINT_RECEIVED", SIGINT_RECEIVED),
];

/// Short human-readable description of a known exit code.
pub fn describe(code: i32) -> Option<&'static str> {
    let text = match code {
        EXIT_OK => "everything is okay",
        GENERIC_ERR => "generic error",
        INVALID_USAGE => "invalid usage",
        STATE_ALREADY_EXISTS => "state already exists",
        DATA_FORMAT_ERR => "data format error",
        UNAVAILABLE_SERVICE_ERR => "service unavailable",
        CANNOT_EXECUTE_CMD => "command cannot be executed",
        CMD_NOT_FOUND => "command not found",
        UNDERLYING_CMD_ERR => "underlying command execution error",
        SIGINT_RECEIVED => "interrupt signal received",
        _ => return None,
    };
    Some(text)
}

/// Canonical (first registered) name for an exit code.
pub fn name_of(code: i32) -> Option<&'static str> {
    REGISTRY.iter().find(|(_, value)| *value == code).map(|(name, _)| *name)
}

/// Values a type can report as its process exit code.
pub trait HasExitCode {
    /// Exit code an application should terminate with when this value
    /// reaches the top level.
    fn exit_code(&self) -> i32;

    /// Exit code narrowed to the `u8` range a process can actually report.
    ///
    /// Negative codes (signal terminations) and codes above 255 map to
    /// [`GENERIC_ERR`].
    fn process_exit_code(&self) -> std::process::ExitCode {
        let code = u8::try_from(self.exit_code()).unwrap_or(GENERIC_ERR as u8);
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
#[path = "exit_code_tests.rs"]
mod tests;
