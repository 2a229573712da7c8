// ============================================================================
// churnprep-cli/src/error.rs
// ============================================================================
//
// CLI ERROR HANDLING: Error types and utilities for the CLI
//
// The CLI reports the core library's error type unchanged and only adds
// context describing which CLI step failed.

// ---- Internal crate imports ----
use churnprep_core::{CoreError, CoreResult};

// ---- Standard library imports ----
use std::fmt;

// ============================================================================
// RESULT TYPE ALIAS
// ============================================================================

/// Type alias for CLI results using CoreError.
pub type CliResult<T> = CoreResult<T>;

// ============================================================================
// ERROR CONVERSION UTILITIES
// ============================================================================

/// Extension trait for adding context to errors in the CLI.
///
/// Errors that callers match on (such as a missing dataset) keep their
/// variant; everything else is wrapped with the context message.
pub trait CliErrorContext<T> {
    /// Add context to an error.
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display;

    /// Add context using a closure (for lazy evaluation).
    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C;
}

fn wrap(context: impl fmt::Display, error: CoreError) -> CoreError {
    match error {
        CoreError::InputNotFound(_) => error,
        other => CoreError::OperationFailed(format!("{}: {}", context, other)),
    }
}

impl<T, E> CliErrorContext<T> for Result<T, E>
where
    E: Into<CoreError>,
{
    fn cli_context<C>(self, context: C) -> CliResult<T>
    where
        C: fmt::Display,
    {
        self.map_err(|e| wrap(context, e.into()))
    }

    fn cli_with_context<C, F>(self, f: F) -> CliResult<T>
    where
        C: fmt::Display,
        F: FnOnce() -> C,
    {
        self.map_err(|e| wrap(f(), e.into()))
    }
}

/// Message shown to the user for a failed command.
pub fn describe(error: &CoreError) -> String {
    match error {
        CoreError::InputNotFound(path) => {
            format!("Dataset file not found: {}", path.display())
        }
        other => format!("An error occurred: {}", other),
    }
}
