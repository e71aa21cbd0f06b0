//! Error types for the payroll register.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all failure conditions in the register: roster file I/O, malformed
//! persisted records, console I/O, and interactive field validation.

use thiserror::Error;

/// The main error type for the payroll register.
///
/// All fallible operations in the register return this error type, making
/// it easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_register::error::PayrollError;
///
/// let error = PayrollError::Io {
///     path: "employees.txt".to_string(),
///     message: "permission denied".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Failed to access roster file 'employees.txt': permission denied"
/// );
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The roster file could not be read or written.
    #[error("Failed to access roster file '{path}': {message}")]
    Io {
        /// The path that failed.
        path: String,
        /// A description of the underlying I/O error.
        message: String,
    },

    /// A persisted roster line could not be parsed into an employee.
    #[error("Malformed record on line {line}: {message}")]
    MalformedRecord {
        /// The 1-based line number within the roster file.
        line: usize,
        /// A description of what made the record unreadable.
        message: String,
    },

    /// Console input or output failed mid-session.
    #[error("Console I/O error: {message}")]
    Console {
        /// A description of the underlying I/O error.
        message: String,
    },

    /// An interactively entered field was rejected by its validator.
    ///
    /// The message is the console text shown to the user before the field
    /// reprompts; `field` identifies which input rejected.
    #[error("{message}")]
    InvalidField {
        /// The field that rejected the input.
        field: &'static str,
        /// The console message describing the rejection.
        message: String,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
