//! Error types for the term deposit calculator
//!
//! This module defines every error the calculator and its wrappers can surface.
//! Messages are written for direct display on the command line.
//!
//! # Error Categories
//!
//! - **Validation Errors**: non-positive inputs, unknown payment frequency
//! - **Collection Errors**: incomplete interactive input, prompt failures
//! - **File I/O Errors**: file not found, permission denied, etc.
//! - **CSV Parsing Errors**: malformed batch records

use thiserror::Error;

/// Main error type for the deposit calculator
///
/// The two validation variants are the only errors the balance calculator
/// itself produces; the remaining variants belong to the input collectors and
/// the batch pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DepositError {
    /// Start amount, interest rate or investment term is not positive
    ///
    /// The three fields are validated together, so the error does not say
    /// which one was rejected.
    #[error("Invalid input: All values must be positive.")]
    InvalidInput,

    /// Interest payment frequency is not one of the recognized values
    #[error("Invalid interest payment frequency.")]
    InvalidFrequency {
        /// The value that failed to parse
        value: String,
    },

    /// The interactive collector finished without a usable term
    #[error("Missing input values. Please provide valid inputs for all fields.")]
    MissingInput,

    /// The terminal prompt failed (closed stdin, not a tty, etc.)
    #[error("Prompt error: {message}")]
    Prompt {
        /// Description of the prompt failure
        message: String,
    },

    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents batch processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// Recoverable inside the batch readers: the malformed record is skipped
    /// and processing continues with the next record.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },
}

impl From<std::io::Error> for DepositError {
    fn from(error: std::io::Error) -> Self {
        DepositError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for DepositError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        DepositError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<csv_async::Error> for DepositError {
    fn from(error: csv_async::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        DepositError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl DepositError {
    /// Create an InvalidFrequency error
    pub fn invalid_frequency(value: &str) -> Self {
        DepositError::InvalidFrequency {
            value: value.to_string(),
        }
    }

    /// Create a Prompt error
    pub fn prompt(message: impl ToString) -> Self {
        DepositError::Prompt {
            message: message.to_string(),
        }
    }

    /// Create a FileNotFound error
    pub fn file_not_found(path: &std::path::Path) -> Self {
        DepositError::FileNotFound {
            path: path.display().to_string(),
        }
    }
}
