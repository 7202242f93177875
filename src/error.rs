//! Error types for the report generator.

use thiserror::Error;

/// Result type alias for report operations
pub type Result<T> = std::result::Result<T, ReportError>;

/// Errors that can occur while building or writing a report.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Failed to write the report
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV rendering error
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    /// Record violates the ledger contract
    #[error("Invalid transaction {id}: {message}")]
    InvalidRecord { id: u32, message: String },

    /// Two records share an ID
    #[error("Duplicate transaction ID {id}")]
    DuplicateId { id: u32 },

    /// The binary takes no arguments
    #[error("Unexpected argument '{0}'. Usage: transaction-report")]
    UnexpectedArgument(String),
}
