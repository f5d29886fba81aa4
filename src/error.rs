//! Error types for charge summation.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, SummationError>;

/// Errors that can occur outside of per-fragment parsing.
#[derive(Error, Debug)]
pub enum SummationError {
    /// Failed to write output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to open or read a named input file
    #[error("An I/O error occurred while reading '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The input file does not exist
    #[error("The indicated file '{}' was not found.", .path.display())]
    FileNotFound { path: PathBuf },

    /// CSV report writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Currency format failed validation
    #[error("Invalid currency format: {0}")]
    InvalidFormat(String),

    /// Delimiter pattern failed to compile
    #[error("Invalid delimiter pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Why a single fragment could not be parsed as a currency amount.
///
/// These never escape [`ChargeSummation::parse`](crate::ChargeSummation::parse);
/// they are recorded against the fragment position and processing continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseFailure {
    /// Nothing follows the currency symbol
    #[error("empty amount")]
    Empty,

    /// The candidate does not start with the currency symbol
    #[error("amount does not start with the currency symbol")]
    MissingSymbol,

    /// A character that cannot appear at this point of an amount
    #[error("unexpected character {character:?} at offset {offset}")]
    InvalidCharacter { character: char, offset: usize },

    /// A grouping separator that does not split digits at the configured interval
    #[error("misplaced grouping separator at offset {offset}")]
    MisplacedGrouping { offset: usize },

    /// Sign and separators present but no digits
    #[error("amount contains no digits")]
    NoDigits,

    /// A sign was found while the format does not accept one
    #[error("signed amounts are not accepted")]
    SignNotAllowed,

    /// The amount does not fit the decimal range
    #[error("amount out of range")]
    OutOfRange,
}
