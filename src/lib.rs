//! # Charge Summation
//!
//! Sums currency amounts found in free text and reports which amounts could
//! not be parsed.
//!
//! ## Design Principles
//!
//! - **Symbol-delimited fragments**: text is split at every literal occurrence
//!   of the currency symbol; each fragment after the first is one amount
//! - **Partial failure**: a malformed fragment is recorded by position and
//!   never stops the remaining fragments from being summed
//! - **Explicit grammar**: amounts follow a configured [`CurrencyFormat`]
//!   instead of the platform locale
//! - **Running sum**: totals accumulate across calls until reinitialized
//!
//! ## Example
//!
//! ```
//! use charge_summation::ChargeSummation;
//!
//! let mut summation = ChargeSummation::new();
//! summation.parse("$1.00$2.50");
//! summation.parse("$oops$1.50");
//! assert_eq!(summation.sum(), 5.0);
//! assert_eq!(summation.errors(), vec![1]);
//! ```

pub mod error;
pub mod format;
pub mod reader;
pub mod report;
pub mod summation;
pub mod tokenizer;

pub use error::{ParseFailure, Result, SummationError};
pub use format::{CurrencyFormat, TrailingText};
pub use reader::ChargeLineReader;
pub use report::ChargeLineResults;
pub use summation::{ChargeSummation, FragmentFailure};
pub use tokenizer::{escape_for_delimiter, DelimiterPattern};
