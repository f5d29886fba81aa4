//! Accumulating charge summation.
//!
//! Splits text at the currency symbol, parses every fragment after the first,
//! and adds the successful amounts to a running sum that persists across
//! calls. Fragments that fail are recorded by position and skipped.

use crate::error::{ParseFailure, Result};
use crate::format::CurrencyFormat;
use crate::tokenizer::DelimiterPattern;
use log::{debug, warn};

/// A fragment that could not be parsed during the most recent [`ChargeSummation::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FragmentFailure {
    /// 1-based index among the split fragments.
    pub position: usize,

    /// The fragment text, without the currency symbol.
    pub fragment: String,

    /// Why the fragment was rejected.
    pub reason: ParseFailure,
}

/// Running sum of currency amounts found in text.
///
/// # Error positions
///
/// Positions refer to fragments, not characters: in `"$1.00$abc$3.00"` the
/// split yields `["", "1.00", "abc", "3.00"]` and the failure is reported at
/// position 2. Fragment 0, the text before the first symbol, is never parsed.
///
/// # Examples
///
/// ```
/// use charge_summation::ChargeSummation;
///
/// let mut summation = ChargeSummation::new();
/// summation.parse("$1.00$abc$3.00");
/// assert_eq!(summation.sum(), 4.0);
/// assert_eq!(summation.errors(), vec![2]);
/// ```
#[derive(Debug, Clone)]
pub struct ChargeSummation {
    format: CurrencyFormat,
    pattern: DelimiterPattern,

    /// Cumulative total since construction or the last reinitialization.
    sum: f64,

    /// Failures from the most recent parse, in fragment order.
    failures: Vec<FragmentFailure>,
}

impl ChargeSummation {
    /// Sum used when none is supplied.
    pub const INITIAL_SUM: f64 = 0.0;

    /// Creates a summation over US dollar amounts starting at zero.
    pub fn new() -> Self {
        Self::with_initial_sum(Self::INITIAL_SUM)
    }

    /// Creates a summation over US dollar amounts starting at `initial_sum`.
    pub fn with_initial_sum(initial_sum: f64) -> Self {
        // Safety: the default format always validates and its escaped symbol compiles
        Self::with_format(CurrencyFormat::default(), initial_sum)
            .expect("default currency format is valid")
    }

    /// Creates a summation with an explicit currency format.
    pub fn with_format(format: CurrencyFormat, initial_sum: f64) -> Result<Self> {
        format.validate()?;
        let pattern = DelimiterPattern::new(&format.symbol)?;

        Ok(ChargeSummation {
            format,
            pattern,
            sum: initial_sum,
            failures: Vec::new(),
        })
    }

    /// Parses `text` for currency amounts and adds them to the sum.
    ///
    /// Errors from any previous call are discarded first. A fragment that
    /// fails is recorded and leaves the sum untouched; the remaining
    /// fragments are still processed.
    pub fn parse(&mut self, text: &str) {
        self.clear_errors();

        let fragments = self.pattern.split(text);
        if let Some(leading) = fragments.first() {
            if !leading.trim().is_empty() {
                debug!(
                    "Discarding {} bytes before the first '{}'",
                    leading.len(),
                    self.format.symbol
                );
            }
        }

        let mut candidate = String::new();
        for (position, fragment) in fragments.iter().enumerate().skip(1) {
            candidate.clear();
            candidate.push_str(&self.format.symbol);
            candidate.push_str(fragment);

            match self.format.parse_amount(&candidate) {
                Ok(value) => {
                    self.sum += value;
                    debug!("Fragment {}: added {}", position, value);
                }
                Err(reason) => {
                    warn!("Fragment {}: {:?} rejected: {}", position, fragment, reason);
                    self.failures.push(FragmentFailure {
                        position,
                        fragment: fragment.to_string(),
                        reason,
                    });
                }
            }
        }
    }

    /// Returns the current sum.
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Returns the positions that failed during the most recent parse.
    pub fn errors(&self) -> Vec<usize> {
        self.failures.iter().map(|f| f.position).collect()
    }

    /// Returns the failures of the most recent parse with their reasons.
    pub fn failures(&self) -> &[FragmentFailure] {
        &self.failures
    }

    /// Clears the recorded failures.
    pub fn clear_errors(&mut self) {
        self.failures.clear();
    }

    /// Replaces the sum, discarding everything accumulated so far.
    pub fn reinitialize(&mut self, sum: f64) {
        self.sum = sum;
    }

    /// Reinitializes the sum to [`Self::INITIAL_SUM`].
    pub fn reset(&mut self) {
        self.reinitialize(Self::INITIAL_SUM);
    }

    /// The currency symbol amounts are expected to start with.
    pub fn symbol(&self) -> &str {
        self.pattern.symbol()
    }

    /// The delimiter used to split input.
    pub fn pattern(&self) -> &DelimiterPattern {
        &self.pattern
    }

    /// The amount grammar in use.
    pub fn format(&self) -> &CurrencyFormat {
        &self.format
    }
}

impl Default for ChargeSummation {
    fn default() -> Self {
        Self::new()
    }
}
