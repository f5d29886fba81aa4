//! Currency amount grammar.
//!
//! A [`CurrencyFormat`] describes one currency's written amounts: the symbol
//! that prefixes them, the grouping and decimal separators, and how strictly
//! text after the amount is treated. It stands in for a locale-aware currency
//! formatter so parsing behaves the same everywhere.

use crate::error::{ParseFailure, Result, SummationError};
use crate::tokenizer::check_symbol;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// How text following a well-formed amount is handled.
///
/// Whitespace (including line breaks) after an amount is always accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingText {
    /// Parsing stops at the first character that cannot continue the amount,
    /// so `"$12.34 lunch"` reads as 12.34.
    #[default]
    Ignore,

    /// Any other trailing character fails the fragment.
    Reject,
}

/// The grammar used to read a single currency amount.
///
/// An accepted candidate has the shape
///
/// ```text
/// symbol [ws*] [sign] integer [decimal_separator fraction] [trailing]
/// ```
///
/// where `integer` is either plain digits or a leading group of
/// `1..=grouping_size` digits followed by separator-delimited groups of
/// exactly `grouping_size` digits.
///
/// # Examples
///
/// ```
/// use charge_summation::CurrencyFormat;
///
/// let format = CurrencyFormat::default();
/// assert_eq!(format.parse_amount("$1,002.50"), Ok(1002.5));
/// assert!(format.parse_amount("$12,34").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// Marker that prefixes every amount.
    pub symbol: String,

    /// Separator between digit groups of the integer part, if any.
    pub grouping_separator: Option<char>,

    /// Number of digits in every group after the first.
    pub grouping_size: usize,

    /// Separator between the integer and fractional parts.
    pub decimal_separator: char,

    /// Accept a leading `-` or `+` after the symbol.
    pub allow_negative: bool,

    /// Treatment of text after the amount.
    pub trailing: TrailingText,
}

impl CurrencyFormat {
    /// Symbol of the default format.
    pub const DEFAULT_SYMBOL: &'static str = "$";

    /// US dollar amounts: `$1,234.56`.
    pub fn us_dollar() -> Self {
        CurrencyFormat {
            symbol: Self::DEFAULT_SYMBOL.to_string(),
            grouping_separator: Some(','),
            grouping_size: 3,
            decimal_separator: '.',
            allow_negative: true,
            trailing: TrailingText::Ignore,
        }
    }

    /// The default grammar with a different symbol.
    pub fn with_symbol(symbol: impl Into<String>) -> Self {
        CurrencyFormat {
            symbol: symbol.into(),
            ..Self::us_dollar()
        }
    }

    /// Sets the grouping separator and group size.
    pub fn grouping(mut self, separator: Option<char>, size: usize) -> Self {
        self.grouping_separator = separator;
        self.grouping_size = size;
        self
    }

    /// Sets the decimal separator.
    pub fn decimal_separator(mut self, separator: char) -> Self {
        self.decimal_separator = separator;
        self
    }

    /// Sets whether signed amounts are accepted.
    pub fn allow_negative(mut self, allow: bool) -> Self {
        self.allow_negative = allow;
        self
    }

    /// Sets the treatment of trailing text.
    pub fn trailing(mut self, trailing: TrailingText) -> Self {
        self.trailing = trailing;
        self
    }

    /// Checks that the format can be parsed unambiguously.
    pub fn validate(&self) -> Result<()> {
        check_symbol(&self.symbol)?;

        if self.grouping_separator.is_some() && self.grouping_size == 0 {
            return Err(SummationError::InvalidFormat(
                "grouping size must be greater than 0".into(),
            ));
        }

        if self.grouping_separator == Some(self.decimal_separator) {
            return Err(SummationError::InvalidFormat(format!(
                "grouping and decimal separators are both {:?}",
                self.decimal_separator
            )));
        }

        let separators = std::iter::once(self.decimal_separator).chain(self.grouping_separator);
        for separator in separators {
            if separator.is_ascii_digit()
                || separator.is_whitespace()
                || separator == '-'
                || separator == '+'
            {
                return Err(SummationError::InvalidFormat(format!(
                    "{:?} cannot be used as a separator",
                    separator
                )));
            }
        }

        Ok(())
    }

    /// Parses `candidate`, which must start with the currency symbol.
    ///
    /// Offsets reported in [`ParseFailure`] are byte offsets into `candidate`.
    pub fn parse_amount(&self, candidate: &str) -> std::result::Result<f64, ParseFailure> {
        let rest = candidate
            .strip_prefix(self.symbol.as_str())
            .ok_or(ParseFailure::MissingSymbol)?;

        if rest.trim().is_empty() {
            return Err(ParseFailure::Empty);
        }

        let base = candidate.len() - rest.len();
        let chars: Vec<(usize, char)> = rest.char_indices().map(|(i, c)| (base + i, c)).collect();
        let mut pos = 0;

        while chars.get(pos).is_some_and(|&(_, c)| c.is_whitespace()) {
            pos += 1;
        }

        let mut negative = false;
        if let Some(&(_, c)) = chars.get(pos) {
            if c == '-' || c == '+' {
                if !self.allow_negative {
                    return Err(ParseFailure::SignNotAllowed);
                }
                negative = c == '-';
                pos += 1;
            }
        }

        let (integer, next) = self.scan_integer(&chars, pos)?;
        pos = next;

        let mut fraction = String::new();
        if chars.get(pos).is_some_and(|&(_, c)| c == self.decimal_separator) {
            pos += 1;
            while let Some(&(_, c)) = chars.get(pos) {
                if !c.is_ascii_digit() {
                    break;
                }
                fraction.push(c);
                pos += 1;
            }
        }

        if integer.is_empty() && fraction.is_empty() {
            return match chars.get(pos) {
                Some(&(offset, character)) if !character.is_whitespace() => {
                    Err(ParseFailure::InvalidCharacter { character, offset })
                }
                _ => Err(ParseFailure::NoDigits),
            };
        }

        if self.trailing == TrailingText::Reject {
            if let Some(&(offset, character)) =
                chars[pos..].iter().find(|(_, c)| !c.is_whitespace())
            {
                return Err(ParseFailure::InvalidCharacter { character, offset });
            }
        }

        let mut literal = String::with_capacity(integer.len() + fraction.len() + 3);
        if negative {
            literal.push('-');
        }
        if integer.is_empty() {
            literal.push('0');
        } else {
            literal.push_str(&integer);
        }
        if !fraction.is_empty() {
            literal.push('.');
            literal.push_str(&fraction);
        }

        // Amounts beyond the decimal range still fit an f64.
        let value = match Decimal::from_str(&literal).ok().and_then(|d| d.to_f64()) {
            Some(value) => value,
            None => f64::from_str(&literal).map_err(|_| ParseFailure::OutOfRange)?,
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(ParseFailure::OutOfRange)
        }
    }

    /// Collects integer digits starting at `pos`, enforcing group placement.
    ///
    /// Returns the bare digits and the position of the first unconsumed character.
    fn scan_integer(
        &self,
        chars: &[(usize, char)],
        mut pos: usize,
    ) -> std::result::Result<(String, usize), ParseFailure> {
        let mut digits = String::new();
        let mut group_len = 0;
        let mut last_separator: Option<usize> = None;

        while let Some(&(offset, c)) = chars.get(pos) {
            if c.is_ascii_digit() {
                digits.push(c);
                group_len += 1;
            } else if Some(c) == self.grouping_separator {
                let well_placed = match last_separator {
                    None => (1..=self.grouping_size).contains(&group_len),
                    Some(_) => group_len == self.grouping_size,
                };
                if !well_placed {
                    return Err(ParseFailure::MisplacedGrouping { offset });
                }
                last_separator = Some(offset);
                group_len = 0;
            } else {
                break;
            }
            pos += 1;
        }

        if let Some(offset) = last_separator {
            if group_len != self.grouping_size {
                return Err(ParseFailure::MisplacedGrouping { offset });
            }
        }

        Ok((digits, pos))
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::us_dollar()
    }
}
