//! Splitting text into currency fragments.

use crate::error::{Result, SummationError};
use regex::Regex;

/// Characters escaped before a symbol is used as a delimiter pattern.
pub const SPECIAL_CHARACTERS: [char; 12] = [
    '\\', '^', '$', '.', '|', '?', '*', '+', '(', ')', '[', ']',
];

/// Characters a symbol may not contain. They are not escaped, and a regex
/// would read them as a repetition.
pub const UNSUPPORTED_CHARACTERS: [char; 2] = ['{', '}'];

/// Checks that `symbol` can be turned into a literal delimiter.
pub fn check_symbol(symbol: &str) -> Result<()> {
    if symbol.is_empty() {
        return Err(SummationError::InvalidFormat(
            "currency symbol must not be empty".into(),
        ));
    }

    if let Some(c) = symbol.chars().find(|c| UNSUPPORTED_CHARACTERS.contains(c)) {
        return Err(SummationError::InvalidFormat(format!(
            "currency symbol {:?} contains unsupported character {:?}",
            symbol, c
        )));
    }

    Ok(())
}

/// Prefixes every special character in `symbol` with a backslash.
///
/// ```
/// use charge_summation::tokenizer::escape_for_delimiter;
///
/// assert_eq!(escape_for_delimiter("$"), r"\$");
/// assert_eq!(escape_for_delimiter("kr."), r"kr\.");
/// assert_eq!(escape_for_delimiter("€"), "€");
/// ```
pub fn escape_for_delimiter(symbol: &str) -> String {
    let mut escaped = String::with_capacity(symbol.len() * 2);
    for character in symbol.chars() {
        if SPECIAL_CHARACTERS.contains(&character) {
            escaped.push('\\');
        }
        escaped.push(character);
    }
    escaped
}

/// A compiled delimiter matching only literal occurrences of a currency symbol.
#[derive(Debug, Clone)]
pub struct DelimiterPattern {
    symbol: String,
    regex: Regex,
}

impl DelimiterPattern {
    /// Escapes and compiles `symbol`.
    pub fn new(symbol: &str) -> Result<Self> {
        check_symbol(symbol)?;

        let regex = Regex::new(&escape_for_delimiter(symbol))?;
        Ok(DelimiterPattern {
            symbol: symbol.to_string(),
            regex,
        })
    }

    /// The unescaped symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The escaped pattern text.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Splits `text` at every non-overlapping occurrence of the symbol.
    ///
    /// Fragment 0 is whatever precedes the first symbol. Empty fragments,
    /// trailing ones included, are kept, so `n` occurrences always yield
    /// `n + 1` fragments.
    pub fn split<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex.split(text).collect()
    }
}
