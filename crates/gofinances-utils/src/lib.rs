//! Utility functions and helpers
//!
//! Formatting is pure: every function receives the [`Locale`] it renders
//! with, nothing reads process-wide locale state.

pub mod currency;
pub mod date;

use serde::{Deserialize, Serialize};

pub use currency::{format_currency, signed_currency_label};
pub use date::{format_local_date, DateValue, INVALID_DATE};

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in
    Income,
    /// Money going out
    Outcome,
}

impl std::str::FromStr for TransactionType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionType::Income),
            "outcome" => Ok(TransactionType::Outcome),
            _ => Err(format!("Invalid transaction type: {}", s)),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Income => write!(f, "income"),
            TransactionType::Outcome => write!(f, "outcome"),
        }
    }
}

/// Currency symbol position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Before,
    After,
}

impl Default for SymbolPosition {
    fn default() -> Self {
        SymbolPosition::Before
    }
}

/// Number and date conventions used when rendering values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locale {
    /// Currency symbol, e.g. `R$`
    pub currency_symbol: String,
    /// Separator between groups of three integer digits
    pub thousands_separator: String,
    /// Separator between integer and fractional digits
    pub decimal_separator: String,
    /// Fractional digits to show
    pub decimal_places: u32,
    /// Where the symbol goes relative to the number
    pub symbol_position: SymbolPosition,
    /// Text placed between symbol and number
    pub symbol_spacing: String,
    /// Offset from UTC, in minutes, used when printing calendar dates
    pub utc_offset_minutes: i32,
}

impl Locale {
    /// Brazilian Portuguese with Brazilian reais (`R$ 1.234,56`, `24/05/2020`)
    pub fn pt_br() -> Self {
        Self {
            currency_symbol: "R$".to_string(),
            thousands_separator: ".".to_string(),
            decimal_separator: ",".to_string(),
            decimal_places: 2,
            symbol_position: SymbolPosition::Before,
            symbol_spacing: "\u{a0}".to_string(),
            utc_offset_minutes: 0,
        }
    }

    /// Same locale, printing dates at another UTC offset
    pub fn with_utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::pt_br()
    }
}

/// Insert `separator` between every group of three digits, counting from the right
pub fn group_digits(digits: &str, separator: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 * separator.len());
    let len = digits.chars().count();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }
    result
}

/// Escape text for interpolation into HTML content or attribute values
pub fn escape_html(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
