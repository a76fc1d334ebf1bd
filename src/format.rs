//! Balance formatting.
//!
//! Converts a balance prop (number or decimal string) into the display
//! string shown in the summary control: rounded to cents, grouped with the
//! locale's separators, followed by a non-breaking space and the currency.
//!
//! Every function here is total. Input that does not parse as a number
//! renders as `NaN`, blank input renders as zero.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{CURRENCY_SEPARATOR, DEFAULT_BALANCE};

// ============================================================================
// Balance
// ============================================================================

/// A balance as supplied by the host: either a number or a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Balance {
    Number(f64),
    Text(String),
}

impl Default for Balance {
    fn default() -> Self {
        Self::Text(DEFAULT_BALANCE.to_string())
    }
}

impl From<f64> for Balance {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for Balance {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Balance {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl Balance {
    /// Numeric value of the balance.
    ///
    /// Strings follow the host's `Number()` conversion: surrounding
    /// whitespace is ignored, blank is `0`, `Infinity` is accepted, `0x`/`0o`/`0b`
    /// prefixes select a radix, anything else that is not a plain decimal
    /// literal is `NaN`.
    #[must_use]
    pub fn to_number(&self) -> f64 {
        match self {
            Self::Number(n) => *n,
            Self::Text(s) => parse_number(s),
        }
    }
}

fn parse_number(raw: &str) -> f64 {
    let s = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return 0.0;
    }

    match s {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0_f64, |acc, c| {
                c.to_digit(radix)
                    .map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN);
    }

    // Rust also accepts "inf"/"nan"; restrict to decimal literal characters first.
    if !s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return f64::NAN;
    }
    s.parse::<f64>().unwrap_or(f64::NAN)
}

// ============================================================================
// Locale
// ============================================================================

/// Digit grouping and decimal conventions for the formatted balance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NumberLocale {
    /// `1,234.50`
    #[default]
    English,
    /// `1.234,50`
    German,
    /// `1 234,50` (narrow no-break space)
    French,
    /// `1’234.50`
    Swiss,
}

impl NumberLocale {
    /// Separator inserted between groups of three integer digits.
    #[must_use]
    pub const fn group_separator(self) -> &'static str {
        match self {
            Self::English => ",",
            Self::German => ".",
            Self::French => "\u{202f}",
            Self::Swiss => "’",
        }
    }

    /// Separator between the integer and fraction digits.
    #[must_use]
    pub const fn decimal_separator(self) -> char {
        match self {
            Self::English | Self::Swiss => '.',
            Self::German | Self::French => ',',
        }
    }

    /// Resolve a BCP-47 (`de-DE`) or POSIX (`fr_FR.UTF-8`) tag.
    ///
    /// Unknown languages fall back to [`NumberLocale::English`].
    #[must_use]
    pub fn from_tag(tag: &str) -> Self {
        let base = tag.split(['.', '@']).next().unwrap_or_default();
        let normalized = base.replace('_', "-").to_ascii_lowercase();
        let mut parts = normalized.split('-');
        let language = parts.next().unwrap_or_default();
        let region = parts.next().unwrap_or_default();

        match (language, region) {
            ("de" | "it", "ch" | "li") => Self::Swiss,
            (
                "de" | "nl" | "it" | "es" | "pt" | "da" | "id" | "tr" | "el" | "ro" | "hr"
                | "sl" | "sr",
                _,
            ) => Self::German,
            (
                "fr" | "ru" | "pl" | "cs" | "sk" | "sv" | "nb" | "no" | "fi" | "uk" | "hu"
                | "bg" | "lt" | "lv" | "et",
                _,
            ) => Self::French,
            _ => Self::English,
        }
    }

    /// Resolve the locale from `LC_ALL`, `LC_NUMERIC` and `LANG`, in that order.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`NumberLocale::from_env`] with an injectable variable lookup.
    #[must_use]
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        ["LC_ALL", "LC_NUMERIC", "LANG"]
            .into_iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .map_or(Self::English, |value| Self::from_tag(value.trim()))
    }
}

// ============================================================================
// Formatting
// ============================================================================

/// Round to two decimals, halves toward positive infinity.
///
/// `1.005` becomes `1.00` because `1.005 * 100` is `100.49999999999999`
/// in binary floating point. Non-finite values pass through unchanged.
#[must_use]
pub fn round_to_cents(value: f64) -> f64 {
    round_half_up(value * 100.0) / 100.0
}

fn round_half_up(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    if x - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Format a number with exactly two fraction digits and grouped integer digits.
///
/// `NaN` renders as `NaN`, infinities as `∞`/`-∞`, and values that print as
/// zero never carry a minus sign (unlike `Intl.NumberFormat`, which prints
/// `-0.00`).
#[must_use]
pub fn format_amount(value: f64, locale: NumberLocale) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let negative = value < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));

    let grouped = group_digits(int_part, locale.group_separator());
    let sign = if negative { "-" } else { "" };
    format!(
        "{sign}{grouped}{}{frac_part}",
        locale.decimal_separator()
    )
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + (len / 3) * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push_str(separator);
        }
        result.push(c);
    }
    result
}

/// Format a balance for display: `1,234.50\u{a0}EUR`.
///
/// # Examples
///
/// ```
/// use balance_dropdown::format::{Balance, NumberLocale, format_balance};
///
/// let text = format_balance(&Balance::from(1234.5), "EUR", NumberLocale::English);
/// assert_eq!(text, "1,234.50\u{a0}EUR");
/// ```
#[must_use]
pub fn format_balance(balance: &Balance, currency: &str, locale: NumberLocale) -> String {
    let amount = format_amount(round_to_cents(balance.to_number()), locale);
    format!("{amount}{CURRENCY_SEPARATOR}{currency}")
}

// ============================================================================
// Tests
// ============================================================================
