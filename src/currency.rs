//! Currency codes and currency-aware formatting of amounts.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::Error;

/// A validated ISO 4217 style currency code, e.g. "USD" or "NZD".
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CurrencyCode(String);

impl CurrencyCode {
    /// The currency used when nothing else is known.
    pub const DEFAULT: &str = "USD";

    /// Create a currency code.
    ///
    /// Lower case input is accepted and normalised to upper case.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidCurrency] if `code` is not
    /// made of exactly three ASCII letters.
    pub fn new(code: &str) -> Result<Self, Error> {
        let code = code.trim();

        if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(code.to_ascii_uppercase()))
        } else {
            Err(Error::InvalidCurrency(code.to_owned()))
        }
    }

    /// The symbol placed before formatted amounts in this currency.
    pub fn symbol(&self) -> String {
        match self.0.as_str() {
            "USD" => "$".to_owned(),
            "EUR" => "€".to_owned(),
            "GBP" => "£".to_owned(),
            "JPY" => "¥".to_owned(),
            "CNY" => "CN¥".to_owned(),
            "INR" => "₹".to_owned(),
            "KRW" => "₩".to_owned(),
            "AUD" => "A$".to_owned(),
            "CAD" => "CA$".to_owned(),
            "NZD" => "NZ$".to_owned(),
            "HKD" => "HK$".to_owned(),
            "MXN" => "MX$".to_owned(),
            "BRL" => "R$".to_owned(),
            other => format!("{other} "),
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl AsRef<str> for CurrencyCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for CurrencyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CurrencyCode::new(s)
    }
}

impl TryFrom<String> for CurrencyCode {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        CurrencyCode::new(&value)
    }
}

impl From<CurrencyCode> for String {
    fn from(value: CurrencyCode) -> Self {
        value.0
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Format `amount` as money in `currency` with thousands separators and two
/// decimal places, e.g. "$1,234.50" or "-€12.30".
///
/// Amounts are rounded to the nearest cent first, so anything that rounds to
/// zero is shown as "$0.00" without a sign.
pub fn format_currency(amount: f64, currency: &CurrencyCode) -> String {
    let symbol = currency.symbol();

    if !amount.is_finite() {
        return format!("{symbol}0.00");
    }

    // Saturates for amounts beyond u128, which no balance will ever hold.
    let cents = (amount.abs() * 100.0).round() as u128;

    if cents == 0 {
        return format!("{symbol}0.00");
    }

    let sign = if amount < 0.0 { "-" } else { "" };

    format!(
        "{sign}{symbol}{}.{:02}",
        group_thousands(cents / 100),
        cents % 100
    )
}

/// Write `number` with a comma between each group of three digits.
fn group_thousands(number: u128) -> String {
    let digits = number.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
