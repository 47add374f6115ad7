//! Reads transactions from CSV files.
//!
//! The expected header is:
//!
//! ```text
//! id,date,type,amount,description,category,balance,currency
//! ```
//!
//! Only `date`, `type` and `amount` are required. Dates are either RFC 3339
//! timestamps (`2025-01-15T09:30:00+13:00`) or plain dates (`2025-01-15`),
//! which are taken as midnight in the local timezone.

use std::io::Read;

use serde::Deserialize;
use time::{
    Date, OffsetDateTime, Time, UtcOffset,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

use crate::{
    Error,
    category::Category,
    currency::CurrencyCode,
    database_id::{BalanceId, TransactionId},
    transaction::{BalanceRef, Transaction, TransactionType},
};

const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(default)]
    id: Option<TransactionId>,
    date: String,
    #[serde(rename = "type")]
    kind: String,
    amount: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    balance: Option<BalanceId>,
    #[serde(default)]
    currency: Option<String>,
}

/// Parse the transactions in the CSV document read from `reader`.
///
/// Plain dates are interpreted as midnight at `local_offset`. Rows without an
/// `id` are numbered by their position, starting at one.
///
/// # Errors
///
/// Returns an [Error::InvalidCSV] naming the offending line if a row cannot be
/// read, has an invalid date, type, amount or currency code.
pub fn parse_transactions_csv<R: Read>(
    reader: R,
    local_offset: UtcOffset,
) -> Result<Vec<Transaction>, Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut transactions = Vec::new();

    for (index, record) in reader.deserialize::<CsvRecord>().enumerate() {
        // Line 1 is the header.
        let line_number = index + 2;
        let record = record.map_err(|error| {
            Error::InvalidCSV(format!("could not read line {line_number}: {error}"))
        })?;

        let transaction = parse_record(record, index, local_offset)
            .map_err(|message| Error::InvalidCSV(format!("line {line_number}: {message}")))?;
        transactions.push(transaction);
    }

    tracing::debug!("Parsed {} transactions from CSV", transactions.len());

    Ok(transactions)
}

fn parse_record(
    record: CsvRecord,
    index: usize,
    local_offset: UtcOffset,
) -> Result<Transaction, String> {
    let date = parse_date(&record.date, local_offset)?;
    let kind = parse_kind(&record.kind)?;
    let amount = parse_amount(&record.amount)?;

    let currency = match record.currency.as_deref().filter(|code| !code.is_empty()) {
        Some(code) => CurrencyCode::new(code).map_err(|error| error.to_string())?,
        None => CurrencyCode::default(),
    };
    let balance = BalanceRef {
        id: record.balance.unwrap_or(BalanceRef::default().id),
        name: String::new(),
        currency,
    };

    let mut builder = Transaction::build(amount, kind, date)
        .id(record.id.unwrap_or(index as TransactionId + 1))
        .category(
            record
                .category
                .as_deref()
                .filter(|name| !name.is_empty())
                .map(Category::new),
        )
        .balance(balance);

    if let Some(description) = record.description.as_deref().filter(|d| !d.is_empty()) {
        builder = builder.description(description);
    }

    Ok(builder.finalise())
}

fn parse_date(text: &str, local_offset: UtcOffset) -> Result<OffsetDateTime, String> {
    if let Ok(date_time) = OffsetDateTime::parse(text, &Rfc3339) {
        return Ok(date_time);
    }

    Date::parse(text, DATE_FORMAT)
        .map(|date| date.with_time(Time::MIDNIGHT).assume_offset(local_offset))
        .map_err(|_| {
            format!("invalid date \"{text}\", expected YYYY-MM-DD or an RFC 3339 timestamp")
        })
}

fn parse_kind(text: &str) -> Result<TransactionType, String> {
    match text.to_ascii_lowercase().as_str() {
        "income" => Ok(TransactionType::Income),
        "expense" => Ok(TransactionType::Expense),
        _ => Err(format!(
            "invalid type \"{text}\", expected \"income\" or \"expense\""
        )),
    }
}

fn parse_amount(text: &str) -> Result<f64, String> {
    let amount: f64 = text
        .replace(',', "")
        .parse()
        .map_err(|_| format!("invalid amount \"{text}\""))?;

    if !amount.is_finite() || amount < 0.0 {
        return Err(format!(
            "invalid amount \"{text}\", amounts must be non-negative numbers"
        ));
    }

    Ok(amount)
}
