//! Income and expenses per calendar month.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::{Month, UtcOffset};

use crate::transaction::Transaction;

use super::{
    summary::Totals,
    window::{local_date, month_abbrev},
};

/// The most months kept in the monthly trend.
pub const MONTHLY_TREND_LENGTH: usize = 6;

/// Income and expenses in one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// The month as a label, e.g. "Oct 2026".
    pub month: String,
    /// Total income in the month.
    pub income: f64,
    /// Total expenses in the month.
    pub expenses: f64,
}

/// Aggregates transaction amounts by month.
///
/// Months are keyed by `(year, month)` so they sort chronologically, and only
/// formatted as labels once sorted. Only the [MONTHLY_TREND_LENGTH] most
/// recent months with transactions are returned, oldest first. Transactions
/// whose local date cannot be represented are left out.
pub(super) fn monthly_trend(transactions: &[Transaction], offset: UtcOffset) -> Vec<MonthlyTotal> {
    let mut totals: BTreeMap<(i32, u8), Totals> = BTreeMap::new();

    for transaction in transactions {
        let Some(date) = local_date(transaction.date, offset) else {
            tracing::warn!(
                "Transaction {} dated {} is out of range at UTC offset {offset}, skipping it",
                transaction.id,
                transaction.date
            );
            continue;
        };

        totals
            .entry((date.year(), u8::from(date.month())))
            .or_default()
            .add(transaction);
    }

    let skip = totals.len().saturating_sub(MONTHLY_TREND_LENGTH);

    totals
        .into_iter()
        .skip(skip)
        .map(|((year, month), totals)| MonthlyTotal {
            month: format_month_label(year, month),
            income: totals.income,
            expenses: totals.expenses,
        })
        .collect()
}

fn format_month_label(year: i32, month: u8) -> String {
    match Month::try_from(month) {
        Ok(month) => format!("{} {year}", month_abbrev(month)),
        Err(_) => format!("{month:02}/{year}"),
    }
}
