//! Activity over the trailing week, one entry per day.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use time::{Date, UtcOffset};

use crate::transaction::Transaction;

use super::window::{DateWindow, local_date, weekday_abbrev};

/// The number of days in the daily pattern.
pub const DAILY_PATTERN_LENGTH: u8 = 7;

/// The transactions on one day of the trailing week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyTotal {
    /// The weekday as a label, e.g. "Mon".
    pub day: String,
    /// The sum of all amounts on the day, income and expenses alike.
    pub amount: f64,
    /// The number of transactions on the day.
    pub count: usize,
}

/// Sum the transactions on each of the last [DAILY_PATTERN_LENGTH] days,
/// today inclusive and oldest first.
///
/// Days without transactions are included with zero values. Days are keyed by
/// date rather than by label, so the result always has one entry per day.
pub(super) fn daily_pattern(
    transactions: &[Transaction],
    today: Date,
    offset: UtcOffset,
) -> Vec<DailyTotal> {
    let window = DateWindow::trailing_days(today, DAILY_PATTERN_LENGTH);
    let mut totals: HashMap<Date, (f64, usize)> = HashMap::new();

    for transaction in transactions {
        let Some(date) = local_date(transaction.date, offset) else {
            continue;
        };

        if window.contains(date) {
            let (amount, count) = totals.entry(date).or_insert((0.0, 0));
            *amount += transaction.amount;
            *count += 1;
        }
    }

    window
        .dates()
        .map(|date| {
            let (amount, count) = totals.get(&date).copied().unwrap_or((0.0, 0));

            DailyTotal {
                day: weekday_abbrev(date.weekday()).to_owned(),
                amount,
                count,
            }
        })
        .collect()
}
