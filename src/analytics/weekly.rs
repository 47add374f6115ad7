//! Compares spending this week with the week before.

use serde::{Deserialize, Serialize};
use time::{Date, UtcOffset};

use crate::transaction::Transaction;

use super::window::{DateWindow, local_date};

/// Expenses in the current and previous Sunday to Saturday weeks.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeeklyComparison {
    /// Expenses in the current week.
    pub this_week: f64,
    /// Expenses in the previous week.
    pub last_week: f64,
    /// `this_week - last_week`.
    pub change: f64,
    /// `change` as a percentage of `last_week`, zero if there were no expenses last week.
    pub change_percent: f64,
}

pub(super) fn weekly_comparison(
    transactions: &[Transaction],
    today: Date,
    offset: UtcOffset,
) -> WeeklyComparison {
    let this_week = DateWindow::week_containing(today);
    let last_week = this_week.previous();

    let expenses_in = |window: DateWindow| -> f64 {
        transactions
            .iter()
            .filter(|transaction| transaction.is_expense())
            .filter(|transaction| {
                local_date(transaction.date, offset).is_some_and(|date| window.contains(date))
            })
            .map(|transaction| transaction.amount)
            .sum()
    };

    let this_week = expenses_in(this_week);
    let last_week = expenses_in(last_week);
    let change = this_week - last_week;
    let change_percent = if last_week > 0.0 {
        change / last_week * 100.0
    } else {
        0.0
    };

    WeeklyComparison {
        this_week,
        last_week,
        change,
        change_percent,
    }
}

#[cfg(test)]
mod tests {
    use time::{
        OffsetDateTime, UtcOffset,
        macros::{date, datetime},
    };

    use crate::transaction::{Transaction, TransactionType};

    use super::{WeeklyComparison, weekly_comparison};

    fn create_test_transaction(
        amount: f64,
        kind: TransactionType,
        date: OffsetDateTime,
    ) -> Transaction {
        Transaction::build(amount, kind, date).finalise()
    }

    // 2025-01-15 is a Wednesday, so this week is 12-18 Jan and last week is 5-11 Jan.
    const TODAY: time::Date = date!(2025 - 01 - 15);

    #[test]
    fn compares_expenses_with_last_week() {
        let transactions = vec![
            create_test_transaction(
                30.0,
                TransactionType::Expense,
                datetime!(2025-01-12 00:00 UTC),
            ),
            create_test_transaction(
                20.0,
                TransactionType::Expense,
                datetime!(2025-01-14 09:00 UTC),
            ),
            create_test_transaction(
                40.0,
                TransactionType::Expense,
                datetime!(2025-01-05 00:00 UTC),
            ),
            create_test_transaction(
                1000.0,
                TransactionType::Income,
                datetime!(2025-01-13 09:00 UTC),
            ),
        ];

        let comparison = weekly_comparison(&transactions, TODAY, UtcOffset::UTC);

        assert_eq!(
            comparison,
            WeeklyComparison {
                this_week: 50.0,
                last_week: 40.0,
                change: 10.0,
                change_percent: 25.0,
            }
        );
    }

    #[test]
    fn change_percent_is_zero_without_last_week_expenses() {
        let transactions = vec![create_test_transaction(
            30.0,
            TransactionType::Expense,
            datetime!(2025-01-13 12:00 UTC),
        )];

        let comparison = weekly_comparison(&transactions, TODAY, UtcOffset::UTC);

        assert_eq!(comparison.change, 30.0);
        assert_eq!(comparison.change_percent, 0.0);
    }

    #[test]
    fn excludes_days_outside_both_weeks() {
        let transactions = vec![
            // Saturday before last week.
            create_test_transaction(
                99.0,
                TransactionType::Expense,
                datetime!(2025-01-04 12:00 UTC),
            ),
            // Sunday after this week.
            create_test_transaction(
                99.0,
                TransactionType::Expense,
                datetime!(2025-01-19 12:00 UTC),
            ),
        ];

        let comparison = weekly_comparison(&transactions, TODAY, UtcOffset::UTC);

        assert_eq!(comparison, WeeklyComparison::default());
    }

    #[test]
    fn decrease_is_negative() {
        let transactions = vec![
            create_test_transaction(
                25.0,
                TransactionType::Expense,
                datetime!(2025-01-15 12:00 UTC),
            ),
            create_test_transaction(
                100.0,
                TransactionType::Expense,
                datetime!(2025-01-11 12:00 UTC),
            ),
        ];

        let comparison = weekly_comparison(&transactions, TODAY, UtcOffset::UTC);

        assert_eq!(comparison.change, -75.0);
        assert_eq!(comparison.change_percent, -75.0);
    }
}
