//! Analytics module
//!
//! Derives summary statistics, category breakdowns, monthly and weekly trends
//! and insight messages from a list of transactions.
//!
//! Everything here is a pure function of its input and an explicit "now", so
//! the same transactions and the same "now" always give the same result.

mod categories;
mod daily;
mod handlers;
mod insights;
mod monthly;
mod report;
mod summary;
mod weekly;
mod window;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::transaction::Transaction;

pub use categories::{CategoryTotal, MostUsedCategory};
pub use daily::{DAILY_PATTERN_LENGTH, DailyTotal};
pub use handlers::{AnalyticsRequest, post_analytics};
pub use insights::{Insight, InsightKind, generate_insights, get_insight_messages};
pub use monthly::{MONTHLY_TREND_LENGTH, MonthlyTotal};
pub use report::{AnalyticsReport, ReportOptions, build_report};
pub use weekly::WeeklyComparison;
pub use window::DateWindow;

/// A snapshot of analytics computed from a list of transactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsData {
    /// The sum of all income.
    pub total_income: f64,
    /// The sum of all expenses.
    pub total_expenses: f64,
    /// `total_income - total_expenses`.
    pub net_change: f64,
    /// The number of transactions analysed.
    pub transaction_count: usize,
    /// The mean amount over all transactions, zero if there are none.
    pub average_transaction: f64,
    /// The transaction with the largest amount, the first one wins ties.
    pub largest_transaction: Option<Transaction>,
    /// The category at the top of `category_breakdown`.
    pub most_used_category: Option<MostUsedCategory>,
    /// Expenses per category, largest first.
    pub category_breakdown: Vec<CategoryTotal>,
    /// Up to the six most recent months with transactions, oldest first.
    pub monthly_trend: Vec<MonthlyTotal>,
    /// The last seven days, today inclusive and oldest first.
    pub daily_pattern: Vec<DailyTotal>,
    /// Expenses this week against last week.
    pub weekly_comparison: WeeklyComparison,
}

/// Calculate the analytics for `transactions`.
///
/// The monthly, daily and weekly views are relative to `now`, and the UTC
/// offset of `now` decides which calendar day each transaction falls on.
pub fn calculate_analytics(transactions: &[Transaction], now: OffsetDateTime) -> AnalyticsData {
    let offset = now.offset();
    let today = now.date();

    tracing::debug!(
        "Calculating analytics for {} transactions as of {today} (UTC offset {offset})",
        transactions.len()
    );

    let totals = summary::sum_by_type(transactions);
    let category_breakdown = categories::category_breakdown(transactions);

    AnalyticsData {
        total_income: totals.income,
        total_expenses: totals.expenses,
        net_change: totals.income - totals.expenses,
        transaction_count: transactions.len(),
        average_transaction: summary::average_transaction(totals, transactions.len()),
        largest_transaction: summary::largest_transaction(transactions).cloned(),
        most_used_category: categories::most_used_category(&category_breakdown),
        category_breakdown,
        monthly_trend: monthly::monthly_trend(transactions, offset),
        daily_pattern: daily::daily_pattern(transactions, today, offset),
        weekly_comparison: weekly::weekly_comparison(transactions, today, offset),
    }
}

#[cfg(test)]
mod tests {
    use time::{
        OffsetDateTime,
        macros::{datetime, offset},
    };

    use crate::{
        category::Category,
        transaction::{Transaction, TransactionType},
    };

    use super::{
        AnalyticsData, CategoryTotal, MostUsedCategory, WeeklyComparison, calculate_analytics,
        get_insight_messages,
    };

    // A Wednesday.
    const NOW: OffsetDateTime = datetime!(2025-01-15 12:00 UTC);

    fn create_test_transaction(
        id: i64,
        amount: f64,
        kind: TransactionType,
        category: Option<&str>,
    ) -> Transaction {
        Transaction::build(amount, kind, datetime!(2025-01-14 12:00 UTC))
            .id(id)
            .category(category.map(Category::new))
            .finalise()
    }

    #[test]
    fn empty_input_degrades_to_zero() {
        let analytics = calculate_analytics(&[], NOW);

        assert_eq!(analytics.total_income, 0.0);
        assert_eq!(analytics.total_expenses, 0.0);
        assert_eq!(analytics.net_change, 0.0);
        assert_eq!(analytics.transaction_count, 0);
        assert_eq!(analytics.average_transaction, 0.0);
        assert_eq!(analytics.largest_transaction, None);
        assert_eq!(analytics.most_used_category, None);
        assert!(analytics.category_breakdown.is_empty());
        assert!(analytics.monthly_trend.is_empty());
        assert_eq!(analytics.daily_pattern.len(), 7);
        assert!(
            analytics
                .daily_pattern
                .iter()
                .all(|day| day.amount == 0.0 && day.count == 0)
        );
        assert_eq!(analytics.weekly_comparison, WeeklyComparison::default());
        assert!(get_insight_messages(&analytics).is_empty());
    }

    #[test]
    fn income_and_expense_totals() {
        let transactions = vec![
            create_test_transaction(1, 100.0, TransactionType::Income, None),
            create_test_transaction(2, 40.0, TransactionType::Expense, Some("Food")),
        ];

        let analytics = calculate_analytics(&transactions, NOW);

        assert_eq!(analytics.total_income, 100.0);
        assert_eq!(analytics.total_expenses, 40.0);
        assert_eq!(analytics.net_change, 60.0);
        assert_eq!(analytics.transaction_count, 2);
        assert_eq!(analytics.average_transaction, 70.0);
        assert_eq!(analytics.largest_transaction.map(|t| t.id), Some(1));
        assert_eq!(
            analytics.category_breakdown[0],
            CategoryTotal {
                category: "Food".to_owned(),
                amount: 40.0,
                count: 1
            }
        );
    }

    #[test]
    fn category_breakdown_and_most_used_category() {
        let transactions = vec![
            create_test_transaction(1, 30.0, TransactionType::Expense, Some("Food")),
            create_test_transaction(2, 20.0, TransactionType::Expense, Some("Food")),
            create_test_transaction(3, 10.0, TransactionType::Expense, Some("Transport")),
        ];

        let analytics = calculate_analytics(&transactions, NOW);

        assert_eq!(
            analytics.category_breakdown,
            vec![
                CategoryTotal {
                    category: "Food".to_owned(),
                    amount: 50.0,
                    count: 2
                },
                CategoryTotal {
                    category: "Transport".to_owned(),
                    amount: 10.0,
                    count: 1
                },
            ]
        );
        assert_eq!(
            analytics.most_used_category,
            Some(MostUsedCategory {
                category: "Food".to_owned(),
                count: 2
            })
        );
    }

    #[test]
    fn transaction_without_category_is_uncategorized() {
        let transactions = vec![create_test_transaction(
            1,
            12.0,
            TransactionType::Expense,
            None,
        )];

        let analytics = calculate_analytics(&transactions, NOW);

        assert_eq!(analytics.category_breakdown[0].category, "Uncategorized");
    }

    #[test]
    fn views_are_relative_to_now() {
        let transactions = vec![create_test_transaction(
            1,
            12.0,
            TransactionType::Expense,
            None,
        )];

        let analytics = calculate_analytics(&transactions, NOW);

        assert_eq!(analytics.monthly_trend[0].month, "Jan 2025");
        assert_eq!(analytics.daily_pattern[5].day, "Tue");
        assert_eq!(analytics.daily_pattern[5].amount, 12.0);
        assert_eq!(analytics.weekly_comparison.this_week, 12.0);
    }

    #[test]
    fn offset_of_now_decides_local_day() {
        // 2025-01-14 12:00 UTC is already Wednesday the 15th in UTC+13.
        let transactions = vec![create_test_transaction(
            1,
            12.0,
            TransactionType::Expense,
            None,
        )];
        let now = NOW.to_offset(offset!(+13));

        let analytics = calculate_analytics(&transactions, now);

        assert_eq!(analytics.daily_pattern[6].day, "Thu");
        assert_eq!(analytics.daily_pattern[5].day, "Wed");
        assert_eq!(analytics.daily_pattern[5].amount, 12.0);
    }

    #[test]
    fn same_input_and_now_give_same_output() {
        let transactions = vec![
            create_test_transaction(1, 100.0, TransactionType::Income, Some("Salary")),
            create_test_transaction(2, 40.0, TransactionType::Expense, Some("Food")),
        ];

        let first: AnalyticsData = calculate_analytics(&transactions, NOW);
        let second = calculate_analytics(&transactions, NOW);

        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_local_dates_only_count_in_totals() {
        let transactions = vec![
            Transaction::build(50.0, TransactionType::Expense, datetime!(9999-12-31 23:00 UTC))
                .id(1)
                .finalise(),
        ];
        let now = NOW.to_offset(offset!(+13));

        let analytics = calculate_analytics(&transactions, now);

        assert_eq!(analytics.total_expenses, 50.0);
        assert_eq!(analytics.transaction_count, 1);
        assert!(analytics.monthly_trend.is_empty());
        assert!(analytics.daily_pattern.iter().all(|day| day.count == 0));
        assert_eq!(analytics.weekly_comparison, WeeklyComparison::default());
    }

    #[test]
    fn rounding_noise_in_net_change_formats_as_zero() {
        let transactions = vec![
            create_test_transaction(1, 0.1, TransactionType::Expense, None),
            create_test_transaction(2, 0.2, TransactionType::Expense, None),
            create_test_transaction(3, 0.3, TransactionType::Income, None),
        ];

        let analytics = calculate_analytics(&transactions, NOW);
        let messages = get_insight_messages(&analytics);

        assert!(analytics.net_change < 0.0);
        assert_eq!(
            messages.last().map(String::as_str),
            Some("You spent $0.00 more than you earned")
        );
    }

    #[test]
    fn serialises_to_json() {
        let transactions = vec![create_test_transaction(
            1,
            12.0,
            TransactionType::Expense,
            Some("Food"),
        )];

        let analytics = calculate_analytics(&transactions, NOW);
        let json = serde_json::to_value(&analytics).unwrap();

        assert_eq!(json["total_expenses"], 12.0);
        assert_eq!(json["category_breakdown"][0]["category"], "Food");
        assert_eq!(json["largest_transaction"]["type"], "expense");
        assert_eq!(json["daily_pattern"].as_array().unwrap().len(), 7);
    }
}
