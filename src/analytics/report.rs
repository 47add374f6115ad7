//! Bundles analytics with insights for callers that present them.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{currency::CurrencyCode, database_id::BalanceId, transaction::Transaction};

use super::{AnalyticsData, Insight, calculate_analytics, generate_insights};

/// Controls which transactions a report covers and how amounts are shown.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Only include transactions recorded against this balance.
    pub balance_id: Option<BalanceId>,
    /// The currency insight amounts are formatted in.
    ///
    /// Defaults to the currency of the first included transaction's balance,
    /// or [CurrencyCode::DEFAULT] if there are no transactions.
    pub currency: Option<CurrencyCode>,
}

/// Analytics together with the insights derived from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsReport {
    /// The computed analytics.
    pub analytics: AnalyticsData,
    /// Insights derived from `analytics`, in presentation order.
    pub insights: Vec<Insight>,
    /// The currency the insight amounts were formatted in.
    pub currency: CurrencyCode,
}

/// Calculate the analytics and insights for `transactions` as of `now`.
pub fn build_report(
    transactions: &[Transaction],
    now: OffsetDateTime,
    options: ReportOptions,
) -> AnalyticsReport {
    let selected: Vec<Transaction> = match options.balance_id {
        Some(balance_id) => transactions
            .iter()
            .filter(|transaction| transaction.balance.id == balance_id)
            .cloned()
            .collect(),
        None => transactions.to_vec(),
    };

    let currency = options
        .currency
        .or_else(|| {
            selected
                .first()
                .map(|transaction| transaction.balance.currency.clone())
        })
        .unwrap_or_default();

    let analytics = calculate_analytics(&selected, now);
    let insights = generate_insights(&analytics, &currency);

    AnalyticsReport {
        analytics,
        insights,
        currency,
    }
}
