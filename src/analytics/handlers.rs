//! HTTP handler for computing analytics on request.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error, currency::CurrencyCode, database_id::BalanceId, timezone::local_now,
    transaction::Transaction,
};

use super::{AnalyticsReport, ReportOptions, build_report};

/// The body of a request for analytics.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalyticsRequest {
    /// The transactions to analyse.
    pub transactions: Vec<Transaction>,
    /// Only analyse transactions recorded against this balance.
    #[serde(default)]
    pub balance_id: Option<BalanceId>,
    /// The currency to format insight amounts in, e.g. "NZD".
    #[serde(default)]
    pub currency: Option<String>,
}

/// Calculate analytics and insights for the transactions in the request body.
///
/// Windows such as "this week" are relative to the current time in the
/// server's local timezone.
///
/// # Errors
/// Returns an [Error::InvalidCurrency] if the requested currency is not a
/// valid currency code, or an [Error::InvalidTimezoneError] if the server's
/// timezone is misconfigured.
pub async fn post_analytics(
    State(state): State<AppState>,
    Json(request): Json<AnalyticsRequest>,
) -> Result<Json<AnalyticsReport>, Error> {
    let currency = request
        .currency
        .as_deref()
        .map(CurrencyCode::new)
        .transpose()?;
    let now = local_now(&state.local_timezone)?;

    let report = build_report(
        &request.transactions,
        now,
        ReportOptions {
            balance_id: request.balance_id,
            currency,
        },
    );

    tracing::info!(
        "Calculated analytics for {} of {} transactions",
        report.analytics.transaction_count,
        request.transactions.len()
    );

    Ok(Json(report))
}
