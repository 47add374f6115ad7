//! Finsight derives analytics from personal-finance transactions.
//!
//! Given a list of income and expense transactions recorded against named
//! balances, it calculates totals, per-category breakdowns, monthly and weekly
//! trends, and short insight messages.
//!
//! The core is [calculate_analytics], a pure function of the transactions and
//! an explicit "now". This library also provides a small JSON API around it
//! (see [build_router]) and a CSV reader for transactions.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod analytics;
mod app_state;
mod category;
mod csv_import;
mod currency;
mod database_id;
mod endpoints;
mod error;
mod logging;
mod routing;
mod timezone;
mod transaction;

pub use analytics::{
    AnalyticsData, AnalyticsReport, AnalyticsRequest, CategoryTotal, DAILY_PATTERN_LENGTH,
    DailyTotal, DateWindow, Insight, InsightKind, MONTHLY_TREND_LENGTH, MonthlyTotal,
    MostUsedCategory, ReportOptions, WeeklyComparison, build_report, calculate_analytics,
    generate_insights, get_insight_messages,
};
pub use app_state::AppState;
pub use category::{Category, UNCATEGORIZED_LABEL, default_categories, icon_for};
pub use csv_import::parse_transactions_csv;
pub use currency::{CurrencyCode, format_currency};
pub use database_id::{BalanceId, CategoryId, DatabaseId, TransactionId};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::{add_tracing_layer, build_router};
pub use timezone::{get_local_offset, local_now};
pub use transaction::{BalanceRef, Transaction, TransactionBuilder, TransactionType};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
