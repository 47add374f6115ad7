//! Short natural-language summaries of computed analytics.

use serde::{Deserialize, Serialize};

use crate::currency::{CurrencyCode, format_currency};

use super::AnalyticsData;

/// How an insight should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Neutral information.
    Info,
    /// Good news, e.g. spending went down.
    Success,
    /// Something the user may want to act on, e.g. spending went up.
    Warning,
}

/// A message summarising one aspect of the analytics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// How the message should be presented.
    pub kind: InsightKind,
    /// The message itself, with amounts already formatted.
    pub message: String,
}

impl Insight {
    fn new(kind: InsightKind, message: String) -> Self {
        Self { kind, message }
    }
}

/// Derive insights from `analytics`, formatting amounts in `currency`.
///
/// In order, the insights cover:
/// 1. the share of expenses taken by the top category, if there were expenses,
/// 2. the week-over-week change in spending, if there was any,
/// 3. the amount saved or overspent, if income and expenses differ.
///
/// Returns an empty list when none of these apply.
pub fn generate_insights(analytics: &AnalyticsData, currency: &CurrencyCode) -> Vec<Insight> {
    let mut insights = Vec::new();

    let top_category = analytics
        .category_breakdown
        .first()
        .filter(|_| analytics.total_expenses > 0.0);

    if let Some(top_category) = top_category {
        let percentage = top_category.amount / analytics.total_expenses * 100.0;
        insights.push(Insight::new(
            InsightKind::Info,
            format!(
                "{} accounts for {percentage:.1}% of your expenses",
                top_category.category
            ),
        ));
    }

    let change_percent = analytics.weekly_comparison.change_percent;

    if change_percent != 0.0 {
        let (direction, kind) = if change_percent > 0.0 {
            ("increased", InsightKind::Warning)
        } else {
            ("decreased", InsightKind::Success)
        };
        insights.push(Insight::new(
            kind,
            format!(
                "Your spending {direction} by {:.1}% this week",
                change_percent.abs()
            ),
        ));
    }

    if analytics.net_change > 0.0 {
        insights.push(Insight::new(
            InsightKind::Success,
            format!(
                "You saved {} this period",
                format_currency(analytics.net_change, currency)
            ),
        ));
    } else if analytics.net_change < 0.0 {
        insights.push(Insight::new(
            InsightKind::Warning,
            format!(
                "You spent {} more than you earned",
                format_currency(analytics.net_change.abs(), currency)
            ),
        ));
    }

    insights
}

/// The insight messages for `analytics` with amounts in the default currency.
pub fn get_insight_messages(analytics: &AnalyticsData) -> Vec<String> {
    generate_insights(analytics, &CurrencyCode::default())
        .into_iter()
        .map(|insight| insight.message)
        .collect()
}
