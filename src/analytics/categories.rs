//! Groups transactions by category.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::transaction::Transaction;

/// The expenses and number of transactions in a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category name, "Uncategorized" for transactions without one.
    pub category: String,
    /// The sum of the expenses in the category. Income is not included.
    pub amount: f64,
    /// The number of transactions in the category, income included.
    pub count: usize,
}

/// The category at the top of the breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MostUsedCategory {
    /// The category name.
    pub category: String,
    /// The number of transactions in the category.
    pub count: usize,
}

/// Sum expenses and count transactions per category.
///
/// The result is sorted by amount, largest first. Categories with equal
/// amounts keep the order in which they first appear in `transactions`.
pub(super) fn category_breakdown(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut breakdown: Vec<CategoryTotal> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for transaction in transactions {
        let name = transaction.category_name();
        let position = *positions.entry(name).or_insert_with(|| {
            breakdown.push(CategoryTotal {
                category: name.to_owned(),
                amount: 0.0,
                count: 0,
            });
            breakdown.len() - 1
        });

        let total = &mut breakdown[position];
        total.count += 1;

        if transaction.is_expense() {
            total.amount += transaction.amount;
        }
    }

    // `sort_by` is stable, so ties stay in first-seen order.
    breakdown.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    breakdown
}

pub(super) fn most_used_category(breakdown: &[CategoryTotal]) -> Option<MostUsedCategory> {
    breakdown.first().map(|top| MostUsedCategory {
        category: top.category.clone(),
        count: top.count,
    })
}
