//! Totals over the whole list of transactions.

use crate::transaction::{Transaction, TransactionType};

/// Income and expense sums.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub(super) struct Totals {
    pub income: f64,
    pub expenses: f64,
}

impl Totals {
    pub fn add(&mut self, transaction: &Transaction) {
        match transaction.kind {
            TransactionType::Income => self.income += transaction.amount,
            TransactionType::Expense => self.expenses += transaction.amount,
        }
    }
}

pub(super) fn sum_by_type(transactions: &[Transaction]) -> Totals {
    transactions
        .iter()
        .fold(Totals::default(), |mut totals, transaction| {
            totals.add(transaction);
            totals
        })
}

/// The mean magnitude of all transactions, income and expenses alike.
pub(super) fn average_transaction(totals: Totals, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        (totals.income + totals.expenses) / count as f64
    }
}

/// The transaction with the largest amount, the first one wins ties.
pub(super) fn largest_transaction(transactions: &[Transaction]) -> Option<&Transaction> {
    transactions
        .iter()
        .fold(None, |largest: Option<&Transaction>, current| match largest {
            Some(largest) if current.amount <= largest.amount => Some(largest),
            _ => Some(current),
        })
}
