//! Defines the transaction model that analytics are computed from.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{
    category::{Category, UNCATEGORIZED_LABEL},
    currency::CurrencyCode,
    database_id::{BalanceId, TransactionId},
};

/// Whether money was earned or spent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money flowing into a balance.
    Income,
    /// Money flowing out of a balance.
    Expense,
}

/// The balance (account) that owns a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRef {
    /// The ID of the balance.
    pub id: BalanceId,
    /// The display name of the balance, e.g. "Everyday".
    #[serde(default)]
    pub name: String,
    /// The currency amounts in this balance are displayed in.
    #[serde(default)]
    pub currency: CurrencyCode,
}

impl Default for BalanceRef {
    fn default() -> Self {
        Self {
            id: 1,
            name: "Main".to_owned(),
            currency: CurrencyCode::default(),
        }
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The magnitude of the transaction, the sign is given by `kind`.
    pub amount: f64,
    /// Whether the transaction is income or an expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// When the transaction happened, not when it was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// A text description of what the transaction was for.
    #[serde(default)]
    pub description: Option<String>,
    /// The category of the transaction, e.g. "Groceries", "Travel".
    #[serde(default)]
    pub category: Option<Category>,
    /// The balance the transaction was recorded against.
    #[serde(default)]
    pub balance: BalanceRef,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: f64, kind: TransactionType, date: OffsetDateTime) -> TransactionBuilder {
        TransactionBuilder {
            id: 0,
            amount,
            kind,
            date,
            description: None,
            category: None,
            balance: BalanceRef::default(),
        }
    }

    /// The name the transaction is grouped under in category breakdowns.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|category| category.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNCATEGORIZED_LABEL)
    }

    /// Whether the transaction is income.
    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    /// Whether the transaction is an expense.
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }
}

/// A builder for creating [Transaction] instances.
///
/// Optional fields default to no description, no category and the
/// [default balance](BalanceRef::default). Call `finalise()` to get the
/// [Transaction].
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    id: TransactionId,
    amount: f64,
    kind: TransactionType,
    date: OffsetDateTime,
    description: Option<String>,
    category: Option<Category>,
    balance: BalanceRef,
}

impl TransactionBuilder {
    /// Set the ID of the transaction.
    pub fn id(mut self, id: TransactionId) -> Self {
        self.id = id;
        self
    }

    /// Set the description of the transaction.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    /// Set the category of the transaction.
    pub fn category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    /// Set the balance the transaction belongs to.
    pub fn balance(mut self, balance: BalanceRef) -> Self {
        self.balance = balance;
        self
    }

    /// Create the [Transaction].
    pub fn finalise(self) -> Transaction {
        Transaction {
            id: self.id,
            amount: self.amount,
            kind: self.kind,
            date: self.date,
            description: self.description,
            category: self.category,
            balance: self.balance,
        }
    }
}
