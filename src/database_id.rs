//! Identifier type definitions.
//!
//! Records are created and stored by the caller's data layer, so these are
//! plain aliases for the integer IDs it hands us.

/// Alias for the integer type used for record IDs.
pub type DatabaseId = i64;

/// Identifies a transaction.
pub type TransactionId = DatabaseId;

/// Identifies a balance (a named monetary account).
pub type BalanceId = DatabaseId;

/// Identifies a category.
pub type CategoryId = DatabaseId;
