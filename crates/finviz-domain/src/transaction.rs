//! Domain model for ledger transactions.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::Identifiable;

/// A single income or expense entry. The `amount` is always a non-negative
/// magnitude; direction comes from `kind`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        kind: TransactionKind,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            kind,
            category: category.into(),
            date,
            created_at: Utc::now(),
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Whether a transaction adds to or subtracts from the balance.
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "income",
            TransactionKind::Expense => "expense",
        };
        f.write_str(label)
    }
}

/// Partial update applied to an existing transaction; absent fields keep
/// their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub description: Option<String>,
    pub amount: Option<f64>,
    #[serde(rename = "type")]
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

impl TransactionUpdate {
    pub fn apply(self, txn: &mut Transaction) {
        if let Some(description) = self.description {
            txn.description = description;
        }
        if let Some(amount) = self.amount {
            txn.amount = amount;
        }
        if let Some(kind) = self.kind {
            txn.kind = kind;
        }
        if let Some(category) = self.category {
            txn.category = category;
        }
        if let Some(date) = self.date {
            txn.date = date;
        }
    }
}
