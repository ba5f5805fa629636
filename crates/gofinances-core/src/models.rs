//! Transactions API payload and the values derived from it for display

use gofinances_utils::{format_currency, format_local_date, signed_currency_label, Locale};
use serde::{Deserialize, Serialize};

pub use gofinances_utils::TransactionType;

/// Category a transaction belongs to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub title: String,
}

/// One ledger entry as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Opaque identifier, unique per item
    pub id: String,
    pub title: String,
    /// Amount, non-negative by API contract; the sign comes from `kind`
    pub value: f64,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: Category,
    /// ISO-8601 text, parsed only when displayed
    pub created_at: String,
}

/// Server-computed totals. Never recomputed from the transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Balance {
    pub income: f64,
    pub outcome: f64,
    pub total: f64,
}

/// Body of `GET /transactions`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransactionsResponse {
    pub transactions: Vec<Transaction>,
    pub balance: Balance,
}

/// Balance fields rendered as currency strings
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormattedBalance {
    pub income: String,
    pub outcome: String,
    pub total: String,
}

impl FormattedBalance {
    pub fn new(balance: &Balance, locale: &Locale) -> Self {
        Self {
            income: format_currency(balance.income, locale),
            outcome: format_currency(balance.outcome, locale),
            total: format_currency(balance.total, locale),
        }
    }
}

/// A table row, ready to print
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub title: String,
    /// Signed currency label (`- R$ 200,00` for outcome)
    pub amount: String,
    pub kind: TransactionType,
    pub category: String,
    /// `dd/mm/yyyy` or `Invalid Date`
    pub date: String,
}

impl TransactionRow {
    pub fn new(transaction: &Transaction, locale: &Locale) -> Self {
        Self {
            id: transaction.id.clone(),
            title: transaction.title.clone(),
            amount: signed_currency_label(transaction.value, transaction.kind, locale),
            kind: transaction.kind,
            category: transaction.category.title.clone(),
            date: format_local_date(transaction.created_at.as_str(), locale),
        }
    }
}
