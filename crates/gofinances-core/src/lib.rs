//! Core dashboard logic: the transactions payload, the upstream client and
//! the view state the pages are rendered from

pub mod client;
pub mod error;
pub mod models;
pub mod view;

pub use client::{ApiRef, HttpTransactionsApi, TransactionsApi};
#[cfg(any(test, feature = "test-util"))]
pub use client::StaticTransactionsApi;
pub use error::{CoreError, CoreResult, ErrorSeverity};
pub use models::{
    Balance, Category, FormattedBalance, Transaction, TransactionRow, TransactionType,
    TransactionsResponse,
};
pub use view::{DashboardSnapshot, TransactionsView, ViewState};
