//! Dashboard view state
//!
//! A view starts in [`ViewState::Loading`] with a zero balance and no
//! transactions. The first [`TransactionsView::activate`] performs the one
//! upstream read of the view's life; on success balance and list are
//! replaced together and the view becomes [`ViewState::Loaded`]. A failed
//! read leaves the view loading. There is no retry and no refresh.

use gofinances_utils::Locale;
use serde::Serialize;

use crate::client::ApiRef;
use crate::error::CoreResult;
use crate::models::{Balance, FormattedBalance, Transaction, TransactionRow, TransactionsResponse};

/// Observable state of the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewState {
    Loading,
    Loaded,
}

/// Dashboard contents for one activation
pub struct TransactionsView {
    api: ApiRef,
    locale: Locale,
    state: ViewState,
    activated: bool,
    balance: Balance,
    formatted_balance: FormattedBalance,
    transactions: Vec<Transaction>,
}

/// Serializable copy of what the view shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub state: ViewState,
    pub balance: Balance,
    pub formatted_balance: FormattedBalance,
    pub transactions: Vec<TransactionRow>,
}

impl TransactionsView {
    pub fn new(api: ApiRef, locale: Locale) -> Self {
        let balance = Balance::default();
        let formatted_balance = FormattedBalance::new(&balance, &locale);
        Self {
            api,
            locale,
            state: ViewState::Loading,
            activated: false,
            balance,
            formatted_balance,
            transactions: Vec::new(),
        }
    }

    /// Fetch once. Later calls return `Ok(())` without touching the API,
    /// whether or not the first one succeeded.
    pub async fn activate(&mut self) -> CoreResult<()> {
        if self.activated {
            log::debug!("View already activated, skipping fetch");
            return Ok(());
        }
        self.activated = true;

        let response = self.api.fetch_transactions().await?;
        self.apply(response);
        Ok(())
    }

    /// Replace balance and list wholesale with a fresh response
    pub fn apply(&mut self, response: TransactionsResponse) {
        self.formatted_balance = FormattedBalance::new(&response.balance, &self.locale);
        self.balance = response.balance;
        self.transactions = response.transactions;
        self.state = ViewState::Loaded;
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn balance(&self) -> &Balance {
        &self.balance
    }

    pub fn formatted_balance(&self) -> &FormattedBalance {
        &self.formatted_balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// One row per transaction, in API order
    pub fn rows(&self) -> Vec<TransactionRow> {
        self.transactions
            .iter()
            .map(|t| TransactionRow::new(t, &self.locale))
            .collect()
    }

    pub fn snapshot(&self) -> DashboardSnapshot {
        DashboardSnapshot {
            state: self.state,
            balance: self.balance,
            formatted_balance: self.formatted_balance.clone(),
            transactions: self.rows(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::StaticTransactionsApi;
    use crate::models::{Category, TransactionType};
    use std::sync::Arc;

    fn transaction(id: &str, title: &str, value: f64, kind: TransactionType) -> Transaction {
        Transaction {
            id: id.to_string(),
            title: title.to_string(),
            value,
            kind,
            category: Category { title: "Work".to_string() },
            created_at: "2020-05-24T00:00:00Z".to_string(),
        }
    }

    fn salary_response() -> TransactionsResponse {
        TransactionsResponse {
            transactions: vec![transaction("1", "Salary", 500.0, TransactionType::Income)],
            balance: Balance { income: 500.0, outcome: 200.0, total: 300.0 },
        }
    }

    #[test]
    fn test_initial_state() {
        let api = Arc::new(StaticTransactionsApi::new(salary_response()));
        let view = TransactionsView::new(api.clone(), Locale::pt_br());

        assert_eq!(view.state(), ViewState::Loading);
        assert_eq!(*view.balance(), Balance::default());
        assert!(view.transactions().is_empty());
        assert_eq!(view.formatted_balance().total, "R$\u{a0}0,00");
        assert_eq!(api.calls(), 0);
    }

    #[tokio::test]
    async fn test_activate_loads_once() {
        let api = Arc::new(StaticTransactionsApi::new(salary_response()));
        let mut view = TransactionsView::new(api.clone(), Locale::pt_br());

        view.activate().await.unwrap();
        view.activate().await.unwrap();

        assert_eq!(api.calls(), 1);
        assert_eq!(view.state(), ViewState::Loaded);
        assert_eq!(view.formatted_balance().income, "R$\u{a0}500,00");
        assert_eq!(view.formatted_balance().outcome, "R$\u{a0}200,00");
        assert_eq!(view.formatted_balance().total, "R$\u{a0}300,00");

        let rows = view.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Salary");
        assert_eq!(rows[0].amount, "R$\u{a0}500,00");
        assert_eq!(rows[0].category, "Work");
        assert_eq!(rows[0].date, "24/05/2020");
    }

    #[tokio::test]
    async fn test_failed_fetch_stays_loading_without_retry() {
        let api = Arc::new(StaticTransactionsApi::failing(500));
        let mut view = TransactionsView::new(api.clone(), Locale::pt_br());

        assert!(view.activate().await.is_err());
        assert_eq!(view.state(), ViewState::Loading);
        assert!(view.transactions().is_empty());

        view.activate().await.unwrap();
        assert_eq!(api.calls(), 1);
        assert_eq!(view.state(), ViewState::Loading);
    }

    #[tokio::test]
    async fn test_empty_list_loads() {
        let api = Arc::new(StaticTransactionsApi::new(TransactionsResponse::default()));
        let mut view = TransactionsView::new(api, Locale::pt_br());

        view.activate().await.unwrap();
        assert_eq!(view.state(), ViewState::Loaded);
        assert!(view.rows().is_empty());
        assert_eq!(view.formatted_balance().income, "R$\u{a0}0,00");
    }

    #[test]
    fn test_apply_replaces_instead_of_merging() {
        let api = Arc::new(StaticTransactionsApi::new(TransactionsResponse::default()));
        let mut view = TransactionsView::new(api, Locale::pt_br());

        view.apply(TransactionsResponse {
            transactions: vec![
                transaction("1", "Salary", 500.0, TransactionType::Income),
                transaction("2", "Rent", 200.0, TransactionType::Outcome),
            ],
            balance: Balance { income: 500.0, outcome: 200.0, total: 300.0 },
        });
        assert_eq!(view.transactions().len(), 2);

        view.apply(TransactionsResponse {
            transactions: vec![transaction("3", "Bonus", 50.0, TransactionType::Income)],
            balance: Balance { income: 50.0, outcome: 0.0, total: 50.0 },
        });
        assert_eq!(view.transactions().len(), 1);
        assert_eq!(view.transactions()[0].id, "3");
        assert_eq!(view.formatted_balance().total, "R$\u{a0}50,00");
    }

    #[test]
    fn test_rows_keep_api_order() {
        let api = Arc::new(StaticTransactionsApi::new(TransactionsResponse::default()));
        let mut view = TransactionsView::new(api, Locale::pt_br());
        view.apply(TransactionsResponse {
            transactions: vec![
                transaction("b", "Zeta", 1.0, TransactionType::Outcome),
                transaction("a", "Alpha", 2.0, TransactionType::Income),
            ],
            balance: Balance::default(),
        });

        let ids: Vec<String> = view.rows().into_iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["b", "a"]);
        assert_eq!(view.rows()[0].amount, "- R$\u{a0}1,00");
    }

    #[test]
    fn test_snapshot_serializes_state() {
        let api = Arc::new(StaticTransactionsApi::new(TransactionsResponse::default()));
        let view = TransactionsView::new(api, Locale::pt_br());
        let json = serde_json::to_value(view.snapshot()).unwrap();
        assert_eq!(json["state"], "loading");
        assert_eq!(json["transactions"], serde_json::json!([]));
    }
}
