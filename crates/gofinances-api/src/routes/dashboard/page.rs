//! Dashboard page rendering
//!
//! Endpoints:
//! - page_dashboard: Main page, in loading state
//!
//! Helper functions:
//! - render_dashboard: Cards and table for a view, in whatever state it is
//! - render_cards / render_table: The two halves of the dashboard

use gofinances_core::{FormattedBalance, TransactionRow, TransactionsView, ViewState};
use gofinances_utils::escape_html;

use crate::{page_response, AppState};

/// Dashboard page - Renders a fresh, not yet activated view
pub async fn page_dashboard(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
) -> axum::response::Html<String> {
    let view = TransactionsView::new(state.api.clone(), state.locale.clone());
    axum::response::Html(page_response(&headers, "Dashboard", &render_dashboard(&view)))
}

/// Render the dashboard for `view`. Output depends only on the view state.
pub fn render_dashboard(view: &TransactionsView) -> String {
    let body = format!(
        "{}{}",
        render_cards(view.formatted_balance()),
        render_table(&view.rows())
    );

    match view.state() {
        ViewState::Loading => format!(
            "<div id='dashboard' data-state='loading' hx-get='/dashboard/content' hx-trigger='load' hx-swap='outerHTML'>{}</div>",
            body
        ),
        ViewState::Loaded => format!("<div id='dashboard' data-state='loaded'>{}</div>", body),
    }
}

/// Entradas, Saídas and Total cards
pub fn render_cards(balance: &FormattedBalance) -> String {
    format!(
        "<section class='grid grid-cols-3 gap-8 -mt-16'>{}{}{}</section>",
        summary_card("Entradas", "balance-income", &balance.income, "bg-white text-gray-800"),
        summary_card("Saídas", "balance-outcome", &balance.outcome, "bg-white text-gray-800"),
        summary_card("Total", "balance-total", &balance.total, "bg-orange-500 text-white"),
    )
}

fn summary_card(label: &str, test_id: &str, value: &str, colors: &str) -> String {
    format!(
        "<div class='{} rounded-md px-8 py-6'><header class='flex items-center justify-between'><p class='text-base'>{}</p></header><h1 class='mt-3 text-4xl font-normal' data-testid='{}'>{}</h1></div>",
        colors,
        label,
        test_id,
        escape_html(value)
    )
}

/// Transactions table, one row per entry in the given order
pub fn render_table(rows: &[TransactionRow]) -> String {
    let body: String = rows.iter().map(render_row).collect();
    format!(
        "<section class='mt-16'><table class='w-full border-separate' style='border-spacing: 0 8px'>\
<thead><tr class='text-left text-gray-500'><th class='px-8 py-5 font-normal'>Título</th><th class='px-8 py-5 font-normal'>Preço</th><th class='px-8 py-5 font-normal'>Categoria</th><th class='px-8 py-5 font-normal'>Data</th></tr></thead>\
<tbody>{}</tbody></table></section>",
        body
    )
}

fn render_row(row: &TransactionRow) -> String {
    format!(
        "<tr data-id='{}'><td class='title'>{}</td><td class='{}'>{}</td><td>{}</td><td>{}</td></tr>",
        escape_html(&row.id),
        escape_html(&row.title),
        row.kind,
        escape_html(&row.amount),
        escape_html(&row.category),
        escape_html(&row.date)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gofinances_core::{
        Balance, Category, StaticTransactionsApi, Transaction, TransactionType, TransactionsResponse,
    };
    use gofinances_utils::Locale;
    use std::sync::Arc;

    fn loaded_view(transactions: Vec<Transaction>) -> TransactionsView {
        let api = Arc::new(StaticTransactionsApi::new(TransactionsResponse::default()));
        let mut view = TransactionsView::new(api, Locale::pt_br());
        view.apply(TransactionsResponse {
            transactions,
            balance: Balance { income: 500.0, outcome: 200.0, total: 300.0 },
        });
        view
    }

    fn transaction(id: &str, title: &str, kind: TransactionType) -> Transaction {
        Transaction {
            id: id.to_string(),
            title: title.to_string(),
            value: 200.0,
            kind,
            category: Category { title: "Casa & Lar".to_string() },
            created_at: "2020-05-24T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_headers_and_labels() {
        let html = render_dashboard(&loaded_view(vec![]));
        for label in ["Título", "Preço", "Categoria", "Data", "Entradas", "Saídas", "Total"] {
            assert!(html.contains(label), "missing {}", label);
        }
        assert_eq!(html.matches("<th ").count(), 4);
    }

    #[test]
    fn test_empty_list_renders_no_rows() {
        let html = render_dashboard(&loaded_view(vec![]));
        assert!(html.contains("<tbody></tbody>"));
        assert!(html.contains("data-testid='balance-total'>R$\u{a0}300,00<"));
    }

    #[test]
    fn test_outcome_row_is_signed_and_classed() {
        let html = render_dashboard(&loaded_view(vec![transaction("9", "Rent", TransactionType::Outcome)]));
        assert!(html.contains("<td class='outcome'>- R$\u{a0}200,00</td>"));
        assert!(html.contains("<td>Casa &amp; Lar</td>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_dashboard(&loaded_view(vec![transaction(
            "'x'",
            "<script>alert(1)</script>",
            TransactionType::Income,
        )]));
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("data-id='&#39;x&#39;'"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let view = loaded_view(vec![
            transaction("1", "Salary", TransactionType::Income),
            transaction("2", "Rent", TransactionType::Outcome),
        ]);
        assert_eq!(render_dashboard(&view), render_dashboard(&view));
    }

    #[test]
    fn test_rows_follow_api_order() {
        let html = render_dashboard(&loaded_view(vec![
            transaction("b", "Second", TransactionType::Income),
            transaction("a", "First", TransactionType::Income),
        ]));
        let second = html.find("Second").unwrap();
        let first = html.find("First").unwrap();
        assert!(second < first);
    }
}
