//! Dashboard routes - Balance summary cards and transactions table
//!
//! The page is served in its loading state and asks for
//! `/dashboard/content` once, on load. That request performs the single
//! upstream read and returns the loaded fragment.
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: Full page rendering

pub mod api;
pub mod page;

pub use api::{api_dashboard, htmx_dashboard_content};
pub use page::{page_dashboard, render_dashboard};
