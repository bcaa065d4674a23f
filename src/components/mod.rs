//! UI Components
//!
//! Leptos components for the two pages and their controls.

mod actions_table;
mod dashboard;
mod login;
mod login_form;
mod pagination;

pub use actions_table::ActionsTable;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use login_form::LoginForm;
pub use pagination::Pagination;
