//! Expense tracking.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model, its category and the `ExpenseBuilder` for creating expenses
//! - Database functions for storing and querying expenses
//! - The store, repository and view state layers that feed the pages
//! - View handlers for the expense entry and list pages

mod category;
mod core;
mod create_endpoint;
mod create_page;
mod form;
mod list_page;
mod page_state;
mod repository;
mod store;
mod view_state;

pub use category::ExpenseCategory;
pub use core::{
    Expense, ExpenseBuilder, ExpenseId, count_expenses, create_expense_table, get_all_expenses,
    get_expenses_on, get_expenses_since, upsert_expense,
};
pub use create_endpoint::create_expense_endpoint;
pub use create_page::get_create_expense_page;
pub use form::{ExpenseForm, NOTES_MAX_LENGTH};
pub use list_page::{ExpensesQuery, get_expenses_page};
pub use page_state::ExpensePageState;
pub use repository::ExpenseRepository;
pub use store::{ExpenseStore, SQLiteExpenseStore};
pub use view_state::ExpenseViewState;

#[cfg(test)]
pub(crate) use page_state::get_test_page_state;
