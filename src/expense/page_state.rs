use axum::extract::FromRef;

use crate::{
    AppState, DisplaySettings,
    expense::{ExpenseViewState, SQLiteExpenseStore},
};

/// The state needed by the expense pages and endpoints.
#[derive(Debug, Clone)]
pub struct ExpensePageState {
    /// The shared list of expenses.
    pub expenses: ExpenseViewState<SQLiteExpenseStore>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,
    /// Display preferences such as dark mode.
    pub display: DisplaySettings,
}

impl FromRef<AppState> for ExpensePageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            expenses: state.expenses.clone(),
            local_timezone: state.local_timezone.clone(),
            display: state.display.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) fn get_test_page_state() -> ExpensePageState {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;

    use crate::{db::initialize, expense::ExpenseRepository};

    let conn = Connection::open_in_memory().unwrap();
    initialize(&conn).unwrap();
    let store = SQLiteExpenseStore::new(Arc::new(Mutex::new(conn)));

    ExpensePageState {
        expenses: ExpenseViewState::new(ExpenseRepository::new(store)),
        local_timezone: "Etc/UTC".to_owned(),
        display: DisplaySettings::default(),
    }
}
