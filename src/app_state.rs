//! Implements a struct that holds the state of the REST server.

use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::{
    Error,
    db::initialize,
    expense::{ExpenseRepository, ExpenseViewState, SQLiteExpenseStore},
    settings::DisplaySettings,
    timezone::get_local_offset,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The list of expenses shown by the pages, backed by the database.
    pub expenses: ExpenseViewState<SQLiteExpenseStore>,

    /// The local timezone as a canonical timezone name, e.g. "Asia/Kolkata".
    pub local_timezone: String,

    /// Display preferences such as dark mode.
    pub display: DisplaySettings,
}

impl AppState {
    /// Create a new [AppState] with a SQLite database connection.
    ///
    /// This function will initialize the database by adding the expense table.
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Asia/Kolkata".
    ///
    /// The expense list starts empty, call [ExpenseViewState::refresh_all]
    /// to load the stored expenses.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized or the timezone is unknown.
    pub fn new(
        db_connection: Connection,
        local_timezone: &str,
        display: DisplaySettings,
    ) -> Result<Self, Error> {
        initialize(&db_connection)?;

        if get_local_offset(local_timezone).is_none() {
            tracing::error!("Invalid timezone {}", local_timezone);
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        let connection = Arc::new(Mutex::new(db_connection));
        let store = SQLiteExpenseStore::new(connection);

        Ok(Self {
            expenses: ExpenseViewState::new(ExpenseRepository::new(store)),
            local_timezone: local_timezone.to_owned(),
            display,
        })
    }
}
