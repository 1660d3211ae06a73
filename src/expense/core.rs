//! Defines the core data models and database queries for expenses.

use std::fmt::Display;

use rusqlite::{
    Connection, Row, ToSql,
    types::{FromSql, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::{Error, expense::ExpenseCategory};

// ============================================================================
// MODELS
// ============================================================================

/// The unique identifier of an expense.
///
/// IDs are generated by the caller when the expense is created, not by the
/// database, so an expense can be written with [upsert_expense] directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExpenseId(String);

impl ExpenseId {
    /// Generate a new random (UUID v4) ID.
    pub fn new_random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Wrap an existing ID, e.g. one read back from the database.
    pub fn new_unchecked(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for ExpenseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ToSql for ExpenseId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0.as_str()))
    }
}

impl FromSql for ExpenseId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(ExpenseId::new_unchecked)
    }
}

/// Money spent on something, on a given day.
///
/// To create a new `Expense`, use [Expense::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The ID of the expense.
    pub id: ExpenseId,
    /// A short description of what the money was spent on.
    pub title: String,
    /// The amount of money spent.
    pub amount: f64,
    /// What kind of expense this was.
    pub category: ExpenseCategory,
    /// Free-form notes about the expense.
    pub notes: Option<String>,
    /// The day the expense was recorded.
    pub date: Date,
    /// A reference to an image of the receipt.
    ///
    /// Reserved for receipt attachments, none of the pages set it yet.
    pub image_uri: Option<String>,
}

impl Expense {
    /// Create a new expense with a random ID.
    ///
    /// Shortcut for [ExpenseBuilder] for discoverability.
    pub fn build(title: &str, amount: f64, category: ExpenseCategory, date: Date) -> ExpenseBuilder {
        ExpenseBuilder {
            id: ExpenseId::new_random(),
            title: title.to_owned(),
            amount,
            category,
            notes: None,
            date,
            image_uri: None,
        }
    }
}

/// A builder for creating [Expense] instances.
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// let expense = Expense::build("Team lunch", 42.5, ExpenseCategory::Food, date!(2024 - 01 - 02))
///     .notes(Some("Pizza".to_owned()))
///     .finalize();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseBuilder {
    /// Defaults to a random UUID.
    pub id: ExpenseId,
    /// A short description of what the money was spent on.
    pub title: String,
    /// The amount of money spent.
    pub amount: f64,
    /// What kind of expense this was.
    pub category: ExpenseCategory,
    /// Defaults to no notes.
    pub notes: Option<String>,
    /// The day the expense was recorded.
    pub date: Date,
    /// Defaults to no receipt image.
    pub image_uri: Option<String>,
}

impl ExpenseBuilder {
    /// Use `id` instead of a random ID.
    ///
    /// Writing an expense with the ID of an existing expense replaces it.
    pub fn id(mut self, id: ExpenseId) -> Self {
        self.id = id;
        self
    }

    /// Set the notes for the expense.
    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = notes;
        self
    }

    /// Set the receipt image reference for the expense.
    pub fn image_uri(mut self, image_uri: Option<String>) -> Self {
        self.image_uri = image_uri;
        self
    }

    /// Build the [Expense].
    pub fn finalize(self) -> Expense {
        Expense {
            id: self.id,
            title: self.title,
            amount: self.amount,
            category: self.category,
            notes: self.notes,
            date: self.date,
            image_uri: self.image_uri,
        }
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

const SELECT_COLUMNS: &str = "SELECT id, title, amount, category, notes, date, image_uri FROM expense";

/// Insert `expense`, replacing any stored expense with the same ID.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn upsert_expense(expense: &Expense, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT OR REPLACE INTO expense (id, title, amount, category, notes, date, image_uri)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        (
            &expense.id,
            &expense.title,
            expense.amount,
            expense.category,
            &expense.notes,
            expense.date,
            &expense.image_uri,
        ),
    )?;

    Ok(())
}

/// Get every expense, most recent day first.
///
/// The order of expenses on the same day is not specified.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error, or
/// if a stored category label is not a valid [ExpenseCategory].
pub fn get_all_expenses(connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(&format!("{SELECT_COLUMNS} ORDER BY date DESC"))?
        .query_map([], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

/// Get the expenses recorded on exactly `date`.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_expenses_on(date: Date, connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(&format!("{SELECT_COLUMNS} WHERE date = :date"))?
        .query_map(&[(":date", &date)], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

/// Get the expenses recorded on or after `date`.
///
/// Dates are stored as `YYYY-MM-DD` text, so comparing them as strings
/// orders them by date.
///
/// # Errors
/// This function will return a [Error::SqlError] if there is an SQL error.
pub fn get_expenses_since(date: Date, connection: &Connection) -> Result<Vec<Expense>, Error> {
    connection
        .prepare(&format!("{SELECT_COLUMNS} WHERE date >= :date"))?
        .query_map(&[(":date", &date)], map_expense_row)?
        .map(|maybe_expense| maybe_expense.map_err(Error::from))
        .collect()
}

/// Get the total number of expenses in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn count_expenses(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM expense;", [], |row| row.get(0))
        .map_err(|error| error.into())
}

/// Create the expense table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_expense_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS expense (
                id TEXT PRIMARY KEY NOT NULL,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                notes TEXT,
                date TEXT NOT NULL,
                image_uri TEXT
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_expense_date ON expense(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to an Expense.
pub fn map_expense_row(row: &Row) -> Result<Expense, rusqlite::Error> {
    let id = row.get(0)?;
    let title = row.get(1)?;
    let amount = row.get(2)?;
    let category = row.get(3)?;
    let notes = row.get(4)?;
    let date = row.get(5)?;
    let image_uri = row.get(6)?;

    Ok(Expense {
        id,
        title,
        amount,
        category,
        notes,
        date,
        image_uri,
    })
}

// ============================================================================
// TESTS
// ============================================================================
