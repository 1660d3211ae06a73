//! Database initialisation for the application's SQLite database.

use rusqlite::{Connection, Transaction, TransactionBehavior};

use crate::{Error, expense::create_expense_table};

/// The version of the database schema created by [initialize].
///
/// Stored in SQLite's `user_version` pragma. There is no migration path, so a
/// database with any other non-zero version is rejected.
pub const SCHEMA_VERSION: i64 = 1;

/// Create the application tables if they do not exist yet.
///
/// # Errors
/// Returns an:
/// - [Error::UnsupportedSchemaVersion] if the database was created with a different schema version,
/// - or [Error::SqlError] if the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = Transaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    let version: i64 = transaction.query_row("PRAGMA user_version", [], |row| row.get(0))?;

    if version != 0 && version != SCHEMA_VERSION {
        tracing::error!("database has schema version {version}, expected {SCHEMA_VERSION}");
        return Err(Error::UnsupportedSchemaVersion(version));
    }

    create_expense_table(&transaction)?;
    transaction.pragma_update(None, "user_version", SCHEMA_VERSION)?;

    transaction.commit()?;

    Ok(())
}
