//! Defines the expense store trait and its SQLite implementation.

use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;
use time::Date;

use crate::{
    Error,
    expense::{
        Expense,
        core::{get_all_expenses, get_expenses_on, get_expenses_since, upsert_expense},
    },
};

/// The typed query surface over stored expenses.
///
/// Implementations are cheap to clone handles to the same underlying store so
/// that a copy can be moved onto another thread for each query.
pub trait ExpenseStore: Clone + Send + Sync + 'static {
    /// Insert `expense`, replacing any stored expense with the same ID.
    fn upsert(&self, expense: &Expense) -> Result<(), Error>;

    /// Retrieve every expense, most recent day first.
    fn get_all(&self) -> Result<Vec<Expense>, Error>;

    /// Retrieve the expenses recorded on exactly `date`.
    fn get_by_date(&self, date: Date) -> Result<Vec<Expense>, Error>;

    /// Retrieve the expenses recorded on or after `date`.
    fn get_since(&self, date: Date) -> Result<Vec<Expense>, Error>;
}

/// Stores expenses in a SQLite database.
///
/// The `expense` table must exist, see [crate::initialize_db].
#[derive(Debug, Clone)]
pub struct SQLiteExpenseStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteExpenseStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)
    }
}

impl ExpenseStore for SQLiteExpenseStore {
    fn upsert(&self, expense: &Expense) -> Result<(), Error> {
        upsert_expense(expense, &*self.lock()?)
    }

    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        get_all_expenses(&*self.lock()?)
    }

    fn get_by_date(&self, date: Date) -> Result<Vec<Expense>, Error> {
        get_expenses_on(date, &*self.lock()?)
    }

    fn get_since(&self, date: Date) -> Result<Vec<Expense>, Error> {
        get_expenses_since(date, &*self.lock()?)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        Error,
        db::initialize,
        expense::{Expense, ExpenseCategory, ExpenseStore, SQLiteExpenseStore},
    };

    fn get_test_store() -> SQLiteExpenseStore {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        SQLiteExpenseStore::new(Arc::new(Mutex::new(conn)))
    }

    #[test]
    fn forwards_queries_to_database() {
        let store = get_test_store();
        let old = Expense::build("Bus", 2.5, ExpenseCategory::Travel, date!(2024 - 01 - 01))
            .finalize();
        let new = Expense::build("Power", 80.0, ExpenseCategory::Utility, date!(2024 - 01 - 05))
            .finalize();

        store.upsert(&old).unwrap();
        store.upsert(&new).unwrap();

        assert_eq!(store.get_all(), Ok(vec![new.clone(), old.clone()]));
        assert_eq!(store.get_by_date(date!(2024 - 01 - 01)), Ok(vec![old]));
        assert_eq!(store.get_since(date!(2024 - 01 - 02)), Ok(vec![new]));
    }

    #[test]
    fn clones_share_the_same_database() {
        let store = get_test_store();
        let other = store.clone();
        let expense = Expense::build("Wages", 500.0, ExpenseCategory::Staff, date!(2024 - 01 - 01))
            .finalize();

        store.upsert(&expense).unwrap();

        assert_eq!(other.get_all(), Ok(vec![expense]));
    }

    #[test]
    fn poisoned_lock_is_an_error() {
        let connection = Arc::new(Mutex::new(Connection::open_in_memory().unwrap()));
        let store = SQLiteExpenseStore::new(connection.clone());

        let _ = std::thread::spawn(move || {
            let _guard = connection.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        assert_eq!(store.get_all(), Err(Error::DatabaseLockError));
    }
}
