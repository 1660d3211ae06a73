//! Runs expense store queries on the blocking thread pool.

use time::Date;
use tokio::task::{JoinError, spawn_blocking};

use crate::{
    Error,
    expense::{Expense, ExpenseStore},
};

/// Forwards calls to an [ExpenseStore], running each query with
/// [spawn_blocking] so that SQLite I/O never blocks an async worker thread.
///
/// Results and errors from the store are returned unchanged.
#[derive(Debug, Clone)]
pub struct ExpenseRepository<S> {
    store: S,
}

impl<S: ExpenseStore> ExpenseRepository<S> {
    /// Create a repository backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Insert `expense`, replacing any stored expense with the same ID.
    pub async fn add(&self, expense: Expense) -> Result<(), Error> {
        self.run(move |store| store.upsert(&expense)).await
    }

    /// Fetch every expense, most recent day first.
    pub async fn all(&self) -> Result<Vec<Expense>, Error> {
        self.run(|store| store.get_all()).await
    }

    /// Fetch the expenses recorded on exactly `date`.
    pub async fn by_date(&self, date: Date) -> Result<Vec<Expense>, Error> {
        self.run(move |store| store.get_by_date(date)).await
    }

    /// Fetch the expenses recorded on or after `date`.
    pub async fn since(&self, date: Date) -> Result<Vec<Expense>, Error> {
        self.run(move |store| store.get_since(date)).await
    }

    async fn run<T, F>(&self, query: F) -> Result<T, Error>
    where
        T: Send + 'static,
        F: FnOnce(&S) -> Result<T, Error> + Send + 'static,
    {
        let store = self.store.clone();

        spawn_blocking(move || query(&store))
            .await
            .unwrap_or_else(propagate_join_error)
    }
}

/// A panic in the blocking task is re-raised in the caller, a cancelled task
/// becomes an error.
fn propagate_join_error<T>(error: JoinError) -> Result<T, Error> {
    if error.is_panic() {
        std::panic::resume_unwind(error.into_panic());
    }

    tracing::error!("blocking database task did not complete: {error}");
    Err(Error::BackgroundTaskCancelled)
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        thread::{self, ThreadId},
    };

    use rusqlite::Connection;
    use time::{Date, macros::date};

    use crate::{
        Error,
        db::initialize,
        expense::{
            Expense, ExpenseCategory, ExpenseRepository, ExpenseStore, SQLiteExpenseStore,
        },
    };

    fn get_test_repository() -> ExpenseRepository<SQLiteExpenseStore> {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();
        ExpenseRepository::new(SQLiteExpenseStore::new(Arc::new(Mutex::new(conn))))
    }

    #[tokio::test]
    async fn add_then_query() {
        let repository = get_test_repository();
        let first = Expense::build("Hotel", 120.0, ExpenseCategory::Travel, date!(2024 - 01 - 01))
            .finalize();
        let second = Expense::build("Snacks", 6.0, ExpenseCategory::Food, date!(2024 - 01 - 02))
            .finalize();

        repository.add(first.clone()).await.unwrap();
        repository.add(second.clone()).await.unwrap();

        assert_eq!(
            repository.all().await,
            Ok(vec![second.clone(), first.clone()])
        );
        assert_eq!(
            repository.by_date(date!(2024 - 01 - 01)).await,
            Ok(vec![first])
        );
        assert_eq!(
            repository.since(date!(2024 - 01 - 02)).await,
            Ok(vec![second])
        );
    }

    /// Records which thread each query ran on.
    #[derive(Clone, Default)]
    struct ThreadRecordingStore {
        threads: Arc<Mutex<Vec<ThreadId>>>,
    }

    impl ThreadRecordingStore {
        fn record(&self) {
            self.threads.lock().unwrap().push(thread::current().id());
        }
    }

    impl ExpenseStore for ThreadRecordingStore {
        fn upsert(&self, _: &Expense) -> Result<(), Error> {
            self.record();
            Ok(())
        }

        fn get_all(&self) -> Result<Vec<Expense>, Error> {
            self.record();
            Ok(vec![])
        }

        fn get_by_date(&self, _: Date) -> Result<Vec<Expense>, Error> {
            self.record();
            Ok(vec![])
        }

        fn get_since(&self, _: Date) -> Result<Vec<Expense>, Error> {
            self.record();
            Err(Error::DatabaseLockError)
        }
    }

    #[tokio::test]
    async fn queries_run_off_the_calling_thread() {
        let store = ThreadRecordingStore::default();
        let repository = ExpenseRepository::new(store.clone());
        let caller = thread::current().id();

        repository.all().await.unwrap();
        repository.by_date(date!(2024 - 01 - 01)).await.unwrap();

        let threads = store.threads.lock().unwrap().clone();
        assert_eq!(threads.len(), 2);
        assert!(
            threads.iter().all(|thread_id| *thread_id != caller),
            "want every query to run on a blocking pool thread"
        );
    }

    #[tokio::test]
    async fn store_errors_are_returned_unchanged() {
        let repository = ExpenseRepository::new(ThreadRecordingStore::default());

        let result = repository.since(date!(2024 - 01 - 01)).await;

        assert_eq!(result, Err(Error::DatabaseLockError));
    }
}
