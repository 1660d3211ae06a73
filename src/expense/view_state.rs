//! The expense list shared by every page, and the entry points that refresh it.

use std::{future::Future, sync::Arc};

use time::Date;
use tokio::task::JoinHandle;

use crate::{
    Error,
    expense::{Expense, ExpenseRepository, ExpenseStore},
    observable::{ObservableCell, Subscription},
};

/// Holds the list of expenses that is currently being displayed.
///
/// Each entry point starts a background task and returns straight away. When
/// the task finishes, its result replaces the published list and wakes every
/// subscriber. Tasks are not coordinated: if two run at the same time, the
/// list ends up holding whichever result lands last.
///
/// The returned [JoinHandle]s may be dropped, the task keeps running.
#[derive(Debug, Clone)]
pub struct ExpenseViewState<S> {
    repository: ExpenseRepository<S>,
    expenses: ObservableCell<Vec<Expense>>,
}

impl<S: ExpenseStore> ExpenseViewState<S> {
    /// Create a view state with an empty expense list.
    pub fn new(repository: ExpenseRepository<S>) -> Self {
        Self {
            repository,
            expenses: ObservableCell::new(Vec::new()),
        }
    }

    /// The most recently published expense list.
    pub fn expenses(&self) -> Arc<Vec<Expense>> {
        self.expenses.get()
    }

    /// Subscribe to future expense lists.
    pub fn subscribe(&self) -> Subscription<Vec<Expense>> {
        self.expenses.subscribe()
    }

    /// Store `expense`, then publish the full list of expenses.
    ///
    /// The full list replaces whatever was published before, including a
    /// list filtered by [Self::filter_by_date] or [Self::filter_since].
    /// If the expense could not be stored, nothing is published.
    pub fn add(&self, expense: Expense) -> JoinHandle<()> {
        let repository = self.repository.clone();
        let expenses = self.expenses.clone();

        tokio::spawn(async move {
            let id = expense.id.clone();

            if let Err(error) = repository.add(expense).await {
                tracing::error!("could not add expense {id}: {error}");
                return;
            }

            tracing::debug!("added expense {id}");
            publish_result(&expenses, repository.all()).await;
        })
    }

    /// Publish the full list of expenses.
    pub fn refresh_all(&self) -> JoinHandle<()> {
        let repository = self.repository.clone();

        self.spawn_publish(async move { repository.all().await })
    }

    /// Publish the expenses recorded on exactly `date`.
    pub fn filter_by_date(&self, date: Date) -> JoinHandle<()> {
        let repository = self.repository.clone();

        self.spawn_publish(async move { repository.by_date(date).await })
    }

    /// Publish the expenses recorded on or after `date`.
    pub fn filter_since(&self, date: Date) -> JoinHandle<()> {
        let repository = self.repository.clone();

        self.spawn_publish(async move { repository.since(date).await })
    }

    fn spawn_publish<F>(&self, fetch: F) -> JoinHandle<()>
    where
        F: Future<Output = Result<Vec<Expense>, Error>> + Send + 'static,
    {
        let expenses = self.expenses.clone();

        tokio::spawn(async move { publish_result(&expenses, fetch).await })
    }
}

async fn publish_result(
    expenses: &ObservableCell<Vec<Expense>>,
    fetch: impl Future<Output = Result<Vec<Expense>, Error>>,
) {
    match fetch.await {
        Ok(list) => {
            tracing::debug!("publishing {} expenses", list.len());
            expenses.publish(list);
        }
        Err(error) => tracing::error!("could not fetch expenses: {error}"),
    }
}
