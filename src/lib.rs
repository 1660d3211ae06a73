//! Smart Expense Tracker is a small web app for recording day-to-day expenses.
//!
//! Expenses are stored in a local SQLite database and surfaced through a
//! reactive view state that the HTML pages render from:
//!
//! - [expense::ExpenseStore] is the typed query surface over the `expense` table,
//! - [expense::ExpenseRepository] runs those queries on the blocking thread pool,
//! - [expense::ExpenseViewState] holds the last fetched list of expenses in an
//!   [ObservableCell] and republishes it whenever an entry point completes.
//!
//! This library provides a REST API that directly serves HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod db;
mod endpoints;
pub mod expense;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod observable;
mod report;
mod routing;
mod settings;
mod timezone;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::{SCHEMA_VERSION, initialize as initialize_db};
pub use logging::logging_middleware;
pub use observable::{ObservableCell, Subscription};
pub use routing::build_router;
pub use settings::DisplaySettings;

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFound};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A category label did not match any of the known expense categories.
    ///
    /// Unknown labels are always reported, never mapped to a default category.
    #[error("\"{0}\" is not a valid expense category")]
    InvalidCategory(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// A query dispatched to the blocking thread pool was cancelled before
    /// it could finish, e.g. because the runtime is shutting down.
    #[error("the background database task was cancelled")]
    BackgroundTaskCancelled,

    /// The database was created with a schema version this build does not
    /// know how to read.
    #[error("unsupported database schema version {0}, expected {SCHEMA_VERSION}")]
    UnsupportedSchemaVersion(i64),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFound.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            Error::DatabaseLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    fn into_alert_response(self) -> Response {
        match self {
            Error::InvalidCategory(label) => Alert::error(
                "Invalid category",
                &format!("There is no expense category called \"{label}\"."),
            )
            .into_response(StatusCode::BAD_REQUEST),
            Error::InvalidTimezoneError(timezone) => Alert::error(
                "Invalid Timezone Settings",
                &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            )
            .into_response(StatusCode::INTERNAL_SERVER_ERROR),
            _ => Alert::error(
                "Something went wrong",
                "An unexpected error occurred, check the server logs for more details.",
            )
            .into_response(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}
