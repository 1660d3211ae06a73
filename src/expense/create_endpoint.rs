//! Defines the endpoint for recording a new expense.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    Error, endpoints,
    expense::{ExpenseForm, ExpensePageState},
    timezone::local_today,
};

/// A route handler for recording a new expense dated today, redirects to
/// the expenses view on success.
///
/// A blank title or a missing, zero or negative amount is dropped without a
/// message and the response is `204 No Content`.
pub async fn create_expense_endpoint(
    State(state): State<ExpensePageState>,
    Form(form): Form<ExpenseForm>,
) -> Response {
    let today = match local_today(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_alert_response(),
    };

    let expense = match form.into_expense(today) {
        Ok(Some(expense)) => expense,
        Ok(None) => {
            tracing::debug!("ignoring expense with a blank title or non-positive amount");
            return StatusCode::NO_CONTENT.into_response();
        }
        Err(error) => {
            tracing::warn!("rejected expense form: {error}");
            return error.into_alert_response();
        }
    };

    // Wait for the list to be republished so the page we redirect to sees the new expense.
    if let Err(error) = state.expenses.add(expense).await {
        tracing::error!("the task adding an expense did not finish: {error}");
        return Error::BackgroundTaskCancelled.into_alert_response();
    }

    (
        HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use time::OffsetDateTime;

    use crate::{
        endpoints,
        expense::{
            ExpenseCategory, ExpenseForm, ExpensePageState,
            create_endpoint::create_expense_endpoint, get_test_page_state,
        },
        test_utils::assert_hx_redirect,
    };

    fn form(title: &str, amount: &str, category: &str) -> ExpenseForm {
        ExpenseForm {
            title: title.to_owned(),
            amount: amount.to_owned(),
            category: category.to_owned(),
            notes: String::new(),
        }
    }

    async fn stored_expense_count(state: &ExpensePageState) -> usize {
        state.expenses.refresh_all().await.unwrap();
        state.expenses.expenses().len()
    }

    #[tokio::test]
    async fn can_create_expense() {
        let state = get_test_page_state();

        let response =
            create_expense_endpoint(State(state.clone()), Form(form("Coffee", "4.5", "Food")))
                .await;

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_hx_redirect(&response, endpoints::EXPENSES_VIEW);

        let expenses = state.expenses.expenses();
        assert_eq!(expenses.len(), 1);
        let expense = &expenses[0];
        assert_eq!(expense.title, "Coffee");
        assert_eq!(expense.amount, 4.5);
        assert_eq!(expense.category, ExpenseCategory::Food);
        assert_eq!(expense.notes, None);
        assert_eq!(expense.image_uri, None);
        assert_eq!(expense.date, OffsetDateTime::now_utc().date());
    }

    #[tokio::test]
    async fn invalid_submission_creates_nothing() {
        for (title, amount) in [("", "10"), ("Coffee", "-5"), ("Coffee", "abc")] {
            let state = get_test_page_state();
            let before = state.expenses.expenses();

            let response =
                create_expense_endpoint(State(state.clone()), Form(form(title, amount, "Food")))
                    .await;

            assert_eq!(response.status(), StatusCode::NO_CONTENT);
            assert_eq!(state.expenses.expenses(), before, "the list should not change");
            assert_eq!(stored_expense_count(&state).await, 0);
        }
    }

    #[tokio::test]
    async fn unknown_category_returns_alert() {
        let state = get_test_page_state();

        let response =
            create_expense_endpoint(State(state.clone()), Form(form("Rent", "900", "Housing")))
                .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(stored_expense_count(&state).await, 0);
    }
}
