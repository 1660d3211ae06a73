//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    expense::{create_expense_endpoint, get_create_expense_page, get_expenses_page},
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    report::get_report_page,
    settings::{get_settings_page, set_dark_mode_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::NEW_EXPENSE_VIEW, get(get_create_expense_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(endpoints::REPORT_VIEW, get(get_report_page))
        .route(endpoints::SETTINGS_VIEW, get(get_settings_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(endpoints::EXPENSES_API, post(create_expense_endpoint))
        .route(endpoints::DARK_MODE_API, post(set_dark_mode_endpoint))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the page for recording an expense.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::NEW_EXPENSE_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use scraper::{Html, Selector};

    use crate::{AppState, DisplaySettings, build_router, endpoints};

    fn get_test_server(display: DisplaySettings) -> TestServer {
        let state = AppState::new(Connection::open_in_memory().unwrap(), "Etc/UTC", display)
            .expect("Could not create app state.");

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    fn list_rows(html: &str) -> usize {
        Html::parse_document(html)
            .select(&Selector::parse("tbody tr").unwrap())
            .count()
    }

    #[tokio::test]
    async fn created_expense_shows_in_todays_list() {
        let server = get_test_server(DisplaySettings::default());

        server
            .post(endpoints::EXPENSES_API)
            .form(&[
                ("title", "Printer paper"),
                ("amount", "250"),
                ("category", "Utility"),
                ("notes", ""),
            ])
            .await
            .assert_status(StatusCode::SEE_OTHER);

        let response = server.get(endpoints::EXPENSES_VIEW).await;

        response.assert_status_ok();
        let text = response.text();
        assert_eq!(list_rows(&text), 1);
        assert!(text.contains("Printer paper"));
        assert!(text.contains("Total: ₹250.00, Count: 1"));
    }

    #[tokio::test]
    async fn invalid_expense_is_dropped_silently() {
        let server = get_test_server(DisplaySettings::default());

        server
            .post(endpoints::EXPENSES_API)
            .form(&[("title", ""), ("amount", "10"), ("category", "Food")])
            .await
            .assert_status(StatusCode::NO_CONTENT);

        let response = server.get(endpoints::EXPENSES_VIEW).await;

        assert!(response.text().contains("No expenses recorded!"));
    }

    #[tokio::test]
    async fn dark_mode_applies_to_every_page() {
        let server = get_test_server(DisplaySettings::default());

        server
            .post(endpoints::DARK_MODE_API)
            .form(&[("dark_mode", "on")])
            .await
            .assert_status_ok();

        for page in [
            endpoints::NEW_EXPENSE_VIEW,
            endpoints::EXPENSES_VIEW,
            endpoints::REPORT_VIEW,
            endpoints::SETTINGS_VIEW,
        ] {
            let text = server.get(page).await.text();
            assert!(
                text.contains(r#"<html lang="en" class="dark">"#),
                "{page} is not dark"
            );
        }
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server(DisplaySettings::default());

        server
            .get("/definitely/not/here")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
