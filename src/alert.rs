//! Alert system for displaying error messages to users.
//!
//! Alerts are returned as HTML fragments by form endpoints. Forms target the
//! `#alert-container` element in [crate::html::base] with `hx-target-error`,
//! so an error response replaces the contents of that container. The close
//! button removes the alert again.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

/// An error message with a short summary and optional details.
#[derive(Debug, Clone)]
pub struct Alert<'a> {
    pub message: &'a str,
    pub details: &'a str,
}

impl<'a> Alert<'a> {
    /// Create a new error alert
    pub fn error(message: &'a str, details: &'a str) -> Self {
        Self { message, details }
    }

    pub fn into_html(self) -> Markup {
        html! {
            div
                role="alert"
                class="flex items-start p-4 mb-4 rounded-lg text-red-800 bg-red-50
                    dark:bg-gray-800 dark:text-red-400 border border-red-300
                    dark:border-red-800 shadow-lg"
            {
                div class="ms-3 text-sm font-medium grow"
                {
                    p class="font-semibold" { (self.message) }

                    @if !self.details.is_empty() {
                        p { (self.details) }
                    }
                }

                button
                    type="button"
                    class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex items-center justify-center h-8 w-8"
                    aria-label="Close"
                    onclick="this.parentElement.remove()"
                {
                    "✕"
                }
            }
        }
    }

    pub fn into_response(self, status_code: StatusCode) -> Response {
        (status_code, self.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use scraper::Selector;

    use crate::{
        alert::Alert,
        test_utils::{assert_valid_html, parse_html_fragment},
    };

    #[tokio::test]
    async fn error_alert_contains_message_and_details() {
        let response = Alert::error("Invalid category", "No such category")
            .into_response(StatusCode::BAD_REQUEST);

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let fragment = parse_html_fragment(response).await;
        assert_valid_html(&fragment);
        let text = fragment
            .select(&Selector::parse("div[role=alert]").unwrap())
            .next()
            .expect("no alert found")
            .text()
            .collect::<String>();
        assert!(text.contains("Invalid category"), "got alert text {text:?}");
        assert!(text.contains("No such category"), "got alert text {text:?}");
    }
}
