//! Display settings and the page for toggling dark mode.
//!
//! The setting lives in memory only and resets when the server restarts.

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use axum_htmx::HxRefresh;
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, endpoints,
    html::{CARD_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
};

/// Process-wide display preferences shared by every page.
///
/// Clones share the same underlying setting.
#[derive(Debug, Clone, Default)]
pub struct DisplaySettings {
    dark_mode: Arc<AtomicBool>,
}

impl DisplaySettings {
    /// Create settings with dark mode initially set to `dark_mode`.
    pub fn new(dark_mode: bool) -> Self {
        Self {
            dark_mode: Arc::new(AtomicBool::new(dark_mode)),
        }
    }

    /// Whether pages should be rendered with the dark theme.
    pub fn dark_mode(&self) -> bool {
        self.dark_mode.load(Ordering::Relaxed)
    }

    /// Switch the dark theme on or off for every page.
    pub fn set_dark_mode(&self, dark_mode: bool) {
        self.dark_mode.store(dark_mode, Ordering::Relaxed);
    }
}

impl FromRef<AppState> for DisplaySettings {
    fn from_ref(state: &AppState) -> Self {
        state.display.clone()
    }
}

/// The form data for the dark mode toggle.
///
/// A checkbox is only included in the form data when it is checked.
#[derive(Debug, Default, Deserialize)]
pub struct DarkModeForm {
    /// Present (usually "on") when dark mode is selected.
    #[serde(default)]
    pub dark_mode: Option<String>,
}

fn settings_view(dark_mode: bool) -> Markup {
    let nav_bar = NavBar::new(endpoints::SETTINGS_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-md space-y-4"
            {
                h2 class="text-xl font-bold" { "Settings" }

                form
                    hx-post=(endpoints::DARK_MODE_API)
                    hx-trigger="change"
                    class=(CARD_STYLE)
                {
                    label
                        for="dark_mode"
                        class="flex items-center justify-between cursor-pointer"
                    {
                        span class="text-sm font-medium" { "Dark Mode" }

                        input
                            type="checkbox"
                            name="dark_mode"
                            id="dark_mode"
                            checked[dark_mode]
                            class="w-4 h-4 text-blue-600 rounded";
                    }
                }
            }
        }
    };

    base("Settings", dark_mode, &[], &content)
}

/// Renders the settings page.
pub async fn get_settings_page(State(settings): State<DisplaySettings>) -> Response {
    settings_view(settings.dark_mode()).into_response()
}

/// Sets dark mode from the toggle and tells HTMX to reload the page.
pub async fn set_dark_mode_endpoint(
    State(settings): State<DisplaySettings>,
    Form(form): Form<DarkModeForm>,
) -> Response {
    let dark_mode = form.dark_mode.is_some();
    settings.set_dark_mode(dark_mode);
    tracing::info!("dark mode set to {dark_mode}");

    (HxRefresh(true), StatusCode::OK).into_response()
}
