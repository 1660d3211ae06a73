//! Route handler and view for the seven day report.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    Error, endpoints,
    expense::{ExpenseCategory, ExpensePageState},
    html::{
        BUTTON_DISABLED_STYLE, CARD_STYLE, HeadElement, PAGE_CONTAINER_STYLE, base,
        format_currency_rounded,
    },
    navigation::NavBar,
    report::{
        aggregation::{category_totals, daily_totals, report_start},
        chart::{chart_script, chart_view, daily_totals_chart},
    },
    timezone::local_today,
};

fn report_view(
    category_totals: &[(ExpenseCategory, f64)],
    scripts: &[HeadElement],
    dark_mode: bool,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::REPORT_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-4xl space-y-4"
            {
                h2 class="text-xl font-bold" { "7-Day Expense Report" }

                section class=(CARD_STYLE)
                {
                    (chart_view())
                }

                section id="category-totals" class=(CARD_STYLE)
                {
                    h3 class="mb-2 font-semibold" { "Category Totals:" }

                    @if category_totals.is_empty() {
                        p class="text-gray-500 dark:text-gray-400" { "No expenses recorded!" }
                    } @else {
                        ul class="space-y-1"
                        {
                            @for (category, total) in category_totals {
                                li { (category) ": " (format_currency_rounded(*total)) }
                            }
                        }
                    }
                }

                div class="w-48"
                {
                    button
                        type="button"
                        disabled
                        title="Exporting is not available yet"
                        class=(BUTTON_DISABLED_STYLE)
                    {
                        "Export (Mock)"
                    }
                }
            }
        }
    };

    base("Report", dark_mode, scripts, &content)
}

/// Display the spending for the seven days ending today.
///
/// Publishes the expenses since the start of the report to the shared list
/// and waits for the fetch to finish before rendering.
pub async fn get_report_page(State(state): State<ExpensePageState>) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;

    state
        .expenses
        .filter_since(report_start(today))
        .await
        .map_err(|error| {
            tracing::error!("the task fetching the report expenses did not finish: {error}");
            Error::BackgroundTaskCancelled
        })?;

    let expenses = state.expenses.expenses();
    let dark_mode = state.display.dark_mode();
    let chart = daily_totals_chart(&daily_totals(&expenses, today));
    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        chart_script(&chart, dark_mode),
    ];

    Ok(report_view(&category_totals(&expenses), &scripts, dark_mode).into_response())
}
