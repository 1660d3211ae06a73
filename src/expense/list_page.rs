//! Defines the route handler for the page that lists the expenses for one day.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    Error, endpoints,
    expense::{Expense, ExpensePageState},
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base, format_currency,
    },
    navigation::NavBar,
    timezone::local_today,
};

const DATE_FORMAT: &[BorrowedFormatItem] =
    format_description!("[year]-[month repr:numerical padding:zero]-[day padding:zero]");

/// The query parameters for the expenses page.
#[derive(Debug, Default, Deserialize)]
pub struct ExpensesQuery {
    /// The day to show as "YYYY-MM-DD", defaults to today.
    pub date: Option<String>,
}

/// Parse the requested day, falling back to `today` when it is missing or malformed.
fn selected_date(query: &ExpensesQuery, today: Date) -> Date {
    let Some(text) = query.date.as_deref().filter(|text| !text.is_empty()) else {
        return today;
    };

    Date::parse(text, DATE_FORMAT).unwrap_or_else(|error| {
        tracing::warn!("ignoring malformed date {text:?}: {error}");
        today
    })
}

fn expense_row(expense: &Expense) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            td class=(TABLE_CELL_STYLE) { (expense.title) }
            td class=(TABLE_CELL_STYLE) { (format_currency(expense.amount)) }
            td class=(TABLE_CELL_STYLE) { (expense.category) }
            td class=(TABLE_CELL_STYLE) { (expense.notes.as_deref().unwrap_or_default()) }
            td class=(TABLE_CELL_STYLE) { (expense.date) }
        }
    }
}

fn expenses_view(date: Date, expenses: &[Expense], dark_mode: bool) -> Markup {
    let nav_bar = NavBar::new(endpoints::EXPENSES_VIEW).into_html();
    let total: f64 = expenses.iter().map(|expense| expense.amount).sum();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-4xl space-y-4"
            {
                h2 class="text-xl font-bold" { "Expenses for " (date) }

                form
                    method="get"
                    action=(endpoints::EXPENSES_VIEW)
                    class="flex gap-2 items-end"
                {
                    input
                        type="date"
                        name="date"
                        id="date"
                        value=(date)
                        class=(FORM_TEXT_INPUT_STYLE);

                    div class="w-24"
                    {
                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Go" }
                    }
                }

                div id="summary" class=(CARD_STYLE)
                {
                    p class="font-semibold"
                    {
                        "Total: " (format_currency(total)) ", Count: " (expenses.len())
                    }
                }

                @if expenses.is_empty() {
                    p id="empty-message" class="text-center text-gray-500 dark:text-gray-400"
                    {
                        "No expenses recorded!"
                    }
                } @else {
                    div class="relative overflow-x-auto shadow-md rounded"
                    {
                        table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
                        {
                            thead class=(TABLE_HEADER_STYLE)
                            {
                                tr
                                {
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Title" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Notes" }
                                    th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                                }
                            }

                            tbody
                            {
                                @for expense in expenses {
                                    (expense_row(expense))
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    base("Expenses", dark_mode, &[], &content)
}

/// Renders the expenses recorded on the requested day.
///
/// Publishes the day's expenses to the shared list and waits for the fetch
/// to finish before rendering the list.
pub async fn get_expenses_page(
    State(state): State<ExpensePageState>,
    Query(query): Query<ExpensesQuery>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;
    let date = selected_date(&query, today);

    state
        .expenses
        .filter_by_date(date)
        .await
        .map_err(|error| {
            tracing::error!("the task fetching expenses for {date} did not finish: {error}");
            Error::BackgroundTaskCancelled
        })?;

    let expenses = state.expenses.expenses();

    Ok(expenses_view(date, &expenses, state.display.dark_mode()).into_response())
}

#[cfg(test)]
mod tests {
    use axum::extract::{Query, State};
    use scraper::{Html, Selector};
    use time::{OffsetDateTime, macros::date};

    use crate::{
        expense::{
            Expense, ExpenseCategory, get_test_page_state,
            list_page::{ExpensesQuery, get_expenses_page, selected_date},
        },
        test_utils::{assert_status_ok, assert_valid_html, parse_html_document},
    };

    fn text_of(document: &Html, selector: &str) -> String {
        document
            .select(&Selector::parse(selector).unwrap())
            .next()
            .unwrap_or_else(|| panic!("nothing matches {selector}"))
            .text()
            .collect::<String>()
            .trim()
            .to_owned()
    }

    fn query(date: &str) -> Query<ExpensesQuery> {
        Query(ExpensesQuery {
            date: Some(date.to_owned()),
        })
    }

    #[test]
    fn parses_requested_date() {
        let today = date!(2024 - 05 - 05);

        assert_eq!(
            selected_date(
                &ExpensesQuery {
                    date: Some("2024-01-31".to_owned())
                },
                today
            ),
            date!(2024 - 01 - 31)
        );
    }

    #[test]
    fn missing_or_malformed_date_is_today() {
        let today = date!(2024 - 05 - 05);

        for date in [None, Some(""), Some("31/01/2024"), Some("2024-02-30")] {
            let query = ExpensesQuery {
                date: date.map(str::to_owned),
            };

            assert_eq!(selected_date(&query, today), today);
        }
    }

    #[tokio::test]
    async fn shows_expenses_for_requested_day() {
        let state = get_test_page_state();
        state
            .expenses
            .add(Expense::build("Train", 30.0, ExpenseCategory::Travel, date!(2024 - 01 - 31))
                .notes(Some("Return ticket".to_owned()))
                .finalize())
            .await
            .unwrap();
        state
            .expenses
            .add(Expense::build("Tea", 2.5, ExpenseCategory::Food, date!(2024 - 01 - 31)).finalize())
            .await
            .unwrap();
        state
            .expenses
            .add(Expense::build("Hotel", 200.0, ExpenseCategory::Travel, date!(2024 - 02 - 01))
                .finalize())
            .await
            .unwrap();

        let response = get_expenses_page(State(state.clone()), query("2024-01-31"))
            .await
            .unwrap();

        assert_status_ok(&response);
        let document = parse_html_document(response).await;
        assert_valid_html(&document);
        assert_eq!(text_of(&document, "h2"), "Expenses for 2024-01-31");
        assert_eq!(text_of(&document, "#summary p"), "Total: ₹32.50, Count: 2");
        let rows = document.select(&Selector::parse("tbody tr").unwrap()).count();
        assert_eq!(rows, 2);
        assert!(text_of(&document, "tbody").contains("Return ticket"));

        // The shared list now holds the filtered day.
        assert_eq!(state.expenses.expenses().len(), 2);
    }

    #[tokio::test]
    async fn shows_empty_message() {
        let state = get_test_page_state();

        let response = get_expenses_page(State(state), query("2024-01-31"))
            .await
            .unwrap();

        let document = parse_html_document(response).await;
        assert_eq!(text_of(&document, "#empty-message"), "No expenses recorded!");
        assert_eq!(text_of(&document, "#summary p"), "Total: ₹0.00, Count: 0");
    }

    #[tokio::test]
    async fn defaults_to_today() {
        let state = get_test_page_state();

        let response = get_expenses_page(State(state), Query(ExpensesQuery::default()))
            .await
            .unwrap();

        let document = parse_html_document(response).await;
        let today = OffsetDateTime::now_utc().date();
        assert_eq!(text_of(&document, "h2"), format!("Expenses for {today}"));
    }
}
