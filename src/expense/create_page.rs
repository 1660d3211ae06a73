//! Defines the route handler for the page for recording a new expense.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::Date;

use crate::{
    Error, endpoints,
    expense::{Expense, ExpenseCategory, ExpensePageState, NOTES_MAX_LENGTH},
    html::{
        BUTTON_PRIMARY_STYLE, CARD_STYLE, FORM_CONTAINER_STYLE, FORM_LABEL_STYLE,
        FORM_TEXT_INPUT_STYLE, base, currency_input_styles, format_currency, loading_spinner,
    },
    navigation::NavBar,
    timezone::local_today,
};

/// The sum of the amounts of `expenses` recorded on `today`.
fn total_spent_on(expenses: &[Expense], today: Date) -> f64 {
    expenses
        .iter()
        .filter(|expense| expense.date == today)
        .map(|expense| expense.amount)
        .sum()
}

fn create_expense_view(total_today: f64, dark_mode: bool) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_EXPENSE_VIEW).into_html();
    let spinner = loading_spinner();

    let content = html! {
        (nav_bar)

        div class=(FORM_CONTAINER_STYLE)
        {
            div id="total-today" class=(format!("{CARD_STYLE} mb-6 text-center"))
            {
                p class="text-sm font-medium text-gray-500 dark:text-gray-400" { "Total Spent Today" }
                p class="text-3xl font-bold" { (format_currency(total_today)) }
            }

            form
                hx-post=(endpoints::EXPENSES_API)
                hx-target-error="#alert-container"
                class="w-full space-y-4 md:space-y-6"
            {
                h2 class="text-xl font-bold" { "New Expense" }

                div
                {
                    label for="title" class=(FORM_LABEL_STYLE) { "Title" }

                    input
                        name="title"
                        id="title"
                        type="text"
                        placeholder="What did you spend on?"
                        required
                        autofocus
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                    // w-full needed to ensure input takes the full width when prefilled with a value
                    div class="input-wrapper w-full"
                    {
                        input
                            name="amount"
                            id="amount"
                            type="number"
                            step="0.01"
                            min="0.01"
                            placeholder="0.00"
                            required
                            class=(FORM_TEXT_INPUT_STYLE);
                    }
                }

                div
                {
                    label for="category" class=(FORM_LABEL_STYLE) { "Category" }

                    select
                        name="category"
                        id="category"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for category in ExpenseCategory::ALL {
                            option
                                value=(category)
                                selected[category == ExpenseCategory::default()]
                            {
                                (category)
                            }
                        }
                    }
                }

                div
                {
                    label for="notes" class=(FORM_LABEL_STYLE) { "Notes (optional)" }

                    textarea
                        name="notes"
                        id="notes"
                        rows="3"
                        maxlength=(NOTES_MAX_LENGTH)
                        placeholder="Anything worth remembering"
                        class=(FORM_TEXT_INPUT_STYLE)
                    {}
                }

                button type="submit" id="submit-button" tabindex="0" class=(BUTTON_PRIMARY_STYLE)
                {
                    span
                        id="indicator"
                        class="inline htmx-indicator"
                    {
                        (spinner)
                    }
                    " Add Expense"
                }
            }
        }
    };

    base("New Expense", dark_mode, &[currency_input_styles()], &content)
}

/// Renders the page for recording an expense.
///
/// The total for today is taken from the expense list as it currently
/// stands, no new fetch is started.
pub async fn get_create_expense_page(
    State(state): State<ExpensePageState>,
) -> Result<Response, Error> {
    let today = local_today(&state.local_timezone)?;
    let total_today = total_spent_on(&state.expenses.expenses(), today);

    Ok(create_expense_view(total_today, state.display.dark_mode()).into_response())
}
