//! Expense totals for the seven day report.

use time::{Date, Duration};

use crate::expense::{Expense, ExpenseCategory};

/// The number of days covered by the report, including today.
pub const REPORT_DAYS: i64 = 7;

/// The first day covered by a report ending on `today`.
pub fn report_start(today: Date) -> Date {
    today - Duration::days(REPORT_DAYS - 1)
}

/// The total spent on each of the [REPORT_DAYS] days ending on `today`,
/// oldest day first.
///
/// Days without expenses have a total of zero. Expenses outside the window
/// are ignored.
pub fn daily_totals(expenses: &[Expense], today: Date) -> Vec<(Date, f64)> {
    let start = report_start(today);

    (0..REPORT_DAYS)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let total = expenses
                .iter()
                .filter(|expense| expense.date == date)
                .map(|expense| expense.amount)
                .sum();

            (date, total)
        })
        .collect()
}

/// The total spent per category.
///
/// Categories appear in the order they are first seen in `expenses` and
/// categories without expenses are left out.
pub fn category_totals(expenses: &[Expense]) -> Vec<(ExpenseCategory, f64)> {
    let mut totals: Vec<(ExpenseCategory, f64)> = Vec::new();

    for expense in expenses {
        match totals
            .iter_mut()
            .find(|(category, _)| *category == expense.category)
        {
            Some((_, total)) => *total += expense.amount,
            None => totals.push((expense.category, expense.amount)),
        }
    }

    totals
}
