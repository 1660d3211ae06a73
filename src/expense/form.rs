//! The form submitted from the new expense page and its validation.

use serde::{Deserialize, Serialize};
use time::Date;
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    Error,
    expense::{Expense, ExpenseCategory},
};

/// The maximum number of characters kept from the notes field.
pub const NOTES_MAX_LENGTH: usize = 100;

/// The raw form data for creating an expense.
///
/// Fields are kept as strings so that bad input can be dropped quietly
/// instead of being rejected by the extractor.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExpenseForm {
    /// What the money was spent on.
    #[serde(default)]
    pub title: String,
    /// The amount spent, as typed by the user.
    #[serde(default)]
    pub amount: String,
    /// The label of the selected [ExpenseCategory].
    #[serde(default)]
    pub category: String,
    /// Optional free-form notes.
    #[serde(default)]
    pub notes: String,
}

impl ExpenseForm {
    /// Turn the form into a new expense dated `today`.
    ///
    /// Returns `Ok(None)` when the title is blank or the amount is not a
    /// positive number. An unparseable amount counts as zero.
    ///
    /// Notes are truncated to [NOTES_MAX_LENGTH] characters and blank notes
    /// are stored as `None`.
    ///
    /// # Errors
    /// Returns an [Error::InvalidCategory] if the category label does not match a category.
    pub fn into_expense(self, today: Date) -> Result<Option<Expense>, Error> {
        let category: ExpenseCategory = self.category.parse()?;
        let amount = parse_amount(&self.amount);

        if self.title.trim().is_empty() || amount <= 0.0 {
            return Ok(None);
        }

        let notes = truncate_notes(&self.notes);
        let notes = (!notes.trim().is_empty()).then_some(notes);

        Ok(Some(
            Expense::build(&self.title, amount, category, today)
                .notes(notes)
                .finalize(),
        ))
    }
}

fn parse_amount(amount: &str) -> f64 {
    amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(0.0)
}

/// Keep at most [NOTES_MAX_LENGTH] user-perceived characters.
pub fn truncate_notes(notes: &str) -> String {
    notes.graphemes(true).take(NOTES_MAX_LENGTH).collect()
}
