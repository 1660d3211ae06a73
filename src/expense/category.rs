//! The fixed set of expense categories.

use std::{fmt::Display, str::FromStr};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::Error;

/// What an expense was for.
///
/// Categories are stored in the database as their [label](ExpenseCategory::label).
///
/// [ExpenseCategory::Staff] is the default, preselected in the entry form.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ExpenseCategory {
    /// Expenses related to staff.
    #[default]
    Staff,
    /// Expenses related to travel.
    Travel,
    /// Expenses related to food.
    Food,
    /// Expenses related to utilities.
    Utility,
}

impl ExpenseCategory {
    /// Every category, in the order they are offered in the entry form.
    pub const ALL: [ExpenseCategory; 4] = [
        ExpenseCategory::Staff,
        ExpenseCategory::Travel,
        ExpenseCategory::Food,
        ExpenseCategory::Utility,
    ];

    /// The string stored in the database and shown to users.
    pub fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::Staff => "Staff",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Utility => "Utility",
        }
    }
}

impl FromStr for ExpenseCategory {
    type Err = Error;

    /// Look up a category by its exact label.
    ///
    /// # Errors
    /// Returns an [Error::InvalidCategory] if `label` does not match a category.
    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "Staff" => Ok(ExpenseCategory::Staff),
            "Travel" => Ok(ExpenseCategory::Travel),
            "Food" => Ok(ExpenseCategory::Food),
            "Utility" => Ok(ExpenseCategory::Utility),
            unknown => Err(Error::InvalidCategory(unknown.to_owned())),
        }
    }
}

impl Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl ToSql for ExpenseCategory {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.label()))
    }
}

impl FromSql for ExpenseCategory {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let label = value.as_str()?;

        label
            .parse()
            .map_err(|error: Error| FromSqlError::Other(Box::new(error)))
    }
}
