//! The API endpoints URIs.

/// The root route which redirects to the new expense page.
pub const ROOT: &str = "/";
/// The page for recording a new expense, also the start page.
pub const NEW_EXPENSE_VIEW: &str = "/expenses/new";
/// The page listing the expenses for a single day.
pub const EXPENSES_VIEW: &str = "/expenses";
/// The page summarising the last seven days of expenses.
pub const REPORT_VIEW: &str = "/report";
/// The page for changing display settings.
pub const SETTINGS_VIEW: &str = "/settings";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route to create an expense.
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to switch dark mode on or off.
pub const DARK_MODE_API: &str = "/api/settings/dark_mode";
