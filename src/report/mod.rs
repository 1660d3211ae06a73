//! Report module
//!
//! Provides a page summarising the last seven days of spending with a daily
//! bar chart and per-category totals.

mod aggregation;
mod chart;
mod handlers;

pub use handlers::get_report_page;
