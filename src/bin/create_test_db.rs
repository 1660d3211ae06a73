use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use time::{Duration, OffsetDateTime};

use smart_expense_tracker::{
    expense::{Expense, ExpenseCategory, count_expenses, upsert_expense},
    initialize_db,
};

/// A utility for creating a test database for smart_expense_tracker.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Demo expenses as (days ago, title, amount, category, notes).
const DEMO_EXPENSES: [(i64, &str, f64, ExpenseCategory, Option<&str>); 10] = [
    (0, "Chai and samosa", 60.0, ExpenseCategory::Food, None),
    (0, "Auto rickshaw", 120.0, ExpenseCategory::Travel, Some("Office to client site")),
    (1, "Electricity bill", 2350.0, ExpenseCategory::Utility, None),
    (1, "Team lunch", 1840.5, ExpenseCategory::Food, Some("Four people")),
    (2, "Cleaner wages", 3000.0, ExpenseCategory::Staff, None),
    (3, "Train ticket", 745.0, ExpenseCategory::Travel, Some("Return trip")),
    (4, "Broadband", 999.0, ExpenseCategory::Utility, None),
    (5, "Groceries", 1265.75, ExpenseCategory::Food, None),
    (6, "Courier", 210.0, ExpenseCategory::Staff, Some("Documents to accountant")),
    (9, "Water can delivery", 90.0, ExpenseCategory::Utility, None),
];

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating demo expenses...");

    let today = OffsetDateTime::now_utc().date();

    for (days_ago, title, amount, category, notes) in DEMO_EXPENSES {
        let expense = Expense::build(title, amount, category, today - Duration::days(days_ago))
            .notes(notes.map(str::to_owned))
            .finalize();

        upsert_expense(&expense, &conn)?;
    }

    println!("Created {} expenses.", count_expenses(&conn)?);
    println!("Success!");

    Ok(())
}
