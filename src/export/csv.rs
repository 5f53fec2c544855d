//! CSV export functionality
//!
//! Writes a user's expense history as a properly quoted CSV report. Unlike
//! the plain record files under `data/`, the exported report escapes commas
//! and quotes, so names are preserved verbatim.

use crate::error::{PocketbookError, PocketbookResult};
use crate::models::{Expense, DATE_FORMAT};
use std::io::Write;

/// Export expenses to CSV, including soft-deleted entries
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: &mut W) -> PocketbookResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["Index", "Date", "Name", "Category", "Amount", "Deleted"])
        .map_err(|e| PocketbookError::Export(e.to_string()))?;

    for (index, expense) in expenses.iter().enumerate() {
        csv_writer
            .write_record([
                index.to_string(),
                expense.date.format(DATE_FORMAT).to_string(),
                expense.name.clone(),
                expense.category.as_str().to_string(),
                expense.amount.to_record_field(),
                expense.deleted.to_string(),
            ])
            .map_err(|e| PocketbookError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| PocketbookError::Export(e.to_string()))?;

    Ok(())
}
