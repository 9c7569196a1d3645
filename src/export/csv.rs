//! CSV export
//!
//! Builds the CSV text for a transaction list. Works on the full list or on
//! a filtered subset; the caller decides where the bytes go.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;

/// Write transactions as CSV: Date, Type, Category, Sub-Category, Amount
///
/// Amounts are unsigned magnitudes with two decimals; direction is in the
/// Type column. An empty input is an export error so callers can tell the
/// user there is nothing to export.
pub fn write_transactions_csv<'a, I, W>(transactions: I, writer: W) -> TrackerResult<()>
where
    I: IntoIterator<Item = &'a Transaction>,
    W: Write,
{
    let transactions: Vec<&Transaction> = transactions.into_iter().collect();
    if transactions.is_empty() {
        return Err(TrackerError::Export("no transactions to export".into()));
    }

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["Date", "Type", "Category", "Sub-Category", "Amount"])?;

    for txn in transactions {
        wtr.write_record([
            txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.to_string(),
            txn.category.clone(),
            txn.sub_category.clone(),
            txn.amount.to_string(),
        ])?;
    }

    wtr.flush().map_err(|e| TrackerError::Export(e.to_string()))?;
    Ok(())
}

/// File name for a CSV export generated on the given date
pub fn csv_file_name(today: NaiveDate) -> String {
    format!("expenses_{}.csv", today.format("%Y-%m-%d"))
}
