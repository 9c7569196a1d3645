//! Printable expense report
//!
//! Plain-text rendering of a summary plus the transaction detail table, laid
//! out like the original printable document: title, generation date, totals,
//! category breakdown, then transactions newest first.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Transaction;
use crate::summary::Summary;

/// Write the printable report for a summary and its transaction list
///
/// The summary is expected to have been computed over the same (possibly
/// filtered) transactions; the report does not re-aggregate.
pub fn write_report<'a, I, W>(
    summary: &Summary,
    transactions: I,
    generated_on: NaiveDate,
    mut writer: W,
) -> TrackerResult<()>
where
    I: IntoIterator<Item = &'a Transaction>,
    W: Write,
{
    let mut transactions: Vec<&Transaction> = transactions.into_iter().collect();
    if transactions.is_empty() {
        return Err(TrackerError::Export("no transactions to export".into()));
    }
    transactions.sort_by(|a, b| b.date.cmp(&a.date));

    writeln!(writer, "Expense Report")?;
    writeln!(writer, "Generated on: {}", generated_on.format("%Y-%m-%d"))?;
    writeln!(writer)?;

    writeln!(writer, "Summary")?;
    writeln!(writer, "  Total Income:      {}", summary.total_income)?;
    writeln!(writer, "  Total Expenditure: {}", summary.total_expenditure)?;
    writeln!(writer, "  Net Balance:       {}", summary.net_balance)?;
    writeln!(writer)?;

    writeln!(writer, "Category Breakdown")?;
    let mut categories: Vec<_> = summary.category_breakdown.iter().collect();
    categories.sort_by(|a, b| a.0.cmp(b.0));
    for (category, total) in categories {
        writeln!(writer, "  {}: {}", category, total)?;
    }
    writeln!(writer)?;

    writeln!(
        writer,
        "{:<12} {:<12} {:<20} {:<20} {:>12}",
        "Date", "Type", "Category", "Sub-Category", "Amount"
    )?;
    for txn in transactions {
        writeln!(
            writer,
            "{:<12} {:<12} {:<20} {:<20} {:>12}",
            txn.date.format("%Y-%m-%d").to_string(),
            txn.kind.to_string(),
            txn.category,
            txn.sub_category,
            txn.amount.to_string(),
        )?;
    }

    Ok(())
}

/// File name for a report generated on the given date
pub fn report_file_name(today: NaiveDate) -> String {
    format!("expense_report_{}.txt", today.format("%Y-%m-%d"))
}
