//! Report formatters
//!
//! Thin, pure shaping of the aggregation engine's output plus the (possibly
//! filtered) transaction list: CSV text, a printable plain-text report, and
//! chart-ready series. Nothing in here recomputes aggregates on its own.

pub mod chart;
pub mod csv;
pub mod report;

pub use self::chart::{daily_flow, expenditure_by_category, ChartSlice, DailyFlow};
pub use self::csv::{csv_file_name, write_transactions_csv};
pub use self::report::{report_file_name, write_report};
