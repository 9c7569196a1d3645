//! Personal income/expenditure tracker core
//!
//! This library provides the aggregation and filtering engine behind a
//! personal finance tracker: an ordered transaction store over a pluggable
//! key-value persistence port, a one-shot normalization pass for legacy
//! records, filter-option derivation with selection sets, and the pure
//! summary computation the reports are built from.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: data-directory path resolution
//! - `error`: custom error types
//! - `models`: core data models (ids, money, periods, transactions)
//! - `storage`: key-value persistence port with file and in-memory backends
//! - `store`: the owning, insertion-ordered transaction store
//! - `migration`: one-shot legacy data normalization
//! - `filter`: filter-option derivation and selection tracking
//! - `summary`: the aggregation engine
//! - `export`: CSV, printable report, and chart-series formatters
//!
//! # Example
//!
//! ```rust
//! use expense_tracker::filter::FilterSelection;
//! use expense_tracker::models::{Money, NewTransaction, TransactionType};
//! use expense_tracker::storage::MemoryStore;
//! use expense_tracker::store::TransactionStore;
//! use expense_tracker::summary::Summary;
//!
//! let mut store = TransactionStore::open_with_migration(MemoryStore::new());
//! store
//!     .add(NewTransaction::new(Money::from_units(500), "Salary", "Job")
//!         .of_kind(TransactionType::Income))
//!     .unwrap();
//! store
//!     .add(NewTransaction::new(Money::from_units(200), "Food", "Groceries"))
//!     .unwrap();
//!
//! let selection = FilterSelection::new();
//! let summary = Summary::compute(selection.apply(store.transactions()));
//! assert_eq!(summary.net_balance, Money::from_units(300));
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod filter;
pub mod migration;
pub mod models;
pub mod storage;
pub mod store;
pub mod summary;

pub use error::{TrackerError, TrackerResult};
pub use filter::{available_categories, available_periods, CategoryOption, FilterSelection};
pub use migration::{migrate_legacy_amounts, MigrationOutcome};
pub use models::{Money, NewTransaction, Period, Transaction, TransactionId, TransactionType};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::TransactionStore;
pub use summary::Summary;
