//! Core data models for the expense tracker

pub mod ids;
pub mod money;
pub mod period;
pub mod transaction;

pub use ids::TransactionId;
pub use money::Money;
pub use period::Period;
pub use transaction::{NewTransaction, Transaction, TransactionType};
