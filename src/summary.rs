//! Aggregation engine
//!
//! Pure, stateless computation of derived totals from a transaction list.
//! Works on the full store snapshot or on a filtered subset; it never
//! mutates its input and never fails — an empty list is a valid input
//! producing an all-zero summary.

use std::collections::HashMap;

use crate::models::{Money, Transaction, TransactionType};

/// Derived totals and breakdowns; recomputed on every query, never persisted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    /// Sum of amounts over income transactions
    pub total_income: Money,

    /// Sum of amounts over expenditure transactions
    pub total_expenditure: Money,

    /// `total_income - total_expenditure`
    pub net_balance: Money,

    /// Signed total per category (+income, -expenditure)
    pub category_breakdown: HashMap<String, Money>,

    /// Signed total per sub-category name
    ///
    /// Keys are not qualified by category: two categories sharing a
    /// sub-category name merge into one entry.
    pub sub_category_breakdown: HashMap<String, Money>,
}

impl Summary {
    /// Compute a summary over any iterable of transactions
    ///
    /// Accepts both `&[Transaction]` and the `Vec<&Transaction>` a filter
    /// selection produces. Each transaction contributes exactly once.
    pub fn compute<'a, I>(transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut summary = Self::default();

        for txn in transactions {
            match txn.kind {
                TransactionType::Income => summary.total_income += txn.amount,
                TransactionType::Expenditure => summary.total_expenditure += txn.amount,
            }

            let signed = txn.signed_amount();
            *summary
                .category_breakdown
                .entry(txn.category.clone())
                .or_insert_with(Money::zero) += signed;
            *summary
                .sub_category_breakdown
                .entry(txn.sub_category.clone())
                .or_insert_with(Money::zero) += signed;
        }

        summary.net_balance = summary.total_income - summary.total_expenditure;
        summary
    }
}
