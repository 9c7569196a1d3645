//! Filter selector
//!
//! Derives the available filter options (year-month periods and categories)
//! from a transaction snapshot and tracks the user's active selection for
//! each dimension. An empty selection means "no filter applied", never
//! "nothing included".

use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Money, Period, Transaction};

/// A category offered for filtering, with its sub-categories and running total
///
/// The total is signed by transaction type (income positive, expenditure
/// negative) across all transactions in the category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryOption {
    pub name: String,
    /// Distinct sub-categories, sorted ascending
    pub sub_categories: Vec<String>,
    pub total: Money,
}

/// Distinct year-month periods present in the snapshot, most recent first
///
/// Recomputed from scratch on every call; the result restarts from the
/// current list whenever the input changes.
pub fn available_periods(transactions: &[Transaction]) -> Vec<Period> {
    let distinct: BTreeSet<Period> = transactions.iter().map(Transaction::period).collect();
    distinct.into_iter().rev().collect()
}

/// Distinct categories present in the snapshot, sorted ascending by name
pub fn available_categories(transactions: &[Transaction]) -> Vec<CategoryOption> {
    let mut by_name: BTreeMap<&str, (BTreeSet<&str>, Money)> = BTreeMap::new();

    for txn in transactions {
        let entry = by_name
            .entry(txn.category.as_str())
            .or_insert_with(|| (BTreeSet::new(), Money::zero()));
        entry.0.insert(txn.sub_category.as_str());
        entry.1 += txn.signed_amount();
    }

    by_name
        .into_iter()
        .map(|(name, (sub_categories, total))| CategoryOption {
            name: name.to_string(),
            sub_categories: sub_categories.into_iter().map(str::to_string).collect(),
            total,
        })
        .collect()
}

/// The user's active filter selection: periods and categories
///
/// The two dimensions are independent; a transaction must pass both to be
/// included downstream.
#[derive(Debug, Clone, Default)]
pub struct FilterSelection {
    periods: BTreeSet<Period>,
    categories: BTreeSet<String>,
}

impl FilterSelection {
    /// Start with nothing selected (no filter applied)
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently selected periods
    pub fn selected_periods(&self) -> &BTreeSet<Period> {
        &self.periods
    }

    /// Currently selected categories
    pub fn selected_categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Select or deselect a single period
    pub fn toggle_period(&mut self, period: Period) {
        if !self.periods.remove(&period) {
            self.periods.insert(period);
        }
    }

    /// Select or deselect a single category
    pub fn toggle_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if !self.categories.remove(&category) {
            self.categories.insert(category);
        }
    }

    /// Flip between the full available period set and the empty set
    ///
    /// Selects everything unless everything is already selected, in which
    /// case the selection empties.
    pub fn toggle_all_periods(&mut self, available: &[Period]) {
        if self.periods.len() == available.len() {
            self.periods.clear();
        } else {
            self.periods = available.iter().copied().collect();
        }
    }

    /// Flip between the full available category set and the empty set
    pub fn toggle_all_categories(&mut self, available: &[CategoryOption]) {
        if self.categories.len() == available.len() {
            self.categories.clear();
        } else {
            self.categories = available.iter().map(|c| c.name.clone()).collect();
        }
    }

    /// Drop both selections (back to "no filter applied")
    pub fn clear(&mut self) {
        self.periods.clear();
        self.categories.clear();
    }

    /// Whether no filter is active in either dimension
    pub fn is_unfiltered(&self) -> bool {
        self.periods.is_empty() && self.categories.is_empty()
    }

    /// Whether a transaction passes both filter dimensions
    ///
    /// An empty selection passes everything in that dimension.
    pub fn matches(&self, txn: &Transaction) -> bool {
        let period_ok = self.periods.is_empty() || self.periods.contains(&txn.period());
        let category_ok = self.categories.is_empty() || self.categories.contains(&txn.category);
        period_ok && category_ok
    }

    /// The transactions passing the active filters, in their original order
    pub fn apply<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        transactions.iter().filter(|t| self.matches(t)).collect()
    }
}
