//! Chart-ready series shaping
//!
//! Turns a transaction list into the two series the charts plot: a pie of
//! expenditure by category and a per-day income/expenditure bar series.
//! Rendering belongs to the consumer.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Money, Transaction, TransactionType};

/// One pie slice: a category and its expenditure magnitude
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub value: Money,
}

/// One bar-series point: a calendar day with its income and expenditure totals
#[derive(Debug, Clone, PartialEq)]
pub struct DailyFlow {
    pub date: NaiveDate,
    pub income: Money,
    pub expenditure: Money,
}

/// Expenditure totals per category, largest slice first
///
/// Income transactions are excluded; the pie shows where money went.
pub fn expenditure_by_category<'a, I>(transactions: I) -> Vec<ChartSlice>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: BTreeMap<&str, Money> = BTreeMap::new();
    for txn in transactions {
        if txn.kind == TransactionType::Expenditure {
            *totals.entry(txn.category.as_str()).or_insert_with(Money::zero) += txn.amount;
        }
    }

    let mut slices: Vec<ChartSlice> = totals
        .into_iter()
        .map(|(label, value)| ChartSlice {
            label: label.to_string(),
            value,
        })
        .collect();
    // Descending by value; the BTreeMap origin keeps ties in name order
    slices.sort_by(|a, b| b.value.cmp(&a.value));
    slices
}

/// Income and expenditure totals per calendar day, oldest first
pub fn daily_flow<'a, I>(transactions: I) -> Vec<DailyFlow>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut by_day: BTreeMap<NaiveDate, (Money, Money)> = BTreeMap::new();
    for txn in transactions {
        let entry = by_day
            .entry(txn.date.date_naive())
            .or_insert_with(|| (Money::zero(), Money::zero()));
        match txn.kind {
            TransactionType::Income => entry.0 += txn.amount,
            TransactionType::Expenditure => entry.1 += txn.amount,
        }
    }

    by_day
        .into_iter()
        .map(|(date, (income, expenditure))| DailyFlow {
            date,
            income,
            expenditure,
        })
        .collect()
}
