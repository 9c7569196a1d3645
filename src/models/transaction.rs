//! Transaction model
//!
//! A transaction is a single recorded income or expenditure event. Amounts
//! are always non-negative magnitudes; direction is carried by the type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;
use super::period::Period;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in
    Income,
    /// Money going out
    #[default]
    Expenditure,
}

impl TransactionType {
    /// Sign applied to the amount during aggregation (+1 income, -1 expenditure)
    pub fn sign(&self) -> i64 {
        match self {
            Self::Income => 1,
            Self::Expenditure => -1,
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expenditure => write!(f, "Expenditure"),
        }
    }
}

/// A recorded income or expenditure event
///
/// Deserialization goes through a validating step: a record with a negative
/// amount or an empty id, category, or sub-category is rejected as a decode
/// error rather than silently constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawTransaction")]
pub struct Transaction {
    /// Unique identifier, assigned at creation, immutable
    pub id: TransactionId,

    /// Non-negative magnitude; direction lives in `kind`
    pub amount: Money,

    /// Free-text category label, case-sensitive
    pub category: String,

    /// Free-text sub-category label, scoped under the category for display
    /// but not unique across categories
    #[serde(rename = "subCategory")]
    pub sub_category: String,

    /// When the transaction occurred
    pub date: DateTime<Utc>,

    /// Income or expenditure
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl Transaction {
    /// The amount with the aggregation sign applied (+income, -expenditure)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expenditure => -self.amount,
        }
    }

    /// The year-month bucket this transaction falls into
    pub fn period(&self) -> Period {
        Period::from_date(self.date)
    }
}

/// Wire-shape record used for validating deserialization
#[derive(Debug, Deserialize)]
struct RawTransaction {
    id: TransactionId,
    amount: Money,
    category: String,
    #[serde(rename = "subCategory")]
    sub_category: String,
    date: DateTime<Utc>,
    #[serde(rename = "type")]
    kind: TransactionType,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = String;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        if raw.id.is_empty() {
            return Err("transaction id must not be empty".into());
        }
        if raw.amount.is_negative() {
            return Err(format!(
                "transaction {} has a negative amount; direction belongs in the type field",
                raw.id
            ));
        }
        if raw.category.trim().is_empty() {
            return Err(format!("transaction {} has an empty category", raw.id));
        }
        if raw.sub_category.trim().is_empty() {
            return Err(format!("transaction {} has an empty sub-category", raw.id));
        }

        Ok(Self {
            id: raw.id,
            amount: raw.amount,
            category: raw.category,
            sub_category: raw.sub_category,
            date: raw.date,
            kind: raw.kind,
        })
    }
}

/// Input for adding a transaction to the store
///
/// The id is assigned by the store; date defaults to now and the type to
/// expenditure when omitted.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub amount: Money,
    pub category: String,
    pub sub_category: String,
    pub date: Option<DateTime<Utc>>,
    pub kind: Option<TransactionType>,
}

impl NewTransaction {
    /// Create an input with the required fields; date and type take defaults
    pub fn new(amount: Money, category: impl Into<String>, sub_category: impl Into<String>) -> Self {
        Self {
            amount,
            category: category.into(),
            sub_category: sub_category.into(),
            date: None,
            kind: None,
        }
    }

    /// Set an explicit date
    pub fn on(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Set an explicit type
    pub fn of_kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Validate the input before a record is created
    ///
    /// Rejects non-positive amounts and empty category or sub-category, so no
    /// partial record ever enters the store.
    pub fn validate(&self) -> Result<(), String> {
        if !self.amount.is_positive() {
            return Err("amount must be greater than zero".into());
        }
        if self.category.trim().is_empty() {
            return Err("category is required".into());
        }
        if self.sub_category.trim().is_empty() {
            return Err("sub-category is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn march(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_signed_amount() {
        let mut txn: Transaction = serde_json::from_str(
            r#"{"id":"a","amount":50,"category":"Food","subCategory":"Snacks",
                "date":"2024-03-01T12:00:00Z","type":"expenditure"}"#,
        )
        .unwrap();
        assert_eq!(txn.signed_amount(), Money::from_units(-50));

        txn.kind = TransactionType::Income;
        assert_eq!(txn.signed_amount(), Money::from_units(50));
    }

    #[test]
    fn test_period_bucketing() {
        let txn: Transaction = serde_json::from_str(
            r#"{"id":"a","amount":50,"category":"Food","subCategory":"Snacks",
                "date":"2024-03-01T12:00:00Z","type":"expenditure"}"#,
        )
        .unwrap();
        assert_eq!(txn.period().to_string(), "2024-03");
        assert_eq!(txn.period(), Period::from_date(march(31)));
    }

    #[test]
    fn test_wire_format_round_trip() {
        let json = r#"{"id":"1699887600000","amount":123.45,"category":"Food",
            "subCategory":"Groceries","date":"2024-03-05T08:00:00Z","type":"income"}"#;
        let txn: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(txn.amount, Money::from_cents(12345));
        assert_eq!(txn.kind, TransactionType::Income);

        let out = serde_json::to_string(&txn).unwrap();
        assert!(out.contains("\"subCategory\":\"Groceries\""));
        assert!(out.contains("\"type\":\"income\""));
        assert!(out.contains("123.45"));
    }

    #[test]
    fn test_negative_amount_rejected_on_decode() {
        let json = r#"{"id":"a","amount":-50,"category":"Food",
            "subCategory":"Snacks","date":"2024-03-01T12:00:00Z","type":"expenditure"}"#;
        let err = serde_json::from_str::<Transaction>(json).unwrap_err();
        assert!(err.to_string().contains("negative amount"));
    }

    #[test]
    fn test_empty_category_rejected_on_decode() {
        let json = r#"{"id":"a","amount":50,"category":"  ",
            "subCategory":"Snacks","date":"2024-03-01T12:00:00Z","type":"expenditure"}"#;
        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn test_new_transaction_validation() {
        let ok = NewTransaction::new(Money::from_units(10), "Food", "Snacks");
        assert!(ok.validate().is_ok());

        let zero = NewTransaction::new(Money::zero(), "Food", "Snacks");
        assert!(zero.validate().is_err());

        let negative = NewTransaction::new(Money::from_units(-10), "Food", "Snacks");
        assert!(negative.validate().is_err());

        let no_category = NewTransaction::new(Money::from_units(10), "", "Snacks");
        assert!(no_category.validate().is_err());

        let no_sub = NewTransaction::new(Money::from_units(10), "Food", " ");
        assert!(no_sub.validate().is_err());
    }

    #[test]
    fn test_type_defaults() {
        assert_eq!(TransactionType::default(), TransactionType::Expenditure);
        assert_eq!(TransactionType::Income.sign(), 1);
        assert_eq!(TransactionType::Expenditure.sign(), -1);
    }
}
