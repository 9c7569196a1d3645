//! Strongly-typed ID wrapper for transactions
//!
//! Using a newtype wrapper prevents accidentally passing arbitrary strings
//! where a transaction identifier is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque unique identifier for a transaction
///
/// New identifiers are random UUIDs, but any non-empty string round-trips
/// through serialization unchanged so that identifiers assigned by older
/// versions of the tracker (millisecond timestamps) survive a reload.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether the identifier is empty (invalid)
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let id1 = TransactionId::new();
        let id2 = TransactionId::new();
        assert_ne!(id1, id2);
        assert!(!id1.is_empty());
    }

    #[test]
    fn test_legacy_id_round_trip() {
        // Older data files carry millisecond-timestamp ids
        let id = TransactionId::from("1699887600000");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"1699887600000\"");

        let deserialized: TransactionId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_display() {
        let id = TransactionId::from("abc-123");
        assert_eq!(format!("{}", id), "abc-123");
    }
}
