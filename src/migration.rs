//! One-shot normalization of legacy persisted records
//!
//! Early versions of the tracker stored expenditures as negative amounts and
//! had no `type` field. This pass rewrites such records to the current shape:
//! non-negative magnitudes with an explicit type. It runs at most once per
//! data set, guarded by a marker key separate from the data itself.

use log::info;
use serde_json::{json, Map, Value};

use crate::error::{TrackerError, TrackerResult};
use crate::storage::{KeyValueStore, DATA_KEY, MIGRATION_DONE, MIGRATION_KEY};

/// What the migration pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The marker was already set; nothing was touched
    AlreadyDone,
    /// No persisted data existed; only the marker was written
    NothingToMigrate,
    /// Data existed but every record was already in the current shape
    Clean,
    /// At least one record was normalized and the data was written back
    Rewritten,
}

/// Normalize legacy records behind the migration marker
///
/// Records lacking a `type` field get `type = "expenditure"`; if their amount
/// is negative it is replaced with its absolute value. Records already
/// carrying a type are left untouched, as is every other field. The data key
/// is rewritten only when at least one record changed; the marker is set in
/// every successful case.
///
/// Malformed persisted data aborts with an error and leaves the marker unset,
/// so a later attempt is free to retry. Once the marker is set the pass never
/// runs again, even if marker and data disagree.
pub fn migrate_legacy_amounts(port: &mut dyn KeyValueStore) -> TrackerResult<MigrationOutcome> {
    if port.get(MIGRATION_KEY)?.as_deref() == Some(MIGRATION_DONE) {
        return Ok(MigrationOutcome::AlreadyDone);
    }

    let raw = match port.get(DATA_KEY)? {
        Some(raw) => raw,
        None => {
            port.set(MIGRATION_KEY, MIGRATION_DONE)?;
            return Ok(MigrationOutcome::NothingToMigrate);
        }
    };

    let mut records: Vec<Map<String, Value>> = serde_json::from_str(&raw)
        .map_err(|e| TrackerError::MalformedData(format!("cannot migrate: {}", e)))?;

    let mut changed = 0usize;
    for record in &mut records {
        // Missing or null `type` marks a legacy record
        let has_type = record.get("type").is_some_and(|v| !v.is_null());
        if has_type {
            continue;
        }

        if let Some(amount) = record.get("amount").and_then(Value::as_f64) {
            if amount < 0.0 {
                record.insert("amount".into(), json!(amount.abs()));
            }
        }
        record.insert("type".into(), json!("expenditure"));
        changed += 1;
    }

    if changed > 0 {
        let rewritten = serde_json::to_string(&records)
            .map_err(|e| TrackerError::Migration(e.to_string()))?;
        port.set(DATA_KEY, &rewritten)?;
        info!("migrated {} legacy transaction record(s)", changed);
    }
    port.set(MIGRATION_KEY, MIGRATION_DONE)?;

    Ok(if changed > 0 {
        MigrationOutcome::Rewritten
    } else {
        MigrationOutcome::Clean
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_no_data_sets_marker() {
        let mut port = MemoryStore::new();
        let outcome = migrate_legacy_amounts(&mut port).unwrap();
        assert_eq!(outcome, MigrationOutcome::NothingToMigrate);
        assert_eq!(
            port.get(MIGRATION_KEY).unwrap().as_deref(),
            Some(MIGRATION_DONE)
        );
        assert!(port.get(DATA_KEY).unwrap().is_none());
    }

    #[test]
    fn test_negative_legacy_record_normalized() {
        let data = r#"[{"id":"1","amount":-50,"category":"Food",
            "subCategory":"Snacks","date":"2024-03-01T12:00:00Z"}]"#;
        let mut port = MemoryStore::with_entries([(DATA_KEY, data)]);

        let outcome = migrate_legacy_amounts(&mut port).unwrap();
        assert_eq!(outcome, MigrationOutcome::Rewritten);

        let rewritten = port.get(DATA_KEY).unwrap().unwrap();
        let records: Vec<serde_json::Value> = serde_json::from_str(&rewritten).unwrap();
        assert_eq!(records[0]["amount"].as_f64(), Some(50.0));
        assert_eq!(records[0]["type"], json!("expenditure"));
        // Untouched fields survive
        assert_eq!(records[0]["category"], json!("Food"));
        assert_eq!(records[0]["date"], json!("2024-03-01T12:00:00Z"));
    }

    #[test]
    fn test_positive_legacy_record_gets_type_only() {
        let data = r#"[{"id":"1","amount":30,"category":"Food",
            "subCategory":"Snacks","date":"2024-03-01T12:00:00Z"}]"#;
        let mut port = MemoryStore::with_entries([(DATA_KEY, data)]);

        let outcome = migrate_legacy_amounts(&mut port).unwrap();
        assert_eq!(outcome, MigrationOutcome::Rewritten);

        let rewritten = port.get(DATA_KEY).unwrap().unwrap();
        let records: Vec<serde_json::Value> = serde_json::from_str(&rewritten).unwrap();
        assert_eq!(records[0]["amount"].as_f64(), Some(30.0));
        assert_eq!(records[0]["type"], json!("expenditure"));
    }

    #[test]
    fn test_typed_records_left_untouched() {
        let data = r#"[{"id":"1","amount":50,"category":"Salary",
            "subCategory":"Job","date":"2024-03-01T12:00:00Z","type":"income"}]"#;
        let mut port = MemoryStore::with_entries([(DATA_KEY, data)]);

        let outcome = migrate_legacy_amounts(&mut port).unwrap();
        assert_eq!(outcome, MigrationOutcome::Clean);
        // No write-back: the stored string is byte-identical
        assert_eq!(port.get(DATA_KEY).unwrap().as_deref(), Some(data));
        assert_eq!(
            port.get(MIGRATION_KEY).unwrap().as_deref(),
            Some(MIGRATION_DONE)
        );
    }

    #[test]
    fn test_idempotent_second_run() {
        let data = r#"[{"id":"1","amount":-50,"category":"Food",
            "subCategory":"Snacks","date":"2024-03-01T12:00:00Z"}]"#;
        let mut port = MemoryStore::with_entries([(DATA_KEY, data)]);

        assert_eq!(
            migrate_legacy_amounts(&mut port).unwrap(),
            MigrationOutcome::Rewritten
        );
        let after_first = port.get(DATA_KEY).unwrap();

        assert_eq!(
            migrate_legacy_amounts(&mut port).unwrap(),
            MigrationOutcome::AlreadyDone
        );
        assert_eq!(port.get(DATA_KEY).unwrap(), after_first);
    }

    #[test]
    fn test_marker_respected_even_if_data_is_legacy() {
        let data = r#"[{"id":"1","amount":-50,"category":"Food",
            "subCategory":"Snacks","date":"2024-03-01T12:00:00Z"}]"#;
        let mut port =
            MemoryStore::with_entries([(DATA_KEY, data), (MIGRATION_KEY, MIGRATION_DONE)]);

        assert_eq!(
            migrate_legacy_amounts(&mut port).unwrap(),
            MigrationOutcome::AlreadyDone
        );
        assert_eq!(port.get(DATA_KEY).unwrap().as_deref(), Some(data));
    }

    #[test]
    fn test_malformed_data_aborts_without_marker() {
        let mut port = MemoryStore::with_entries([(DATA_KEY, "not json at all")]);

        let err = migrate_legacy_amounts(&mut port).unwrap_err();
        assert!(err.is_malformed_data());
        assert!(port.get(MIGRATION_KEY).unwrap().is_none());

        // A later attempt with repaired data succeeds
        port.set(DATA_KEY, "[]").unwrap();
        assert_eq!(
            migrate_legacy_amounts(&mut port).unwrap(),
            MigrationOutcome::Clean
        );
    }

    #[test]
    fn test_non_true_marker_means_not_migrated() {
        let data = r#"[{"id":"1","amount":-5,"category":"Food",
            "subCategory":"Snacks","date":"2024-03-01T12:00:00Z"}]"#;
        let mut port = MemoryStore::with_entries([(DATA_KEY, data), (MIGRATION_KEY, "yes")]);

        assert_eq!(
            migrate_legacy_amounts(&mut port).unwrap(),
            MigrationOutcome::Rewritten
        );
        assert_eq!(
            port.get(MIGRATION_KEY).unwrap().as_deref(),
            Some(MIGRATION_DONE)
        );
    }
}
