//! Transaction store
//!
//! Owns the authoritative, insertion-ordered transaction list and is its sole
//! mutator. Persistence goes through the key-value port and is best-effort:
//! a failed write is logged and the in-memory state stays the source of truth
//! for the rest of the session.

use chrono::Utc;
use log::{error, warn};

use crate::error::{TrackerError, TrackerResult};
use crate::migration::migrate_legacy_amounts;
use crate::models::{NewTransaction, Transaction, TransactionId};
use crate::storage::{KeyValueStore, DATA_KEY};

/// Ordered, owning collection of transactions backed by a persistence port
pub struct TransactionStore<P: KeyValueStore> {
    port: P,
    transactions: Vec<Transaction>,
}

impl<P: KeyValueStore> TransactionStore<P> {
    /// Open a store over the given port, loading any persisted transactions
    ///
    /// Malformed persisted data fails soft: the problem is logged and the
    /// store starts from an empty list rather than surfacing a fatal error.
    pub fn open(port: P) -> Self {
        let transactions = match Self::load_from(&port) {
            Ok(transactions) => transactions,
            Err(e) => {
                error!("could not load persisted transactions, starting empty: {}", e);
                Vec::new()
            }
        };
        Self { port, transactions }
    }

    /// Open a store, running the one-shot legacy migration first
    ///
    /// A migration failure is logged and the load proceeds; the marker stays
    /// unset so a later open can retry.
    pub fn open_with_migration(mut port: P) -> Self {
        if let Err(e) = migrate_legacy_amounts(&mut port) {
            error!("legacy data migration failed: {}", e);
        }
        Self::open(port)
    }

    fn load_from(port: &P) -> TrackerResult<Vec<Transaction>> {
        match port.get(DATA_KEY)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|e| TrackerError::MalformedData(e.to_string())),
            None => Ok(Vec::new()),
        }
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Whether the store holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Borrow the underlying persistence port
    pub fn port(&self) -> &P {
        &self.port
    }

    /// Add a transaction, assigning its id and defaulting date and type
    ///
    /// Validation happens before anything enters the store: a non-positive
    /// amount or an empty category/sub-category is rejected synchronously and
    /// no partial record is created.
    pub fn add(&mut self, input: NewTransaction) -> TrackerResult<Transaction> {
        input.validate().map_err(TrackerError::Validation)?;

        let txn = Transaction {
            id: TransactionId::new(),
            amount: input.amount,
            category: input.category.trim().to_string(),
            sub_category: input.sub_category.trim().to_string(),
            date: input.date.unwrap_or_else(Utc::now),
            kind: input.kind.unwrap_or_default(),
        };

        self.transactions.push(txn.clone());
        self.persist_best_effort();
        Ok(txn)
    }

    /// Remove exactly the transaction with the given id
    ///
    /// Returns whether a record was removed; an unknown id is a no-op and the
    /// order of the remaining transactions is unchanged.
    pub fn remove(&mut self, id: &TransactionId) -> bool {
        let before = self.transactions.len();
        self.transactions.retain(|t| &t.id != id);
        let removed = self.transactions.len() != before;
        if removed {
            self.persist_best_effort();
        }
        removed
    }

    /// Remove every transaction, gated on an explicit confirmation
    ///
    /// Clearing is destructive, so the caller must pass `true`; `false`
    /// leaves the store unchanged. Returns whether the store was cleared.
    pub fn clear_all(&mut self, confirmed: bool) -> bool {
        if !confirmed || self.transactions.is_empty() {
            return false;
        }
        self.transactions.clear();
        self.persist_best_effort();
        true
    }

    /// Write the current list through the port, surfacing any error
    pub fn persist(&mut self) -> TrackerResult<()> {
        let json = serde_json::to_string(&self.transactions)?;
        self.port.set(DATA_KEY, &json)
    }

    fn persist_best_effort(&mut self) {
        if let Err(e) = self.persist() {
            warn!("failed to persist transactions, keeping in-memory state: {}", e);
        }
    }
}
