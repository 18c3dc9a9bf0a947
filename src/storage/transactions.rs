//! Transaction repository
//!
//! Owns the ordered transaction list. Order is insertion order; queries sort
//! a copy. The whole list is serialized under the `transactions` key.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Transaction, TransactionId};

use super::blob::BlobStore;
use super::{check_schema_version, SCHEMA_VERSION};

/// Key of the transactions blob
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Serialized form of the transactions blob
#[derive(Debug, Serialize, Deserialize)]
struct TransactionData {
    schema_version: u32,
    transactions: Vec<Transaction>,
}

/// Repository for the transaction collection
#[derive(Debug, Default)]
pub struct TransactionRepository {
    data: Vec<Transaction>,
}

impl TransactionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the in-memory list with the persisted one
    ///
    /// A missing blob loads as empty. On any error the current list is kept.
    pub fn load(&mut self, blobs: &dyn BlobStore) -> TrackerResult<()> {
        *self = Self::read(blobs)?;
        Ok(())
    }

    /// Parse and validate the persisted list into a new repository
    pub fn read(blobs: &dyn BlobStore) -> TrackerResult<Self> {
        let Some(raw) = blobs.read(TRANSACTIONS_KEY)? else {
            return Ok(Self::new());
        };

        let file_data: TransactionData = serde_json::from_str(&raw).map_err(|e| {
            TrackerError::Persistence(format!("Failed to parse {} blob: {}", TRANSACTIONS_KEY, e))
        })?;
        check_schema_version(TRANSACTIONS_KEY, file_data.schema_version)?;

        let mut seen = HashSet::with_capacity(file_data.transactions.len());
        for txn in &file_data.transactions {
            if !seen.insert(txn.id) {
                return Err(TrackerError::Persistence(format!(
                    "Duplicate transaction id {} in {} blob",
                    txn.id.as_uuid(),
                    TRANSACTIONS_KEY
                )));
            }
            txn.validate().map_err(|e| {
                TrackerError::Persistence(format!("Invalid transaction {}: {}", txn.id, e))
            })?;
        }

        tracing::debug!(count = file_data.transactions.len(), "loaded transactions");
        Ok(Self {
            data: file_data.transactions,
        })
    }

    /// Serialize the full list into its blob form
    pub fn to_blob(&self) -> TrackerResult<String> {
        let file_data = TransactionData {
            schema_version: SCHEMA_VERSION,
            transactions: self.data.clone(),
        };
        serde_json::to_string_pretty(&file_data).map_err(|e| {
            TrackerError::Persistence(format!("Failed to serialize transactions: {}", e))
        })
    }

    /// Overwrite the persisted list with the in-memory one
    pub fn save(&self, blobs: &mut dyn BlobStore) -> TrackerResult<()> {
        let blob = self.to_blob()?;
        blobs.write(TRANSACTIONS_KEY, &blob)?;
        tracing::debug!(count = self.data.len(), "saved transactions");
        Ok(())
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.data.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TransactionId) -> Option<&mut Transaction> {
        self.data.iter_mut().find(|t| t.id == id)
    }

    /// All transactions in insertion order
    pub fn get_all(&self) -> &[Transaction] {
        &self.data
    }

    /// Transactions whose id starts with `fragment`
    pub fn find_by_prefix(&self, fragment: &str) -> Vec<&Transaction> {
        self.data
            .iter()
            .filter(|t| t.id.matches_prefix(fragment))
            .collect()
    }

    /// Append a transaction
    pub fn insert(&mut self, txn: Transaction) {
        self.data.push(txn);
    }

    /// Remove a transaction, returning it if it was present
    pub fn remove(&mut self, id: TransactionId) -> Option<Transaction> {
        let index = self.data.iter().position(|t| t.id == id)?;
        Some(self.data.remove(index))
    }

    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
