//! Transaction service
//!
//! Validated create/update/delete over the transaction repository, plus
//! filtered and sorted queries.

use std::cmp::Reverse;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{
    CategoryConfig, Transaction, TransactionDraft, TransactionId, TransactionType,
};
use crate::storage::Storage;

use super::Mutation;

/// Ordering applied to query results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Newest first; equal dates keep insertion order
    #[default]
    DateDescending,
    /// Oldest first; equal dates keep insertion order
    DateAscending,
    AmountDescending,
    AmountAscending,
    /// Order in which the transactions were added
    Insertion,
}

impl std::str::FromStr for SortOrder {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" | "date-desc" => Ok(Self::DateDescending),
            "oldest" | "date-asc" => Ok(Self::DateAscending),
            "largest" | "amount-desc" => Ok(Self::AmountDescending),
            "smallest" | "amount-asc" => Ok(Self::AmountAscending),
            "added" | "insertion" => Ok(Self::Insertion),
            other => Err(TrackerError::Validation(format!(
                "Unknown sort order '{}': use newest, oldest, largest, smallest or added",
                other
            ))),
        }
    }
}

/// Options for filtering transactions
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    /// Exact category name
    pub category: Option<String>,
    pub kind: Option<TransactionType>,
    /// Case-insensitive substring of the description; blank means no constraint
    pub search: Option<String>,
    pub order: SortOrder,
    /// Maximum number of transactions to return, applied after sorting
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: TransactionType) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a single transaction passes every constraint
    pub fn matches(&self, txn: &Transaction) -> bool {
        if let Some(category) = &self.category {
            if &txn.category != category {
                return false;
            }
        }

        if let Some(kind) = self.kind {
            if txn.kind != kind {
                return false;
            }
        }

        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => txn.description_contains(needle),
            _ => true,
        }
    }

    /// Materialize the matching transactions in the requested order
    pub fn apply(&self, transactions: &[Transaction]) -> Vec<Transaction> {
        let mut matched: Vec<Transaction> = transactions
            .iter()
            .filter(|t| self.matches(t))
            .cloned()
            .collect();

        // All sorts are stable, so ties fall back to insertion order
        match self.order {
            SortOrder::DateDescending => matched.sort_by_key(|t| Reverse(t.date)),
            SortOrder::DateAscending => matched.sort_by_key(|t| t.date),
            SortOrder::AmountDescending => matched.sort_by_key(|t| Reverse(t.amount)),
            SortOrder::AmountAscending => matched.sort_by_key(|t| t.amount),
            SortOrder::Insertion => {}
        }

        if let Some(limit) = self.limit {
            matched.truncate(limit);
        }

        matched
    }
}

/// Service for transaction management
pub struct TransactionService<'a> {
    storage: &'a mut Storage,
    categories: &'a CategoryConfig,
}

impl<'a> TransactionService<'a> {
    pub fn new(storage: &'a mut Storage, categories: &'a CategoryConfig) -> Self {
        Self {
            storage,
            categories,
        }
    }

    /// Record a new transaction
    ///
    /// Nothing is stored if validation fails.
    pub fn add(&mut self, draft: TransactionDraft) -> TrackerResult<Mutation<Transaction>> {
        let draft = draft
            .validated(self.categories)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let txn = Transaction::from_draft(draft);
        self.storage.transactions.insert(txn.clone());

        tracing::info!(
            id = %txn.id,
            kind = %txn.kind,
            amount = %txn.amount,
            category = %txn.category,
            "transaction added"
        );

        Ok(Mutation::write_through(self.storage, txn))
    }

    /// Replace every mutable field of an existing transaction
    ///
    /// The id and position in the list are kept. The draft is validated in
    /// full before the stored record is touched, so readers see either the
    /// old record or the new one.
    pub fn update(
        &mut self,
        id: TransactionId,
        draft: TransactionDraft,
    ) -> TrackerResult<Mutation<Transaction>> {
        if self.storage.transactions.get(id).is_none() {
            return Err(TrackerError::transaction_not_found(id.to_string()));
        }

        let draft = draft
            .validated(self.categories)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let txn = self
            .storage
            .transactions
            .get_mut(id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;
        txn.apply(draft);
        let updated = txn.clone();

        tracing::info!(id = %updated.id, "transaction updated");

        Ok(Mutation::write_through(self.storage, updated))
    }

    /// Delete a transaction
    ///
    /// Deleting an id that is not present fails with a not-found error, so a
    /// second delete of the same id is an error too.
    pub fn delete(&mut self, id: TransactionId) -> TrackerResult<Mutation<Transaction>> {
        let removed = self
            .storage
            .transactions
            .remove(id)
            .ok_or_else(|| TrackerError::transaction_not_found(id.to_string()))?;

        tracing::info!(id = %removed.id, "transaction deleted");

        Ok(Mutation::write_through(self.storage, removed))
    }

    pub fn get(&self, id: TransactionId) -> Option<&Transaction> {
        self.storage.transactions.get(id)
    }

    /// Resolve a full id or a unique prefix of one (`txn-1a2b3c4d`)
    pub fn find(&self, identifier: &str) -> TrackerResult<Transaction> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self
                .storage
                .transactions
                .get(id)
                .cloned()
                .ok_or_else(|| TrackerError::transaction_not_found(identifier));
        }

        match self.storage.transactions.find_by_prefix(identifier).as_slice() {
            [] => Err(TrackerError::transaction_not_found(identifier)),
            [txn] => Ok((*txn).clone()),
            many => Err(TrackerError::Validation(format!(
                "'{}' matches {} transactions; use more of the id",
                identifier,
                many.len()
            ))),
        }
    }

    /// Newly materialized list of matching transactions
    pub fn query(&self, filter: &TransactionFilter) -> Vec<Transaction> {
        filter.apply(self.storage.transactions.get_all())
    }

    pub fn count(&self) -> usize {
        self.storage.transactions.count()
    }
}
