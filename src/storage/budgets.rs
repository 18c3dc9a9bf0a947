//! Budget repository
//!
//! Owns the category -> limit map, serialized under the `budgets` key. At
//! most one limit exists per category; setting a category again replaces it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

use super::blob::BlobStore;
use super::{check_schema_version, SCHEMA_VERSION};

/// Key of the budgets blob
pub const BUDGETS_KEY: &str = "budgets";

/// Budget limits keyed by category name
pub type BudgetMap = BTreeMap<String, Money>;

/// Serialized form of the budgets blob
#[derive(Debug, Serialize, Deserialize)]
struct BudgetData {
    schema_version: u32,
    budgets: BudgetMap,
}

/// Repository for budget limits
#[derive(Debug, Default)]
pub struct BudgetRepository {
    limits: BudgetMap,
}

impl BudgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the in-memory map with the persisted one
    ///
    /// On any error the current map is kept.
    pub fn load(&mut self, blobs: &dyn BlobStore) -> TrackerResult<()> {
        *self = Self::read(blobs)?;
        Ok(())
    }

    /// Parse and validate the persisted map into a new repository
    pub fn read(blobs: &dyn BlobStore) -> TrackerResult<Self> {
        let Some(raw) = blobs.read(BUDGETS_KEY)? else {
            return Ok(Self::new());
        };

        let file_data: BudgetData = serde_json::from_str(&raw).map_err(|e| {
            TrackerError::Persistence(format!("Failed to parse {} blob: {}", BUDGETS_KEY, e))
        })?;
        check_schema_version(BUDGETS_KEY, file_data.schema_version)?;

        if let Some((category, limit)) = file_data
            .budgets
            .iter()
            .find(|(_, l)| !l.is_positive() || l.exceeds_max())
        {
            return Err(TrackerError::Persistence(format!(
                "Invalid budget for '{}': limit {} is not between $0.01 and {}",
                category,
                limit,
                Money::MAX_AMOUNT
            )));
        }

        tracing::debug!(count = file_data.budgets.len(), "loaded budgets");
        Ok(Self {
            limits: file_data.budgets,
        })
    }

    pub fn to_blob(&self) -> TrackerResult<String> {
        let file_data = BudgetData {
            schema_version: SCHEMA_VERSION,
            budgets: self.limits.clone(),
        };
        serde_json::to_string_pretty(&file_data)
            .map_err(|e| TrackerError::Persistence(format!("Failed to serialize budgets: {}", e)))
    }

    pub fn save(&self, blobs: &mut dyn BlobStore) -> TrackerResult<()> {
        let blob = self.to_blob()?;
        blobs.write(BUDGETS_KEY, &blob)?;
        tracing::debug!(count = self.limits.len(), "saved budgets");
        Ok(())
    }

    pub fn get(&self, category: &str) -> Option<Money> {
        self.limits.get(category).copied()
    }

    /// Set the limit for a category, returning the one it replaced
    pub fn set(&mut self, category: impl Into<String>, limit: Money) -> Option<Money> {
        self.limits.insert(category.into(), limit)
    }

    pub fn remove(&mut self, category: &str) -> Option<Money> {
        self.limits.remove(category)
    }

    /// All limits in category name order
    pub fn all(&self) -> &BudgetMap {
        &self.limits
    }

    pub fn count(&self) -> usize {
        self.limits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::blob::MemoryBlobStore;

    #[test]
    fn test_set_overwrites() {
        let mut repo = BudgetRepository::new();
        assert_eq!(repo.set("Food", Money::from_cents(10000)), None);
        assert_eq!(
            repo.set("Food", Money::from_cents(20000)),
            Some(Money::from_cents(10000))
        );
        assert_eq!(repo.get("Food"), Some(Money::from_cents(20000)));
        assert_eq!(repo.count(), 1);
    }

    #[test]
    fn test_remove() {
        let mut repo = BudgetRepository::new();
        repo.set("Food", Money::from_cents(10000));
        assert_eq!(repo.remove("Food"), Some(Money::from_cents(10000)));
        assert_eq!(repo.remove("Food"), None);
    }

    #[test]
    fn test_save_and_reload() {
        let mut blobs = MemoryBlobStore::new();
        let mut repo = BudgetRepository::new();
        repo.set("Food", Money::from_cents(10000));
        repo.set("Bills", Money::from_cents(80000));
        repo.save(&mut blobs).unwrap();

        let mut reloaded = BudgetRepository::new();
        reloaded.load(&blobs).unwrap();
        assert_eq!(reloaded.all(), repo.all());
    }

    #[test]
    fn test_blob_layout() {
        let mut repo = BudgetRepository::new();
        repo.set("Food", Money::from_cents(10000));

        let value: serde_json::Value = serde_json::from_str(&repo.to_blob().unwrap()).unwrap();
        assert_eq!(value["schema_version"], SCHEMA_VERSION);
        assert_eq!(value["budgets"]["Food"], 10000);
    }

    #[test]
    fn test_load_rejects_non_positive_limit() {
        let mut blobs = MemoryBlobStore::new();
        blobs.insert(
            BUDGETS_KEY,
            r#"{"schema_version": 1, "budgets": {"Food": 0}}"#,
        );

        let mut repo = BudgetRepository::new();
        assert!(repo.load(&blobs).unwrap_err().is_persistence());
    }

    #[test]
    fn test_load_rejects_limit_above_maximum() {
        let mut blobs = MemoryBlobStore::new();
        blobs.insert(
            BUDGETS_KEY,
            r#"{"schema_version": 1, "budgets": {"Food": 9223372036854775807}}"#,
        );

        let mut repo = BudgetRepository::new();
        assert!(repo.load(&blobs).unwrap_err().is_persistence());
    }
}
