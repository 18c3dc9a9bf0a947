//! Service layer for the finance tracker
//!
//! Services validate input before touching the repositories, apply the
//! mutation in memory, then write both blobs through. A failed write does not
//! undo the mutation; it comes back as a warning on the [`Mutation`].

pub mod budget;
pub mod transaction;

pub use budget::BudgetService;
pub use transaction::{SortOrder, TransactionFilter, TransactionService};

use crate::error::TrackerError;
use crate::storage::Storage;

/// Result of a mutation that was applied in memory
///
/// `persistence_error` is set when the write-through failed; memory and the
/// blob store then disagree until the next successful write.
#[derive(Debug)]
#[must_use]
pub struct Mutation<T> {
    pub value: T,
    pub persistence_error: Option<TrackerError>,
}

impl<T> Mutation<T> {
    /// Persist the current state and wrap `value` with the outcome
    pub(crate) fn write_through(storage: &mut Storage, value: T) -> Self {
        let persistence_error = match storage.save_all() {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(error = %e, "write-through failed; in-memory state kept");
                Some(e)
            }
        };
        Self {
            value,
            persistence_error,
        }
    }

    /// Whether the change also reached the blob store
    pub fn is_persisted(&self) -> bool {
        self.persistence_error.is_none()
    }

    pub fn warning(&self) -> Option<&TrackerError> {
        self.persistence_error.as_ref()
    }

    pub fn into_value(self) -> T {
        self.value
    }
}
