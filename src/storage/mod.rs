//! Storage layer for the finance tracker
//!
//! Two in-memory repositories backed by a pluggable blob store. Everything is
//! read once at startup and written back wholesale after each mutation.

pub mod blob;
pub mod budgets;
pub mod file_io;
pub mod transactions;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use budgets::{BudgetMap, BudgetRepository, BUDGETS_KEY};
pub use transactions::{TransactionRepository, TRANSACTIONS_KEY};

use crate::config::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};

/// Version written into every blob
pub const SCHEMA_VERSION: u32 = 1;

pub(crate) fn check_schema_version(key: &str, found: u32) -> TrackerResult<()> {
    if found > SCHEMA_VERSION {
        return Err(TrackerError::Persistence(format!(
            "{} blob has schema version {}, newest supported is {}",
            key, found, SCHEMA_VERSION
        )));
    }
    Ok(())
}

/// Session store: owns both collections and the blob store behind them
///
/// One instance per application session, passed by reference to services.
pub struct Storage {
    blobs: Box<dyn BlobStore>,
    pub transactions: TransactionRepository,
    pub budgets: BudgetRepository,
}

impl Storage {
    /// Create empty storage on top of a blob store, without loading
    pub fn new(blobs: Box<dyn BlobStore>) -> Self {
        Self {
            blobs,
            transactions: TransactionRepository::new(),
            budgets: BudgetRepository::new(),
        }
    }

    /// Open file-backed storage under the data directory and load it
    pub fn open(paths: &TrackerPaths) -> TrackerResult<Self> {
        paths.ensure_directories()?;
        let mut storage = Self::new(Box::new(FileBlobStore::new(paths.data_dir())));
        storage.load_all()?;
        Ok(storage)
    }

    /// Load both collections from the blob store
    ///
    /// Both blobs are parsed before either collection is replaced, so a
    /// failure leaves the in-memory state exactly as it was.
    pub fn load_all(&mut self) -> TrackerResult<()> {
        let transactions = TransactionRepository::read(self.blobs.as_ref())?;
        let budgets = BudgetRepository::read(self.blobs.as_ref())?;
        self.transactions = transactions;
        self.budgets = budgets;
        Ok(())
    }

    /// Write both collections to the blob store
    pub fn save_all(&mut self) -> TrackerResult<()> {
        self.transactions.save(self.blobs.as_mut())?;
        self.budgets.save(self.blobs.as_mut())?;
        Ok(())
    }

    pub fn blob_store(&self) -> &dyn BlobStore {
        self.blobs.as_ref()
    }

    /// Give up the in-memory state and hand back the blob store
    pub fn into_blob_store(self) -> Box<dyn BlobStore> {
        self.blobs
    }
}
