//! Record Store - in-memory storage for student records
//!
//! The store is an owned value; whoever drives it (the shell, a test)
//! holds it directly.

use tracing::debug;

use crate::record::{StudentPatch, StudentRecord};
use crate::{Error, Result};

/// In-memory, insertion-ordered store of student records.
///
/// ## Design
///
/// Records live in a `Vec` so listing order is insertion order and survives
/// a save/load cycle unchanged. Lookups are linear scans by id; the store
/// holds a classroom, not a warehouse.
///
/// ## Invariant
///
/// No two records share an id. [`RecordStore::add`] enforces it;
/// [`RecordStore::from_records`] trusts its input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<StudentRecord>,
}

impl RecordStore {
    /// Create a new empty record store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from already-trusted records (loaded file or seed set).
    ///
    /// Order is kept as given. Ids are not re-checked.
    #[must_use]
    pub fn from_records(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    /// Consume the store and return its records in order.
    #[must_use]
    pub fn into_records(self) -> Vec<StudentRecord> {
        self.records
    }

    /// Get the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    #[must_use]
    pub fn list(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Check whether a record with `id` exists.
    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.position(id).is_some()
    }

    /// Get a record by ID.
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateId`] if the id is taken; the store is left
    /// unchanged.
    pub fn add(&mut self, record: StudentRecord) -> Result<()> {
        if self.contains(record.id()) {
            return Err(Error::DuplicateId(record.id()));
        }
        debug!(id = record.id(), name = record.name(), "record added");
        self.records.push(record);
        Ok(())
    }

    /// Apply a partial update to the record with `id`.
    ///
    /// Only fields present (and non-blank) in `patch` are replaced. Returns
    /// the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has this id.
    pub fn update(&mut self, id: i64, patch: StudentPatch) -> Result<&StudentRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or(Error::NotFound(id))?;
        debug!(id, ?patch, "record updated");
        record.apply(patch);
        Ok(record)
    }

    /// Remove and return the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no record has this id; the store is
    /// left unchanged.
    pub fn delete(&mut self, id: i64) -> Result<StudentRecord> {
        let index = self.position(id).ok_or(Error::NotFound(id))?;
        debug!(id, "record deleted");
        Ok(self.records.remove(index))
    }

    fn position(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}
