//! Frozen in-memory generation

use std::cmp::Ordering;

use crate::error::Result;
use crate::memtable::{Entry, Lookup, MemTable};
use crate::model::Key;

use super::{Generation, GenerationId};

/// A memtable that can no longer be written to
///
/// Constructed by moving a [`MemTable`] in; only read access is exposed
/// afterwards.
#[derive(Debug)]
pub struct FrozenTable {
    id: GenerationId,
    table: MemTable,
}

impl FrozenTable {
    /// Freeze `table` as generation `id`
    pub fn new(id: GenerationId, table: MemTable) -> Self {
        Self { id, table }
    }

    /// The full entry sequence, in key order
    pub fn entries(&self) -> &[Entry] {
        self.table.entries()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.table.iter()
    }

    pub fn min_key(&self) -> Option<&Key> {
        self.table.first_key()
    }

    pub fn max_key(&self) -> Option<&Key> {
        self.table.last_key()
    }
}

impl Generation for FrozenTable {
    fn id(&self) -> GenerationId {
        self.id
    }

    fn lookup(&self, key: &Key) -> Result<Lookup> {
        self.table.lookup(key)
    }

    fn len(&self) -> usize {
        self.table.len()
    }

    fn might_contain(&self, key: &Key) -> Result<bool> {
        match (self.min_key(), self.max_key()) {
            (Some(min), Some(max)) => Ok(key.try_cmp(min)? != Ordering::Less
                && key.try_cmp(max)? != Ordering::Greater),
            _ => Ok(false), // Empty generation
        }
    }
}
