//! Generation chain
//!
//! Frozen generations ordered newest → oldest. Grows only at the head.

use std::fmt;
use std::sync::Arc;

use crate::error::{Result, StoreError};
use crate::model::{Document, Key};

use super::{Generation, GenerationId};

/// Ordered sequence of frozen generations, newest first
#[derive(Default)]
pub struct GenerationChain {
    generations: Vec<Arc<dyn Generation>>,
}

impl GenerationChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a generation as the newest
    pub fn push(&mut self, generation: Arc<dyn Generation>) {
        self.generations.insert(0, generation);
    }

    /// Swap the generation with the same id for `handle`
    ///
    /// Position in the chain is preserved. Returns the replaced generation.
    pub fn replace(&mut self, handle: Arc<dyn Generation>) -> Result<Arc<dyn Generation>> {
        let id = handle.id();
        let slot = self
            .generations
            .iter_mut()
            .find(|generation| generation.id() == id)
            .ok_or(StoreError::GenerationNotFound(id))?;

        Ok(std::mem::replace(slot, handle))
    }

    /// Search newest → oldest; the first live entry wins
    ///
    /// Tombstones do not stop the scan: a key deleted in a newer generation
    /// but live in an older one resolves to the older document.
    pub fn lookup(&self, key: &Key) -> Result<Option<Document>> {
        for generation in &self.generations {
            // Skip generation if key is outside its range
            if !generation.might_contain(key)? {
                continue;
            }

            if let Some(document) = generation.lookup(key)?.into_document() {
                return Ok(Some(document));
            }
        }

        Ok(None)
    }

    pub fn len(&self) -> usize {
        self.generations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generations.is_empty()
    }

    /// Generation at `index`, 0 being the newest
    pub fn get(&self, index: usize) -> Option<&Arc<dyn Generation>> {
        self.generations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arc<dyn Generation>> {
        self.generations.iter()
    }

    /// Ids newest → oldest
    pub fn ids(&self) -> Vec<GenerationId> {
        self.generations.iter().map(|g| g.id()).collect()
    }

    /// Entries across all generations, tombstones included
    pub fn total_entries(&self) -> usize {
        self.generations.iter().map(|g| g.len()).sum()
    }
}

impl fmt::Debug for GenerationChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.generations.iter().map(|g| (g.id(), g.len())))
            .finish()
    }
}
