//! MemTable implementation
//!
//! Sorted vector of entries with binary-search insert, lookup and delete.

use std::cmp::Ordering;

use crate::error::Result;
use crate::model::{Document, Key};

use super::{Entry, EntryFlag, Lookup};

/// Mutable, sorted in-memory buffer for recent writes
#[derive(Debug, Default)]
pub struct MemTable {
    /// Strictly increasing by key, no duplicates
    entries: Vec<Entry>,
}

impl MemTable {
    /// Create a new empty MemTable
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a live document
    ///
    /// An existing entry for `key` (live or tombstone) is overwritten in
    /// place. Returns the entry count afterwards. On error the table is
    /// left untouched.
    pub fn insert(&mut self, key: Key, document: Document) -> Result<usize> {
        let (index, exact) = self.search(&key)?;

        if exact {
            let entry = &mut self.entries[index];
            entry.document = Some(document);
            entry.flag = EntryFlag::Live;
        } else {
            self.entries.insert(index, Entry::live(key, document));
        }

        Ok(self.entries.len())
    }

    /// Mark a key as deleted
    ///
    /// A key with no entry still gets a tombstone at its sorted position.
    /// Returns the entry count afterwards.
    pub fn delete(&mut self, key: Key) -> Result<usize> {
        let (index, exact) = self.search(&key)?;

        if exact {
            let entry = &mut self.entries[index];
            entry.document = None;
            entry.flag = EntryFlag::Deleted;
        } else {
            self.entries.insert(index, Entry::tombstone(key));
        }

        Ok(self.entries.len())
    }

    /// Point lookup
    pub fn lookup(&self, key: &Key) -> Result<Lookup> {
        let (index, exact) = self.search(key)?;

        if !exact {
            return Ok(Lookup::NotFound);
        }

        let entry = &self.entries[index];
        Ok(match (&entry.flag, &entry.document) {
            (EntryFlag::Live, Some(document)) => Lookup::Live(document.clone()),
            _ => Lookup::Tombstoned,
        })
    }

    /// Whether `key` occupies a slot, live or tombstoned
    pub fn contains_key(&self, key: &Key) -> Result<bool> {
        Ok(self.search(key)?.1)
    }

    /// Number of entries, tombstones included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn first_key(&self) -> Option<&Key> {
        self.entries.first().map(Entry::key)
    }

    pub fn last_key(&self) -> Option<&Key> {
        self.entries.last().map(Entry::key)
    }

    /// Bisect-left: leftmost index whose key is >= `key`, and whether the key
    /// at that index equals `key`
    fn search(&self, key: &Key) -> Result<(usize, bool)> {
        let mut lo = 0;
        let mut hi = self.entries.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.entries[mid].key.try_cmp(key)? {
                Ordering::Less => lo = mid + 1,
                Ordering::Equal | Ordering::Greater => hi = mid,
            }
        }

        let exact = match self.entries.get(lo) {
            Some(entry) => entry.key.try_cmp(key)? == Ordering::Equal,
            None => false,
        };

        Ok((lo, exact))
    }
}

impl<'a> IntoIterator for &'a MemTable {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
