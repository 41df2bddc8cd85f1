//! MemTable Module
//!
//! In-memory data structure for recent writes.
//!
//! ## Responsibilities
//! - Sorted, duplicate-free entries keyed by primary key
//! - Tombstones that keep their key slot
//! - Three-way point lookups (live / tombstoned / absent)
//! - Entry count for the rotation policy
//!
//! ## Data Structure Choice
//! A plain `Vec<Entry>` kept sorted, searched with bisect-left:
//! - Ordered entries come for free when a table is frozen
//! - Keys only have a fallible comparison (mixed kinds are incomparable),
//!   which rules out `BTreeMap` without a wrapper that could panic

mod table;

pub use table::MemTable;

use serde::{Deserialize, Serialize};

use crate::model::{Document, Key};

/// Whether an entry holds a value or marks a deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryFlag {
    /// A live document
    Live,

    /// A tombstone (deleted key)
    Deleted,
}

/// Entry stored in the MemTable
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    key: Key,
    document: Option<Document>,
    flag: EntryFlag,
}

impl Entry {
    pub fn live(key: Key, document: Document) -> Self {
        Self {
            key,
            document: Some(document),
            flag: EntryFlag::Live,
        }
    }

    pub fn tombstone(key: Key) -> Self {
        Self {
            key,
            document: None,
            flag: EntryFlag::Deleted,
        }
    }

    pub fn key(&self) -> &Key {
        &self.key
    }

    /// The document, `None` for tombstones
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn flag(&self) -> EntryFlag {
        self.flag
    }

    pub fn is_live(&self) -> bool {
        self.flag == EntryFlag::Live
    }

    pub fn is_tombstone(&self) -> bool {
        self.flag == EntryFlag::Deleted
    }
}

/// Outcome of a point lookup in a single generation
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// The key is live with this document
    Live(Document),

    /// The key's slot holds a tombstone
    Tombstoned,

    /// The key was never written to this generation
    NotFound,
}

impl Lookup {
    /// The live document, if any; tombstones and misses both yield `None`
    pub fn into_document(self) -> Option<Document> {
        match self {
            Lookup::Live(document) => Some(document),
            Lookup::Tombstoned | Lookup::NotFound => None,
        }
    }
}
