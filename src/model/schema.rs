//! Key schema
//!
//! Knows which columns form the primary key and which scalar kind each
//! position holds. Every key is checked here before it reaches a memtable,
//! so comparisons inside the sorted structures never see mismatched shapes.

use crate::config::Config;
use crate::error::{Result, StoreError};

use super::{Document, Key, ScalarKind};

/// Primary key columns plus the pinned kind of each position
#[derive(Debug, Clone)]
pub struct KeySchema {
    columns: Vec<String>,
    kinds: Option<Vec<ScalarKind>>,
}

impl KeySchema {
    /// Create a schema; `kinds` of `None` means "pin on first key"
    pub fn new(columns: Vec<String>, kinds: Option<Vec<ScalarKind>>) -> Self {
        Self { columns, kinds }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.primary_key.clone(), config.key_kinds.clone())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Kinds per position, once declared or pinned
    pub fn kinds(&self) -> Option<&[ScalarKind]> {
        self.kinds.as_deref()
    }

    /// Build the key of a document from its primary key columns
    pub fn extract(&self, document: &Document) -> Result<Key> {
        self.columns
            .iter()
            .map(|column| {
                document
                    .get(column)
                    .cloned()
                    .ok_or_else(|| StoreError::MissingKeyColumn(column.clone()))
            })
            .collect::<Result<Vec<_>>>()
            .map(Key::new)
    }

    /// Check a key's shape without pinning kinds
    ///
    /// Arity is always checked; kinds only once they are known.
    pub fn check(&self, key: &Key) -> Result<()> {
        if key.arity() != self.columns.len() {
            return Err(StoreError::IncomparableKey(format!(
                "{} has {} components, primary key {:?} has {}",
                key,
                key.arity(),
                self.columns,
                self.columns.len()
            )));
        }

        if let Some(kinds) = &self.kinds {
            for (position, (expected, found)) in kinds.iter().zip(key.kinds()).enumerate() {
                if *expected != found {
                    return Err(StoreError::IncomparableKey(format!(
                        "column {:?} expects {} but {} holds {}",
                        self.columns[position], expected, key, found
                    )));
                }
            }
        }

        Ok(())
    }

    /// Check a key's shape, pinning the kinds from it if none are known yet
    pub fn validate(&mut self, key: &Key) -> Result<()> {
        self.check(key)?;

        if self.kinds.is_none() {
            tracing::debug!(key = %key, "pinning primary key kinds");
            self.kinds = Some(key.kinds().collect());
        }

        Ok(())
    }
}
