//! Configuration for docstore
//!
//! Centralized configuration with sensible defaults.

use std::collections::HashSet;

use crate::error::{Result, StoreError};
use crate::model::ScalarKind;

/// Default number of entries a memtable holds before rotation
pub const DEFAULT_CAPACITY: usize = 4;

/// Main configuration for a DataStore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // MemTable Configuration
    // -------------------------------------------------------------------------
    /// Max number of entries (tombstones included) in the current memtable
    /// before the next write rotates it into the generation chain
    pub capacity: usize,

    // -------------------------------------------------------------------------
    // Key Configuration
    // -------------------------------------------------------------------------
    /// Primary key columns, in key order
    pub primary_key: Vec<String>,

    /// Declared scalar kind per primary key column.
    /// When `None`, kinds are pinned by the first key the store sees.
    pub key_kinds: Option<Vec<ScalarKind>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            primary_key: vec!["id".to_string()],
            key_kinds: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the configuration for values the store cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(StoreError::Config(
                "capacity must be greater than zero".to_string(),
            ));
        }

        if self.primary_key.is_empty() {
            return Err(StoreError::Config(
                "primary key must name at least one column".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for column in &self.primary_key {
            if !seen.insert(column.as_str()) {
                return Err(StoreError::Config(format!(
                    "duplicate primary key column: {}",
                    column
                )));
            }
        }

        if let Some(kinds) = &self.key_kinds {
            if kinds.len() != self.primary_key.len() {
                return Err(StoreError::Config(format!(
                    "{} key kinds declared for {} primary key columns",
                    kinds.len(),
                    self.primary_key.len()
                )));
            }
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the memtable capacity (in entries)
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.config.capacity = capacity;
        self
    }

    /// Set the primary key columns
    pub fn primary_key<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.primary_key = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Declare the scalar kind of each primary key column
    pub fn key_kinds(mut self, kinds: impl Into<Vec<ScalarKind>>) -> Self {
        self.config.key_kinds = Some(kinds.into());
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
