//! Generation Module
//!
//! Frozen, read-only memtables and the chain that orders them.
//!
//! ## Responsibilities
//! - Freeze a memtable by moving it behind a read-only wrapper
//! - Keep frozen generations newest → oldest
//! - Fall back across generations on point lookups
//! - Let an external collaborator swap a generation for another
//!   representation (e.g. a handle onto an on-disk table)
//!
//! ## Lookup Contract
//! Any [`Generation`] must answer lookups exactly as the in-memory
//! [`FrozenTable`] it stands in for would: same keys, same tombstones,
//! same documents.

mod chain;
mod frozen;

pub use chain::GenerationChain;
pub use frozen::FrozenTable;

use crate::error::Result;
use crate::memtable::Lookup;
use crate::model::Key;

/// Identifies one memtable epoch; assigned when the memtable becomes current
pub type GenerationId = u64;

/// Read-only view of one frozen generation
pub trait Generation: Send + Sync {
    fn id(&self) -> GenerationId;

    /// Three-way point lookup
    fn lookup(&self, key: &Key) -> Result<Lookup>;

    /// Number of entries, tombstones included
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Quick range check; `false` only if the key is definitely absent
    fn might_contain(&self, _key: &Key) -> Result<bool> {
        Ok(true)
    }
}
