//! # docstore
//!
//! An in-memory key-value document store with an LSM-style write path:
//! - Sorted memtable with tombstone deletes
//! - Capacity-triggered rotation into an immutable generation chain
//! - Point lookups that fall back newest → oldest across generations
//! - Hooks for external persistence and indexing collaborators
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        DataStore                             │
//! │        add / set / remove / delete / get / has               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  key extraction + validation
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐  rotate  ┌──────────────────────────────┐
//!   │  MemTable   │ ───────▶ │       GenerationChain         │
//!   │  (current)  │          │  gen N ─▶ gen N-1 ─▶ ... gen 1│
//!   └─────────────┘          └──────────────┬───────────────┘
//!                                           │ freeze / mutation hooks
//!                                           ▼
//!                                ┌─────────────────────┐
//!                                │  External           │
//!                                │  collaborators      │
//!                                └─────────────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

#[macro_use]
mod macros;

pub mod error;
pub mod config;

pub mod model;
pub mod memtable;
pub mod generation;
pub mod hooks;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StoreError, Result};
pub use config::Config;
pub use model::{Document, Key, Value};
pub use store::DataStore;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of docstore
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
