//! Data Model Module
//!
//! Typed scalars, keys and documents shared by every layer of the store.
//!
//! ## Responsibilities
//! - Tagged scalar values with a per-kind total order
//! - Fixed-arity keys compared lexicographically by position
//! - Documents as ordered column → value mappings
//! - Primary key extraction and key shape validation

mod document;
mod key;
mod schema;
mod value;

pub use document::Document;
pub use key::Key;
pub use schema::KeySchema;
pub use value::{ScalarKind, Value};
