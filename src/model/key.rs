//! Primary keys
//!
//! A key is the tuple of a document's primary key column values, in
//! declaration order.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};

use super::{ScalarKind, Value};

/// Ordered tuple of scalar values identifying a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Key(Vec<Value>);

impl Key {
    pub fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    /// Number of components in this key
    pub fn arity(&self) -> usize {
        self.0.len()
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    /// Kind of each component, in order
    pub fn kinds(&self) -> impl Iterator<Item = ScalarKind> + '_ {
        self.0.iter().map(Value::kind)
    }

    /// Lexicographic comparison by position
    ///
    /// Fails with `IncomparableKey` when the arities differ or when any
    /// position holds values of different kinds, even past the first
    /// position that already decides the order.
    pub fn try_cmp(&self, other: &Key) -> Result<Ordering> {
        if self.arity() != other.arity() {
            return Err(StoreError::IncomparableKey(format!(
                "{} has {} components, {} has {}",
                self,
                self.arity(),
                other,
                other.arity()
            )));
        }

        let mut ordering = Ordering::Equal;
        for (position, (a, b)) in self.0.iter().zip(other.0.iter()).enumerate() {
            match a.try_cmp(b) {
                Some(o) => {
                    if ordering == Ordering::Equal {
                        ordering = o;
                    }
                }
                None => {
                    return Err(StoreError::IncomparableKey(format!(
                        "position {} holds {} in {} but {} in {}",
                        position,
                        a.kind(),
                        self,
                        b.kind(),
                        other
                    )));
                }
            }
        }

        Ok(ordering)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (i, value) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str(")")
    }
}

impl From<Vec<Value>> for Key {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl FromIterator<Value> for Key {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
