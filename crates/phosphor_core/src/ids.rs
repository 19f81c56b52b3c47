//! Element identifiers.

use serde::{Deserialize, Serialize};

/// Unique identifier of a screen element.
///
/// Ids are generated at parse time, never authored. Only uniqueness is
/// guaranteed to callers; the numeric value is an implementation detail.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("el{_0}")]
pub struct ElementId(u64);

impl ElementId {
    /// Wraps a raw id value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Monotonic source of element ids.
///
/// One generator is used per parse, so ids increase in authored order.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    /// Creates a generator starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out the next unused id.
    pub fn next_id(&mut self) -> ElementId {
        let id = ElementId(self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_monotonic() {
        let mut ids = IdGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        assert!(a < b);
        assert_eq!(a.to_string(), "el0");
        assert_eq!(b.value(), 1);
    }
}
