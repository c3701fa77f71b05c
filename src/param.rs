//! Parameter bindings: named value sets iterated once-per-value.
//!
//! A binding associates a name and an ordered list of values with the test
//! that consumes them. The session drives iteration; the cursor only ever
//! advances. Lookup is a linear predicate scan over the binding collection —
//! parameter sets are expected to stay small, so no index is kept.

use crate::collection::Collection;
use crate::value::Value;

/// A named, ordered set of parameter values feeding one test.
///
/// The `owner` field is a plain display-name association back to the
/// consuming test, never an owning handle: bindings and tests have
/// independent lifetimes.
///
/// # Examples
///
/// ```rust
/// use vigil::param::ParamBinding;
/// use vigil::value::Value;
/// let b = ParamBinding::new("inputs", vec![Value::Int(2), Value::Int(0)], "divide_by");
/// assert_eq!(b.count(), 2);
/// assert_eq!(b.cursor(), 0);
/// assert!(!b.is_exhausted());
/// ```
#[derive(Debug, Clone)]
pub struct ParamBinding {
    name: String,
    values: Vec<Value>,
    cursor: usize,
    owner: String,
}

impl ParamBinding {
    /// Constructs a binding with the cursor at 0. The value count is fixed
    /// at creation; it is always `values.len()`.
    pub fn new(name: impl Into<String>, values: Vec<Value>, owner: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values,
            cursor: 0,
            owner: owner.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display name of the consuming test (non-owning association).
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Index of the next value to be consumed. Holds `cursor <= count` always.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor == self.values.len()
    }

    /// The value under the cursor, or `None` once exhausted.
    pub fn current(&self) -> Option<&Value> {
        self.values.get(self.cursor)
    }

    pub fn value_at(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Moves the cursor past the current value. Saturates at `count`.
    pub(crate) fn advance(&mut self) {
        if self.cursor < self.values.len() {
            self.cursor += 1;
        }
    }
}

/// Finds the first binding whose name matches exactly (case-sensitive),
/// scanning in insertion order. `None` is a normal, recoverable outcome,
/// even on an empty collection.
pub fn lookup<'a>(params: &'a Collection<ParamBinding>, name: &str) -> Option<&'a ParamBinding> {
    params.find(|binding| binding.name == name)
}

/// Mutable variant of [`lookup`], used by the session to drive iteration.
pub fn lookup_mut<'a>(
    params: &'a mut Collection<ParamBinding>,
    name: &str,
) -> Option<&'a mut ParamBinding> {
    params.find_mut(|binding| binding.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Value> {
        values.iter().map(|&n| Value::Int(n)).collect()
    }

    #[test]
    fn lookup_is_case_sensitive_exact_match() {
        let mut params = Collection::new();
        params.insert(ParamBinding::new("inputs", ints(&[1]), "t"));
        params.insert(ParamBinding::new("Inputs", ints(&[2]), "t"));

        let found = lookup(&params, "Inputs").unwrap();
        assert_eq!(found.value_at(0), Some(&Value::Int(2)));
        assert!(lookup(&params, "INPUTS").is_none());
    }

    #[test]
    fn lookup_miss_on_empty_collection_is_none() {
        let params: Collection<ParamBinding> = Collection::new();
        assert!(lookup(&params, "anything").is_none());
    }

    #[test]
    fn lookup_returns_first_match_in_insertion_order() {
        let mut params = Collection::new();
        params.insert(ParamBinding::new("dup", ints(&[1]), "a"));
        params.insert(ParamBinding::new("dup", ints(&[2]), "b"));
        assert_eq!(lookup(&params, "dup").unwrap().owner(), "a");
    }

    #[test]
    fn advance_saturates_at_count() {
        let mut binding = ParamBinding::new("p", ints(&[7]), "t");
        binding.advance();
        assert!(binding.is_exhausted());
        binding.advance();
        assert_eq!(binding.cursor(), 1);
        assert!(binding.current().is_none());
    }
}
