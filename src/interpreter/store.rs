use std::collections::HashMap;

use crate::interpreter::value::Value;

/// Stores the variable bindings of a single run.
///
/// A store is created empty when a run starts, mutated in place by
/// declaration and assignment statements, and discarded when the run
/// completes. Names are case-sensitive and unique: re-declaring or
/// reassigning a name overwrites the previous binding, never shadows it.
///
/// ## Usage
///
/// The store is owned by the program runner and handed to evaluation
/// functions by reference, so expression evaluation can never create or
/// destroy bindings on its own.
#[derive(Debug, Default)]
pub struct VariableStore {
    bindings: HashMap<String, Value>,
}

impl VariableStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { bindings: HashMap::new() }
    }

    /// Looks up a binding by its exact, case-sensitive name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Binds `name` to `value`, replacing any previous binding.
    ///
    /// # Example
    /// ```
    /// use swiftlet::{Value, VariableStore};
    ///
    /// let mut store = VariableStore::new();
    /// store.set("x", Value::Integer(5));
    /// store.set("x", Value::Integer(7));
    ///
    /// assert_eq!(store.get("x"), Some(&Value::Integer(7)));
    /// assert_eq!(store.len(), 1);
    /// ```
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// The number of live bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Reports whether the store holds no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
