//! Operation registry mapping keys to binary functions.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use super::builtin::register_builtins;
use super::key::OperationKey;
use crate::error::{CalcError, CalcResult};

/// Binary numeric function stored in the registry.
///
/// Shared so a single function can back several keys.
pub type OperationFn = Arc<dyn Fn(f64, f64) -> CalcResult<f64> + Send + Sync>;

/// Wrap a closure or function as an [`OperationFn`].
pub fn operation<F>(f: F) -> OperationFn
where
    F: Fn(f64, f64) -> CalcResult<f64> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Mapping from operation key to the function currently bound to it.
///
/// Each key maps to exactly one function; registering an existing key
/// replaces the previous binding.
#[derive(Clone, Default)]
pub struct OperationRegistry {
    operations: HashMap<OperationKey, OperationFn>,
}

impl OperationRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the four builtin operations.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry);
        registry
    }

    /// Bind `key` to `operation`, returning the function it displaced.
    pub fn register(
        &mut self,
        key: impl Into<OperationKey>,
        operation: OperationFn,
    ) -> Option<OperationFn> {
        self.operations.insert(key.into(), operation)
    }

    /// Remove the binding for `key`.
    pub fn remove(&mut self, key: &OperationKey) -> Option<OperationFn> {
        self.operations.remove(key)
    }

    pub fn get(&self, key: &OperationKey) -> Option<&OperationFn> {
        self.operations.get(key)
    }

    pub fn contains(&self, key: &OperationKey) -> bool {
        self.operations.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Registered keys, builtins first then custom keys by name.
    pub fn keys(&self) -> Vec<OperationKey> {
        let mut keys: Vec<_> = self.operations.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Look up `key` and apply it to `(a, b)`.
    ///
    /// Failures raised by the function itself are returned unchanged.
    pub fn invoke(&self, key: &OperationKey, a: f64, b: f64) -> CalcResult<f64> {
        let operation = self
            .operations
            .get(key)
            .ok_or_else(|| CalcError::unsupported(key))?;
        operation(a, b)
    }
}

impl From<HashMap<OperationKey, OperationFn>> for OperationRegistry {
    fn from(operations: HashMap<OperationKey, OperationFn>) -> Self {
        Self { operations }
    }
}

impl fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}
