//! Calculator facade over the operation registry.
//!
//! [`Calculator`] owns an [`OperationRegistry`] and adds dispatch, runtime
//! registration and left-to-right chaining on top of it.
//!
//! # Example
//!
//! ```
//! use opcalc::{BuiltinOp, Calculator, ChainStep};
//!
//! let mut calc = Calculator::new();
//! assert_eq!(calc.calculate(BuiltinOp::Add, 2.0, 3.0), Ok(5.0));
//!
//! calc.add_operation("POWER", |a, b| Ok(a.powf(b)));
//! assert_eq!(calc.calculate("POWER", 2.0, 3.0), Ok(8.0));
//!
//! let steps = [ChainStep::new(BuiltinOp::Add, 3.0), ChainStep::new(BuiltinOp::Multiply, 2.0)];
//! assert_eq!(calc.chain_operations(5.0, &steps), Ok(16.0));
//! ```

pub mod builtin;
pub mod chain;
pub mod key;
pub mod registry;

pub use chain::ChainStep;
pub use key::{BuiltinOp, OperationKey};
pub use registry::{OperationFn, OperationRegistry, operation};

use crate::config::CalculatorConfig;
use crate::error::{CalcError, CalcResult};

/// Arithmetic calculator backed by a mutable operation registry.
#[derive(Debug, Clone)]
pub struct Calculator {
    registry: OperationRegistry,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Calculator with the four builtin operations.
    pub fn new() -> Self {
        Self::with_registry(OperationRegistry::with_builtins())
    }

    /// Calculator that uses `registry` verbatim; builtins are not added.
    pub fn with_registry(registry: impl Into<OperationRegistry>) -> Self {
        Self {
            registry: registry.into(),
        }
    }

    /// Builtins plus the aliases declared in configuration.
    ///
    /// An alias may target another alias; aliases resolve in dependency order
    /// regardless of their names. Alias names that parse as a builtin and
    /// alias cycles are rejected with [`CalcError::InvalidAlias`]; a target
    /// that never resolves fails with [`CalcError::UnsupportedOperation`].
    pub fn from_settings(config: &CalculatorConfig) -> CalcResult<Self> {
        let mut pending = Vec::with_capacity(config.aliases.len());
        for (alias, target) in &config.aliases {
            if let Some(op) = BuiltinOp::from_name(alias.trim()) {
                return Err(CalcError::InvalidAlias {
                    alias: alias.clone(),
                    reason: format!("name is reserved for builtin operation {op}"),
                });
            }
            let Ok(target) = target.parse::<OperationKey>();
            pending.push((OperationKey::custom(alias.as_str()), target));
        }

        let mut calc = Self::new();
        while !pending.is_empty() {
            let (ready, blocked): (Vec<_>, Vec<_>) = pending
                .into_iter()
                .partition(|(_, target)| calc.supports(target));
            if ready.is_empty() {
                return Err(unresolved_alias(&blocked));
            }
            for (alias, target) in ready {
                calc.alias_operation(alias, &target)?;
            }
            pending = blocked;
        }
        Ok(calc)
    }

    /// Apply the operation bound to `key` to `(a, b)`.
    ///
    /// Unknown keys fail with [`CalcError::UnsupportedOperation`]; failures
    /// raised by the operation itself are returned unchanged.
    pub fn calculate(&self, key: impl Into<OperationKey>, a: f64, b: f64) -> CalcResult<f64> {
        self.registry.invoke(&key.into(), a, b)
    }

    /// Register `f` under `key`, replacing any existing binding.
    pub fn add_operation<F>(&mut self, key: impl Into<OperationKey>, f: F)
    where
        F: Fn(f64, f64) -> CalcResult<f64> + Send + Sync + 'static,
    {
        let key = key.into();
        if self.registry.register(key.clone(), operation(f)).is_some() {
            tracing::debug!("[calculator] replaced operation: {key}");
        } else {
            tracing::debug!("[calculator] registered operation: {key}");
        }
    }

    /// Remove the operation bound to `key`. Returns whether one was bound.
    pub fn remove_operation(&mut self, key: impl Into<OperationKey>) -> bool {
        let key = key.into();
        let removed = self.registry.remove(&key).is_some();
        if removed {
            tracing::debug!("[calculator] removed operation: {key}");
        }
        removed
    }

    /// Bind `alias` to the function currently registered under `target`.
    ///
    /// Later changes to `target` do not affect the alias.
    pub fn alias_operation(
        &mut self,
        alias: impl Into<OperationKey>,
        target: &OperationKey,
    ) -> CalcResult<()> {
        let f = self
            .registry
            .get(target)
            .cloned()
            .ok_or_else(|| CalcError::unsupported(target))?;
        let alias = alias.into();
        tracing::debug!("[calculator] aliased operation: {alias} -> {target}");
        self.registry.register(alias, f);
        Ok(())
    }

    /// Fold `steps` left to right starting from `initial`.
    ///
    /// The first failing step aborts the fold and its error is returned.
    pub fn chain_operations<'a, I>(&self, initial: f64, steps: I) -> CalcResult<f64>
    where
        I: IntoIterator<Item = &'a ChainStep>,
    {
        steps.into_iter().try_fold(initial, |acc, step| {
            let next = self.registry.invoke(&step.key, acc, step.operand)?;
            tracing::trace!("[calculator] chain {acc} {step} = {next}");
            Ok(next)
        })
    }

    pub fn supports(&self, key: impl Into<OperationKey>) -> bool {
        self.registry.contains(&key.into())
    }

    /// Supported operation keys, builtins first.
    pub fn operations(&self) -> Vec<OperationKey> {
        self.registry.keys()
    }

    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }
}

/// Error for aliases that can no longer make progress.
fn unresolved_alias(blocked: &[(OperationKey, OperationKey)]) -> CalcError {
    let is_pending = |key: &OperationKey| blocked.iter().any(|(alias, _)| alias == key);

    // A target outside the pending set is simply unknown; otherwise every
    // remaining alias waits on another one.
    if let Some((_, target)) = blocked.iter().find(|(_, target)| !is_pending(target)) {
        return CalcError::unsupported(target);
    }
    let (alias, target) = &blocked[0];
    CalcError::InvalidAlias {
        alias: alias.to_string(),
        reason: format!("alias cycle through '{target}'"),
    }
}
