//! Per-invocation variable bindings.
//!
//! One flat scope: the language has no blocks or functions, so there is no
//! nesting to model. Built fresh for every invocation; nothing survives to
//! the next one.

use rustc_hash::FxHashMap;
use tally_ir::Value;

/// Variable bindings for one invocation, seeded with the constants.
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    /// A fresh environment containing `pi` and `e`.
    pub fn fresh() -> Self {
        let mut bindings = FxHashMap::default();
        bindings.insert("pi".to_string(), Value::Number(std::f64::consts::PI));
        bindings.insert("e".to_string(), Value::Number(std::f64::consts::E));
        Environment { bindings }
    }

    /// Add or overwrite a binding.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Look up a binding by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// The full binding map, in the shape the preprocessor substitutes from.
    #[inline]
    pub fn bindings(&self) -> &FxHashMap<String, Value> {
        &self.bindings
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::fresh()
    }
}
