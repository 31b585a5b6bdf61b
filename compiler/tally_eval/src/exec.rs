//! Expression tree evaluation.

use tally_diagnostic::RuntimeError;
use tally_ir::{Expr, Value};

use crate::builtins;
use crate::environment::Environment;
use crate::operators;
use crate::rng::Rng;

/// Walks one statement's expression tree.
///
/// Variable references are normally gone by this point (the preprocessor
/// substituted them), but reserved function words used outside call
/// position survive as [`Expr::Var`] and resolve here against the
/// environment.
pub struct Evaluator<'a> {
    env: &'a Environment,
    rng: &'a mut Rng,
}

impl<'a> Evaluator<'a> {
    pub fn new(env: &'a Environment, rng: &'a mut Rng) -> Self {
        Evaluator { env, rng }
    }

    /// Evaluate an expression to a value.
    pub fn eval(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match expr {
            Expr::Number(n) => Ok(Value::Number(*n)),
            Expr::Text(s) => Ok(Value::Text(s.clone())),
            Expr::Var(name) => self
                .env
                .lookup(name)
                .cloned()
                .ok_or_else(|| RuntimeError::UnknownVariable(name.clone())),
            Expr::Unary { op, operand } => {
                let value = self.eval(operand)?;
                operators::evaluate_unary(*op, value)
            }
            Expr::Binary { op, left, right } => {
                let left_val = self.eval(left)?;
                let right_val = self.eval(right)?;
                operators::evaluate_binary(left_val, right_val, *op)
            }
            Expr::Call { name, args } => {
                let mut values = Vec::with_capacity(args.len());
                for arg in args {
                    values.push(self.eval(arg)?);
                }
                builtins::call(name, &values, self.rng)
            }
        }
    }
}
