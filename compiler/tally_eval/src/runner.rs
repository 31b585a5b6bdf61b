//! The script runner: statement sequencing, failure containment, and the
//! process-wide last-result register.
//!
//! One invocation = one string of `;`-separated statements. Statements run
//! in order against a fresh environment; a `==` statement short-circuits
//! the rest. Every preprocess/parse/runtime failure is caught here, logged
//! with its code, and replaced by the sentinel error value — the caller
//! always gets a plain [`Value`] back.

use std::sync::OnceLock;

use parking_lot::Mutex;
use tally_diagnostic::{Diagnostic, ParseError, PreprocessError};
use tally_ir::{TimeFacts, Value};

use crate::clock;
use crate::environment::Environment;
use crate::exec::Evaluator;
use crate::rng::Rng;

/// The exact input that returns [`HELP_TEXT`] instead of being evaluated.
pub const HELP_LITERAL: &str = "=!Help";

/// Capability summary returned for [`HELP_LITERAL`].
pub const HELP_TEXT: &str = "Tally v1 | \\n (new line), \\t (tab) | \
    ops: +, -, *, /, %, ^, !^, joint | \
    fns: sqrt, log, abs, round, floor, ceil, min, max, sin, cos, tan, \
    len, upper, lower, clamp, rand";

/// The sentinel returned in place of any contained failure.
pub const ERROR_SENTINEL: &str = "Error\t\n\u{000B}!";

/// A script engine: the last-result register plus the RNG behind `rand`.
///
/// One process-wide instance backs [`evaluate`]/[`last_result`]; separate
/// instances exist so hosts and tests can run isolated engines with a
/// fixed seed. A single mutex guards an entire invocation, so concurrent
/// callers never observe interleaved register writes or shared RNG draws.
pub struct Engine {
    state: Mutex<EngineState>,
}

struct EngineState {
    last: Value,
    rng: Rng,
}

impl Engine {
    /// Engine seeded from the wall clock.
    pub fn new() -> Self {
        Self::with_seed(clock::clock_seed())
    }

    /// Engine with a fixed RNG seed, for deterministic use.
    pub fn with_seed(seed: u64) -> Self {
        Engine {
            state: Mutex::new(EngineState {
                last: Value::Number(0.0),
                rng: Rng::seeded(seed),
            }),
        }
    }

    /// Run a script to completion and return its value.
    ///
    /// Never panics and never raises: failures come back as the sentinel
    /// value and leave the register untouched.
    pub fn evaluate(&self, input: &str) -> Value {
        let trimmed = input.trim();
        if trimmed == HELP_LITERAL {
            return Value::text(HELP_TEXT);
        }
        let time = clock::capture();
        let mut state = self.state.lock();
        match run_script(trimmed, &time, &mut state.rng) {
            Ok(value) => {
                state.last = value.clone();
                value
            }
            Err(diagnostic) => {
                // The caller only ever sees the sentinel; the detail goes
                // to the log for diagnosis.
                tracing::debug!(
                    code = diagnostic.code(),
                    phase = diagnostic.phase(),
                    detail = %diagnostic,
                    "contained script failure"
                );
                Value::text(ERROR_SENTINEL)
            }
        }
    }

    /// Read the last-result register.
    ///
    /// `Number(0)` before the first completed invocation.
    pub fn last_result(&self) -> Value {
        self.state.lock().last.clone()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Run the statements of one invocation.
fn run_script(input: &str, time: &TimeFacts, rng: &mut Rng) -> Result<Value, Diagnostic> {
    let source = rewrite_escapes(input);
    let mut env = Environment::fresh();
    let mut current = Value::Number(0.0);

    for statement in source.split(';') {
        if statement.trim().is_empty() {
            continue;
        }
        if let Some(idx) = statement.find("==") {
            // Early exit: everything before the first `==` is dead text,
            // and no later statement runs.
            return eval_statement(&statement[idx + 2..], &env, time, rng);
        } else if let Some(idx) = statement.find('=') {
            let name = statement[..idx].trim();
            if !tally_lexer::is_identifier(name) {
                return Err(PreprocessError::InvalidAssignTarget(name.to_string()).into());
            }
            let value = eval_statement(&statement[idx + 1..], &env, time, rng)?;
            env.define(name, value.clone());
            current = value;
        } else {
            current = eval_statement(statement, &env, time, rng)?;
        }
    }
    Ok(current)
}

/// One statement through the pipeline: preprocess, lex, parse, evaluate.
fn eval_statement(
    text: &str,
    env: &Environment,
    time: &TimeFacts,
    rng: &mut Rng,
) -> Result<Value, Diagnostic> {
    let normalized = tally_lexer::preprocess(text, env.bindings(), time)?;
    if normalized.is_empty() {
        return Err(ParseError::EmptyExpression.into());
    }
    let tokens = tally_lexer::lex(&normalized)?;
    let expr = tally_parse::parse(tokens)?;
    let mut evaluator = Evaluator::new(env, rng);
    Ok(evaluator.eval(&expr)?)
}

/// Rewrite the `\n` and `\t` escape sequences to real control characters.
///
/// Runs over the whole input before statement splitting, so the sequences
/// work inside and outside string literals alike.
fn rewrite_escapes(input: &str) -> String {
    input.replace("\\n", "\n").replace("\\t", "\t")
}

fn global_engine() -> &'static Engine {
    static ENGINE: OnceLock<Engine> = OnceLock::new();
    ENGINE.get_or_init(Engine::new)
}

/// Evaluate a script against the process-wide engine.
///
/// Accepts arbitrary text and always returns a [`Value`]; malformed input
/// degrades to the sentinel error value instead of propagating.
pub fn evaluate(input: &str) -> Value {
    global_engine().evaluate(input)
}

/// Read the process-wide last-result register.
pub fn last_result() -> Value {
    global_engine().last_result()
}
