//! Evaluator and script runner for Tally.
//!
//! The top of the pipeline: walks expression trees from `tally_parse`,
//! dispatches operators and the fixed function library, and drives whole
//! scripts statement by statement with per-invocation failure containment.
//!
//! The public surface is deliberately tiny:
//!
//! - [`evaluate`] — run a script against the process-wide engine; never
//!   panics, never errors, always returns a [`Value`] (possibly the
//!   sentinel error value).
//! - [`last_result`] — read the persisted last-result register.
//! - [`Engine`] — an isolated engine instance for hosts and tests that
//!   need their own register and a fixed RNG seed.

mod builtins;
mod clock;
mod environment;
mod exec;
mod operators;
mod rng;
mod runner;

pub use environment::Environment;
pub use exec::Evaluator;
pub use rng::Rng;
pub use runner::{evaluate, last_result, Engine, ERROR_SENTINEL, HELP_LITERAL, HELP_TEXT};

// The engine's value type, re-exported so hosts need one import.
pub use tally_ir::Value;
