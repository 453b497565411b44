//! Command handlers for the `soma` CLI.
//!
//! Each submodule implements one command and returns its output as a
//! string; [`crate::run`] dispatches to them.

mod tokens;

pub use tokens::{tokens, tokens_usage};
