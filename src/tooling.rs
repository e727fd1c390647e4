//! Tooling & Integration Layer
//!
//! Command-line access to the browsing core for local use and scripting.

pub mod cli;
mod format;

pub use cli::{Cli, CliContext, Commands};
