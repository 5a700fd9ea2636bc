//! Command-line interface module
//!
//! Provides argument parsing and command execution.

pub mod args;
pub mod commands;

pub use args::{Args, Operation, parse_args, print_usage};
pub use commands::execute_command;
