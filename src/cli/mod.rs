//! Command-line interface for componentgen.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{normalize_args, Cli, Commands, CompletionsArgs, GenerateArgs, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
