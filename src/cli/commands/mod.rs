//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results. Commands are
//! routed by [`CommandDispatcher`]; generating a component is the default
//! when no subcommand is given.

pub mod completions;
pub mod dispatcher;
pub mod generate;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
