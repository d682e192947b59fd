//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

/// componentgen - Scaffold React components from built-in templates.
#[derive(Debug, Parser)]
#[command(name = "componentgen")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true, subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(flatten)]
    pub generate: GenerateArgs,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only print errors and requested data
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the available component categories
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for generating a component (the default command).
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    /// Component category to scaffold (for example Button or Input)
    #[arg(required = true)]
    pub category: Option<String>,

    /// Generate a TypeScript component (.tsx)
    #[arg(short = 't', long = "ts", visible_alias = "typescript", conflicts_with = "js")]
    pub ts: bool,

    /// Generate a JavaScript component (.jsx, the default)
    #[arg(short = 'j', long = "js", visible_alias = "javascript")]
    pub js: bool,

    /// Components directory (default: src/components, or .componentgen.yml)
    #[arg(short, long, env = "COMPONENTGEN_DIR")]
    pub dir: Option<PathBuf>,

    /// Print the component instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Rewrite the single-dash `-ts` and `-js` spellings to `--ts` and `--js`.
///
/// Clap reads `-ts` as the short flags `-t -s`. Arguments after a `--`
/// separator are passed through untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut after_separator = false;
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if after_separator {
                return arg;
            }
            match arg.to_str() {
                Some("--") => {
                    after_separator = true;
                    arg
                }
                Some("-ts") => OsString::from("--ts"),
                Some("-js") => OsString::from("--js"),
                _ => arg,
            }
        })
        .collect()
}
