//! componentgen - Scaffold React components from built-in templates.
//!
//! Given a component category (`Button`, `Input`) and a dialect, componentgen
//! renders a complete component file and writes it to
//! `<components_dir>/<Category>/<Category>.<ext>`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project configuration loading
//! - [`error`] - Error types and result aliases
//! - [`output`] - Directory creation and atomic file writes
//! - [`template`] - Template registry and renderer
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use componentgen::template::Dialect;
//!
//! let source = componentgen::generate("Input", Dialect::JavaScript).unwrap();
//! assert!(source.body.contains("placeholder: 'Enter text...',"));
//! assert!(source.body.ends_with("export default Input;"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod template;
pub mod ui;

pub use error::{ComponentgenError, Result};

use template::{Dialect, Registry, RenderedSource};

/// Render a built-in component category.
///
/// # Errors
///
/// Returns [`ComponentgenError::UnknownCategory`] if `category` is not
/// registered.
pub fn generate(category: &str, dialect: Dialect) -> Result<RenderedSource> {
    Registry::builtin().render(category, dialect)
}
