//! Project configuration for componentgen.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Example
//!
//! ```
//! use componentgen::config::{load_config, resolve_components_dir};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".componentgen.yml"), "components_dir: app/ui").unwrap();
//!
//! let config = load_config(temp.path()).unwrap();
//! let dir = resolve_components_dir(temp.path(), None, &config);
//! assert_eq!(dir, temp.path().join("app/ui"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    find_config_file, load_config, parse_config, resolve_components_dir, CONFIG_FILE_NAME,
};
pub use schema::{ProjectConfig, DEFAULT_COMPONENTS_DIR};
