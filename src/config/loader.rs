//! Configuration file discovery and loading.
//!
//! The components directory is resolved in this order (first wins):
//! 1. `--dir` flag or `COMPONENTGEN_DIR`
//! 2. `components_dir` in `<project>/.componentgen.yml`
//! 3. `src/components`
//!
//! Relative directories are joined onto the project root.

use crate::config::schema::ProjectConfig;
use crate::error::{ComponentgenError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Project configuration file name.
pub const CONFIG_FILE_NAME: &str = ".componentgen.yml";

/// Path of the project config file, if it exists.
pub fn find_config_file(project_root: &Path) -> Option<PathBuf> {
    let path = project_root.join(CONFIG_FILE_NAME);
    if path.is_file() {
        Some(path)
    } else {
        None
    }
}

/// Parse YAML content into a [`ProjectConfig`].
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config(content: &str, source_path: &Path) -> Result<ProjectConfig> {
    // An empty file deserializes as YAML null.
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| ComponentgenError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load the project config, falling back to defaults when no file exists.
///
/// # Errors
///
/// Returns `ConfigParseError` if the file exists but is not valid.
pub fn load_config(project_root: &Path) -> Result<ProjectConfig> {
    match find_config_file(project_root) {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            let content = fs::read_to_string(&path)?;
            parse_config(&content, &path)
        }
        None => Ok(ProjectConfig::default()),
    }
}

/// Resolve the absolute components directory for a project.
pub fn resolve_components_dir(
    project_root: &Path,
    dir_override: Option<&Path>,
    config: &ProjectConfig,
) -> PathBuf {
    let dir = dir_override
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.components_dir());

    if dir.is_absolute() {
        dir
    } else {
        project_root.join(dir)
    }
}
