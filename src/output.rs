//! Writing rendered components to disk.
//!
//! Each component lands at `<components_dir>/<category>/<category>.<ext>`.
//! The directory is created on demand and an existing file is replaced
//! wholesale.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ComponentgenError, Result};
use crate::template::props::is_component_name;
use crate::template::RenderedSource;

/// Where a rendered component is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTarget {
    /// Directory holding the component file
    pub dir: PathBuf,
    /// Full path of the component file
    pub file: PathBuf,
}

impl OutputTarget {
    /// Target for a rendered source under `components_dir`.
    pub fn for_source(components_dir: &Path, source: &RenderedSource) -> Self {
        let dir = components_dir.join(&source.category);
        let file = dir.join(source.file_name());
        Self { dir, file }
    }
}

/// Create a directory and its parents. Succeeds if it already exists.
pub fn ensure_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ComponentgenError::DirectoryCreationFailed {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with `contents`.
///
/// Writes to a sibling temp file, then renames it into place, so readers see
/// either the old file or the complete new one.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let temp_path = temp_path_for(path);

    let result = fs::write(&temp_path, contents).and_then(|_| fs::rename(&temp_path, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&temp_path);
        return Err(ComponentgenError::WriteFailed {
            path: path.to_path_buf(),
            source,
        });
    }

    Ok(())
}

/// Ensure the component directory and write the rendered body.
///
/// The category must be a plain component name so the file stays inside
/// `components_dir`.
pub fn write_component(components_dir: &Path, source: &RenderedSource) -> Result<OutputTarget> {
    if !is_component_name(&source.category) {
        return Err(ComponentgenError::InvalidComponentName {
            name: source.category.clone(),
        });
    }
    let target = OutputTarget::for_source(components_dir, source);

    ensure_dir(&target.dir)?;
    if target.file.exists() {
        tracing::debug!("Overwriting {}", target.file.display());
    }
    write_atomic(&target.file, &source.body)?;

    tracing::debug!(
        bytes = source.body.len(),
        "Wrote {}",
        target.file.display()
    );
    Ok(target)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
