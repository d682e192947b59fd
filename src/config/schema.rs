//! Project configuration schema.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Components directory used when nothing else is configured.
pub const DEFAULT_COMPONENTS_DIR: &str = "src/components";

/// Contents of `.componentgen.yml`.
///
/// Every field is optional; a missing file behaves like an empty one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory that receives `<Category>/<Category>.<ext>` files
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components_dir: Option<PathBuf>,
}

impl ProjectConfig {
    /// The configured components directory, or the default.
    pub fn components_dir(&self) -> PathBuf {
        self.components_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_COMPONENTS_DIR))
    }
}
