//! Component generation.
//!
//! `componentgen <CATEGORY> [--ts]` resolves the category, renders it and
//! writes `<components_dir>/<Category>/<Category>.<ext>`.

use std::path::{Path, PathBuf};

use crate::cli::args::GenerateArgs;
use crate::config::{load_config, resolve_components_dir};
use crate::error::Result;
use crate::output::write_component;
use crate::template::{Dialect, Registry};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The generate command implementation.
pub struct GenerateCommand {
    project_root: PathBuf,
    args: GenerateArgs,
    registry: &'static Registry,
}

impl GenerateCommand {
    /// Create a new generate command using the built-in registry.
    pub fn new(project_root: &Path, args: GenerateArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
            registry: Registry::builtin(),
        }
    }

    /// Dialect selected by the flags.
    pub fn dialect(&self) -> Dialect {
        Dialect::from_static_flag(self.args.ts)
    }
}

impl Command for GenerateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let category = self.args.category.as_deref().unwrap_or_default();

        // Validation precedes any filesystem access.
        let resolved = self.registry.resolve(category, self.dialect())?;
        let source = resolved.render();

        if self.args.dry_run {
            ui.emit(&source.body);
            return Ok(CommandResult::success());
        }

        let config = load_config(&self.project_root)?;
        let components_dir =
            resolve_components_dir(&self.project_root, self.args.dir.as_deref(), &config);
        ui.detail(&format!(
            "Writing {} component to {}",
            source.dialect,
            components_dir.display()
        ));

        let target = write_component(&components_dir, &source)?;
        let shown = target
            .file
            .strip_prefix(&self.project_root)
            .unwrap_or(target.file.as_path());

        tracing::debug!(category, dialect = %source.dialect, "Generated component");
        ui.success(&format!(
            "Component {} created at {}",
            source.category,
            shown.display()
        ));

        Ok(CommandResult::success())
    }
}
