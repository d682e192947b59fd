//! List command implementation.
//!
//! The `componentgen list` command lists the registered component categories
//! and the props each one exposes.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::error::{ComponentgenError, Result};
use crate::template::{ComponentTemplate, Dialect, PropKind, PropSpec, Registry};
use crate::ui::theme::Theme;
use crate::ui::{should_use_colors, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

/// JSON shape of one listed category.
#[derive(Debug, Serialize)]
struct CategoryListing<'a> {
    name: &'a str,
    description: &'a str,
    extensions: Vec<&'static str>,
    props: &'a [PropSpec],
}

impl<'a> From<&'a ComponentTemplate> for CategoryListing<'a> {
    fn from(component: &'a ComponentTemplate) -> Self {
        Self {
            name: component.name(),
            description: component.description(),
            extensions: Dialect::ALL.iter().map(Dialect::extension).collect(),
            props: component.props(),
        }
    }
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = Registry::builtin();

        if self.args.json {
            let listing: Vec<CategoryListing<'_>> =
                registry.categories().iter().map(CategoryListing::from).collect();
            let json = serde_json::to_string_pretty(&listing)
                .map_err(|e| ComponentgenError::Other(e.into()))?;
            ui.emit(&json);
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        for (i, component) in registry.categories().iter().enumerate() {
            if i > 0 {
                ui.message("");
            }
            ui.message(&format!(
                "{} {}",
                theme.key.apply_to(component.name()),
                theme.dim.apply_to(format!("- {}", component.description()))
            ));
            for prop in component.props() {
                ui.message(&format!("  {}", describe_prop(prop)));
            }
        }

        Ok(CommandResult::success())
    }
}

/// `label: text (required)` / `color: text = '#fff'`
fn describe_prop(prop: &PropSpec) -> String {
    let kind = match prop.kind {
        PropKind::Text => "text",
        PropKind::Handler => "handler",
    };
    match (prop.required, prop.default_expr()) {
        (true, _) => format!("{}: {} (required)", prop.name, kind),
        (false, Some(default)) => format!("{}: {} = {}", prop.name, kind, default),
        (false, None) => format!("{}: {}", prop.name, kind),
    }
}
