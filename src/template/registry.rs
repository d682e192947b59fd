//! Built-in component registry.
//!
//! The registry maps a component category and a [`Dialect`] to a
//! [`ResolvedTemplate`]. Templates are embedded at compile time and checked
//! once when the registry loads; a resolved template is the only way to reach
//! the renderer, so a category that passed lookup always renders.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use include_dir::{include_dir, Dir};

use crate::error::{ComponentgenError, Result};

use super::dialect::Dialect;
use super::interpolation::{parse_interpolation, variables, Segment};
use super::manifest::{TemplateManifest, MANIFEST_VERSION};
use super::props::{is_component_name, is_identifier, validate_props, PropSpec};
use super::render::{fill, RenderedSource};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

static BUILTIN: LazyLock<Registry> = LazyLock::new(|| {
    Registry::from_embedded().expect("Built-in component templates should always load")
});

const MANIFEST_PATH: &str = "registry.yml";
const TYPESCRIPT_FRAME_PATH: &str = "frames/typescript.tmpl";
const JAVASCRIPT_FRAME_PATH: &str = "frames/javascript.tmpl";

/// Variables a markup fragment may reference.
const MARKUP_VARIABLES: &[&str] = &["component"];

/// Variables the statically typed frame may reference.
const TYPESCRIPT_VARIABLES: &[&str] = &["component", "react_import", "prop_fields", "params", "body"];

/// Variables the dynamically typed frame may reference.
const JAVASCRIPT_VARIABLES: &[&str] = &["component", "params", "body", "prop_types", "default_props"];

/// Raw template text a registry is built from.
#[derive(Debug, Clone, Default)]
pub struct TemplateSources<'a> {
    /// Manifest YAML
    pub manifest: &'a str,
    /// Frame for the statically typed dialect
    pub typescript_frame: &'a str,
    /// Frame for the dynamically typed dialect
    pub javascript_frame: &'a str,
    /// Markup fragments keyed by their manifest path
    pub markup: HashMap<&'a str, &'a str>,
}

/// A registered component category, ready to render.
#[derive(Debug, Clone)]
pub struct ComponentTemplate {
    name: String,
    description: String,
    type_imports: Vec<String>,
    props: Vec<PropSpec>,
    markup: Vec<Segment>,
}

impl ComponentTemplate {
    /// Category name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human-readable description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Type-only imports for the statically typed dialect.
    pub fn type_imports(&self) -> &[String] {
        &self.type_imports
    }

    /// Prop specification in declaration order.
    pub fn props(&self) -> &[PropSpec] {
        &self.props
    }

    /// Prop names in declaration order.
    pub fn prop_names(&self) -> impl Iterator<Item = &str> {
        self.props.iter().map(|p| p.name.as_str())
    }

    pub(crate) fn markup(&self) -> &[Segment] {
        &self.markup
    }
}

/// The template bound to one (category, dialect) pair.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedTemplate<'a> {
    component: &'a ComponentTemplate,
    frame: &'a [Segment],
    dialect: Dialect,
}

impl<'a> ResolvedTemplate<'a> {
    /// The matched component category.
    pub fn component(&self) -> &'a ComponentTemplate {
        self.component
    }

    /// The dialect this template renders.
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Registered category name.
    pub fn name(&self) -> &'a str {
        self.component.name()
    }

    /// Render using the registered category name.
    pub fn render(&self) -> RenderedSource {
        // Registered names were checked when the registry loaded.
        fill(self, self.name())
    }

    pub(crate) fn frame(&self) -> &'a [Segment] {
        self.frame
    }
}

/// Read-only registry of built-in component templates.
#[derive(Debug, Clone)]
pub struct Registry {
    components: Vec<ComponentTemplate>,
    typescript_frame: Vec<Segment>,
    javascript_frame: Vec<Segment>,
}

impl Registry {
    /// The process-wide registry built from the embedded templates.
    pub fn builtin() -> &'static Registry {
        &BUILTIN
    }

    /// Load the embedded templates.
    pub fn from_embedded() -> Result<Self> {
        let manifest = embedded_text(MANIFEST_PATH)?;
        let typescript_frame = embedded_text(TYPESCRIPT_FRAME_PATH)?;
        let javascript_frame = embedded_text(JAVASCRIPT_FRAME_PATH)?;

        // Only fragments the manifest names are pulled from the embedded dir.
        let parsed = parse_manifest(manifest)?;
        let mut markup = HashMap::new();
        for entry in &parsed.components {
            if let Some(file) = TEMPLATES_DIR.get_file(&entry.markup) {
                if let Some(text) = file.contents_utf8() {
                    markup.insert(entry.markup.as_str(), text);
                }
            }
        }

        Self::build(
            parsed.clone(),
            &TemplateSources {
                manifest,
                typescript_frame,
                javascript_frame,
                markup,
            },
        )
    }

    /// Build a registry from raw template text.
    pub fn from_sources(sources: &TemplateSources<'_>) -> Result<Self> {
        let manifest = parse_manifest(sources.manifest)?;
        Self::build(manifest, sources)
    }

    fn build(manifest: TemplateManifest, sources: &TemplateSources<'_>) -> Result<Self> {
        if manifest.version != MANIFEST_VERSION {
            return Err(invalid(
                MANIFEST_PATH,
                format!(
                    "unsupported manifest version {} (expected {})",
                    manifest.version, MANIFEST_VERSION
                ),
            ));
        }
        if manifest.components.is_empty() {
            return Err(invalid(MANIFEST_PATH, "no components registered"));
        }

        let typescript_frame =
            parse_checked(TYPESCRIPT_FRAME_PATH, sources.typescript_frame, TYPESCRIPT_VARIABLES)?;
        let javascript_frame =
            parse_checked(JAVASCRIPT_FRAME_PATH, sources.javascript_frame, JAVASCRIPT_VARIABLES)?;

        let mut seen = HashSet::new();
        let mut components = Vec::with_capacity(manifest.components.len());

        for entry in manifest.components {
            if !is_component_name(&entry.name) {
                return Err(invalid(
                    &entry.name,
                    "category names must be capitalized identifiers",
                ));
            }
            if !seen.insert(entry.name.clone()) {
                return Err(invalid(&entry.name, "category registered twice"));
            }
            validate_props(&entry.props).map_err(|message| invalid(&entry.name, message))?;
            if let Some(bad) = entry.type_imports.iter().find(|i| !is_identifier(i)) {
                return Err(invalid(
                    &entry.name,
                    format!("type import '{}' is not an identifier", bad),
                ));
            }

            let text = sources.markup.get(entry.markup.as_str()).ok_or_else(|| {
                invalid(
                    &entry.name,
                    format!("markup fragment '{}' not found", entry.markup),
                )
            })?;
            let markup = parse_checked(&entry.name, trim_fragment(text), MARKUP_VARIABLES)?;

            tracing::debug!(
                category = %entry.name,
                props = entry.props.len(),
                "Registered component template"
            );

            components.push(ComponentTemplate {
                name: entry.name,
                description: entry.description,
                type_imports: entry.type_imports,
                props: entry.props,
                markup,
            });
        }

        Ok(Self {
            components,
            typescript_frame,
            javascript_frame,
        })
    }

    /// Resolve a category for a dialect.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`ComponentgenError::UnknownCategory`] when no registered
    /// category matches.
    pub fn resolve(&self, category: &str, dialect: Dialect) -> Result<ResolvedTemplate<'_>> {
        let component = self
            .get(category)
            .ok_or_else(|| ComponentgenError::UnknownCategory {
                name: category.to_string(),
                known: self.names().into_iter().map(str::to_string).collect(),
            })?;

        tracing::debug!(category, %dialect, "Resolved component template");

        Ok(ResolvedTemplate {
            component,
            frame: self.frame(dialect),
            dialect,
        })
    }

    /// Resolve and render in one step.
    pub fn render(&self, category: &str, dialect: Dialect) -> Result<RenderedSource> {
        Ok(self.resolve(category, dialect)?.render())
    }

    /// Get a category by exact name.
    pub fn get(&self, name: &str) -> Option<&ComponentTemplate> {
        self.components.iter().find(|c| c.name == name)
    }

    /// Check if a category is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All categories in manifest order.
    pub fn categories(&self) -> &[ComponentTemplate] {
        &self.components
    }

    /// All category names in manifest order.
    pub fn names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }

    fn frame(&self, dialect: Dialect) -> &[Segment] {
        match dialect {
            Dialect::TypeScript => &self.typescript_frame,
            Dialect::JavaScript => &self.javascript_frame,
        }
    }
}

fn embedded_text(path: &str) -> Result<&'static str> {
    TEMPLATES_DIR
        .get_file(path)
        .ok_or_else(|| invalid(path, "embedded template file missing"))?
        .contents_utf8()
        .ok_or_else(|| invalid(path, "embedded template file is not UTF-8"))
}

fn parse_manifest(content: &str) -> Result<TemplateManifest> {
    TemplateManifest::from_yaml(content).map_err(|e| invalid(MANIFEST_PATH, e.to_string()))
}

/// Parse template text and reject variables outside `allowed`.
fn parse_checked(template: &str, text: &str, allowed: &[&str]) -> Result<Vec<Segment>> {
    let segments = parse_interpolation(text).map_err(|e| invalid(template, e.to_string()))?;
    let unknown: BTreeSet<&str> = variables(&segments)
        .into_iter()
        .filter(|v| !allowed.contains(v))
        .collect();

    if !unknown.is_empty() {
        let names: Vec<String> = unknown.iter().map(|v| format!("${{{}}}", v)).collect();
        return Err(invalid(
            template,
            format!("unknown placeholder {}", names.join(", ")),
        ));
    }

    Ok(segments)
}

/// Drop blank lines around a fragment while keeping its indentation.
fn trim_fragment(text: &str) -> &str {
    text.trim_start_matches(['\n', '\r']).trim_end()
}

fn invalid(template: &str, message: impl Into<String>) -> ComponentgenError {
    ComponentgenError::TemplateInvalid {
        template: template.to_string(),
        message: message.into(),
    }
}
