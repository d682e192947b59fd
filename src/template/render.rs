//! Rendering resolved templates into source text.
//!
//! Rendering is a pure function of the resolved template and the component
//! name: the same inputs always produce byte-identical output.

use serde::Serialize;

use crate::error::{ComponentgenError, Result};

use super::dialect::Dialect;
use super::interpolation::{interpolate, InterpolationContext};
use super::props::{is_component_name, PropSpec};
use super::registry::ResolvedTemplate;

/// The final file body for one (category, dialect) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSource {
    /// Component name substituted into the template
    pub category: String,
    /// Dialect the body is written in
    pub dialect: Dialect,
    /// File body, without leading or trailing blank lines
    pub body: String,
}

impl RenderedSource {
    /// File extension for this body.
    pub fn extension(&self) -> &'static str {
        self.dialect.extension()
    }

    /// `<category>.<ext>`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.category, self.extension())
    }
}

/// Render a resolved template, substituting `category_name` for every
/// component identifier.
///
/// # Errors
///
/// Returns [`ComponentgenError::InvalidComponentName`] unless
/// `category_name` is a capitalized identifier. The name becomes both the
/// component identifier and a path segment, so anything else would produce
/// broken source or escape the components directory.
pub fn render(template: &ResolvedTemplate<'_>, category_name: &str) -> Result<RenderedSource> {
    if !is_component_name(category_name) {
        return Err(ComponentgenError::InvalidComponentName {
            name: category_name.to_string(),
        });
    }
    Ok(fill(template, category_name))
}

/// Render with a name already known to be valid.
pub(crate) fn fill(template: &ResolvedTemplate<'_>, category_name: &str) -> RenderedSource {
    let component = template.component();
    let props = component.props();

    let markup_ctx = InterpolationContext::new().with("component", category_name);
    let body = interpolate(component.markup(), &markup_ctx);
    let params = lines(props.iter().map(PropSpec::parameter));

    let text = match template.dialect() {
        Dialect::TypeScript => {
            let react_import = react_import(component.type_imports());
            let prop_fields = lines(props.iter().map(PropSpec::interface_field));
            let ctx = InterpolationContext::new()
                .with("component", category_name)
                .with("react_import", &react_import)
                .with("prop_fields", &prop_fields)
                .with("params", &params)
                .with("body", &body);
            interpolate(template.frame(), &ctx)
        }
        Dialect::JavaScript => {
            let prop_types = lines(props.iter().map(PropSpec::prop_type_entry));
            let default_props = lines(props.iter().filter_map(PropSpec::default_entry));
            let ctx = InterpolationContext::new()
                .with("component", category_name)
                .with("params", &params)
                .with("body", &body)
                .with("prop_types", &prop_types)
                .with("default_props", &default_props);
            interpolate(template.frame(), &ctx)
        }
    };

    tracing::debug!(
        category = category_name,
        dialect = %template.dialect(),
        bytes = text.trim().len(),
        "Rendered component"
    );

    RenderedSource {
        category: category_name.to_string(),
        dialect: template.dialect(),
        body: text.trim().to_string(),
    }
}

fn react_import(type_imports: &[String]) -> String {
    if type_imports.is_empty() {
        "import React from 'react';".to_string()
    } else {
        format!(
            "import React, {{ {} }} from 'react';",
            type_imports.join(", ")
        )
    }
}

/// Join generated lines, each terminated by a newline.
fn lines(items: impl Iterator<Item = String>) -> String {
    items.map(|line| line + "\n").collect()
}
