//! Template manifest schema.
//!
//! `templates/registry.yml` lists every built-in component category together
//! with its prop specification and the markup fragment it renders.

use serde::{Deserialize, Serialize};

use super::props::PropSpec;

/// Manifest format version understood by this build.
pub const MANIFEST_VERSION: u32 = 1;

/// Top-level manifest document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplateManifest {
    /// Manifest format version
    pub version: u32,

    /// Registered component categories, in listing order
    pub components: Vec<ComponentEntry>,
}

/// One registered component category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentEntry {
    /// Category name, also used as the generated component identifier
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Markup fragment path, relative to the templates directory
    pub markup: String,

    /// Type-only names imported from `react` by the statically typed dialect
    #[serde(default)]
    pub type_imports: Vec<String>,

    /// Configurable inputs, in declaration order
    pub props: Vec<PropSpec>,
}

impl TemplateManifest {
    /// Parse a manifest from YAML.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::props::PropKind;

    const SAMPLE: &str = r#"
version: 1
components:
  - name: Badge
    description: Small status label
    markup: components/badge.jsx
    props:
      - name: text
        kind: text
        required: true
      - name: tone
        kind: text
        default: neutral
"#;

    #[test]
    fn parses_sample_manifest() {
        let manifest = TemplateManifest::from_yaml(SAMPLE).unwrap();
        assert_eq!(manifest.version, 1);
        assert_eq!(manifest.components.len(), 1);

        let badge = &manifest.components[0];
        assert!(badge.type_imports.is_empty());
        assert_eq!(badge.props.len(), 2);
        assert_eq!(badge.props[1].kind, PropKind::Text);
        assert_eq!(badge.props[1].default.as_deref(), Some("neutral"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let yaml = "version: 1\ncomponents: []\nextra: true\n";
        assert!(TemplateManifest::from_yaml(yaml).is_err());
    }

    #[test]
    fn rejects_unknown_prop_kind() {
        let yaml = r#"
version: 1
components:
  - name: Badge
    description: d
    markup: m
    props:
      - name: count
        kind: number
"#;
        assert!(TemplateManifest::from_yaml(yaml).is_err());
    }
}
