//! Prop specifications shared by both dialects.
//!
//! A component's props are declared once in the manifest. Each dialect asks a
//! [`PropSpec`] for its own encoding of the same contract, which keeps the
//! generated prop names and default values identical across dialects.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const INDENT: &str = "  ";

/// Signature used for handler props that do not declare one.
pub const DEFAULT_HANDLER_SIGNATURE: &str = "() => void";

/// Semantic type of a prop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropKind {
    /// Text value (strings, colors, sizes).
    Text,
    /// Callback function.
    Handler,
}

/// One configurable input of a generated component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropSpec {
    /// Prop name as it appears in generated code.
    pub name: String,

    /// Semantic type.
    pub kind: PropKind,

    /// Whether callers must supply the prop.
    #[serde(default)]
    pub required: bool,

    /// Default value. Text defaults are raw strings; handler defaults are
    /// expressions emitted verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Handler call signature for the statically typed dialect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}

impl PropSpec {
    /// Type written in the props interface.
    pub fn static_type(&self) -> &str {
        match self.kind {
            PropKind::Text => "string",
            PropKind::Handler => self
                .signature
                .as_deref()
                .unwrap_or(DEFAULT_HANDLER_SIGNATURE),
        }
    }

    /// Runtime validator written in the propTypes object.
    pub fn runtime_type(&self) -> String {
        let base = match self.kind {
            PropKind::Text => "PropTypes.string",
            PropKind::Handler => "PropTypes.func",
        };
        if self.required {
            format!("{}.isRequired", base)
        } else {
            base.to_string()
        }
    }

    /// Default value as a source expression.
    pub fn default_expr(&self) -> Option<String> {
        let value = self.default.as_deref()?;
        Some(match self.kind {
            PropKind::Text => quote(value),
            PropKind::Handler => value.to_string(),
        })
    }

    /// `label: string;` / `onClick?: () => void;`
    pub fn interface_field(&self) -> String {
        let optional = if self.required { "" } else { "?" };
        format!(
            "{}{}{}: {};",
            INDENT,
            self.name,
            optional,
            self.static_type()
        )
    }

    /// Destructured parameter, with its default when one exists.
    pub fn parameter(&self) -> String {
        match self.default_expr() {
            Some(default) => format!("{}{} = {},", INDENT, self.name, default),
            None => format!("{}{},", INDENT, self.name),
        }
    }

    /// `label: PropTypes.string.isRequired,`
    pub fn prop_type_entry(&self) -> String {
        format!("{}{}: {},", INDENT, self.name, self.runtime_type())
    }

    /// `color: '#fff',`, or `None` when the prop has no default.
    pub fn default_entry(&self) -> Option<String> {
        self.default_expr()
            .map(|default| format!("{}{}: {},", INDENT, self.name, default))
    }
}

/// Quote a text value as a single-quoted string literal.
fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{}'", escaped)
}

/// Check a prop list for internal consistency.
///
/// Returns a human-readable description of the first problem found.
pub fn validate_props(props: &[PropSpec]) -> std::result::Result<(), String> {
    if props.is_empty() {
        return Err("component declares no props".to_string());
    }

    let mut seen = HashSet::new();
    for prop in props {
        if !is_identifier(&prop.name) {
            return Err(format!("prop name '{}' is not an identifier", prop.name));
        }
        if !seen.insert(prop.name.as_str()) {
            return Err(format!("duplicate prop '{}'", prop.name));
        }
        if prop.required && prop.default.is_some() {
            return Err(format!("required prop '{}' has a default", prop.name));
        }
        if prop.kind == PropKind::Text && prop.signature.is_some() {
            return Err(format!("text prop '{}' declares a signature", prop.name));
        }
    }

    Ok(())
}

/// A capitalized identifier, usable as a React component name and as a
/// single path segment.
pub fn is_component_name(name: &str) -> bool {
    name.starts_with(|c: char| c.is_ascii_uppercase()) && is_identifier(name)
}

/// Whether `name` is usable as a JavaScript identifier.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(name: &str, required: bool, default: Option<&str>) -> PropSpec {
        PropSpec {
            name: name.to_string(),
            kind: PropKind::Text,
            required,
            default: default.map(str::to_string),
            signature: None,
        }
    }

    fn handler(name: &str, signature: Option<&str>, default: Option<&str>) -> PropSpec {
        PropSpec {
            name: name.to_string(),
            kind: PropKind::Handler,
            required: false,
            default: default.map(str::to_string),
            signature: signature.map(str::to_string),
        }
    }

    #[test]
    fn required_text_prop_encodings() {
        let prop = text("label", true, None);
        assert_eq!(prop.interface_field(), "  label: string;");
        assert_eq!(prop.parameter(), "  label,");
        assert_eq!(prop.prop_type_entry(), "  label: PropTypes.string.isRequired,");
        assert_eq!(prop.default_entry(), None);
    }

    #[test]
    fn optional_text_prop_with_default() {
        let prop = text("backgroundColor", false, Some("#007bff"));
        assert_eq!(prop.interface_field(), "  backgroundColor?: string;");
        assert_eq!(prop.parameter(), "  backgroundColor = '#007bff',");
        assert_eq!(prop.prop_type_entry(), "  backgroundColor: PropTypes.string,");
        assert_eq!(
            prop.default_entry().as_deref(),
            Some("  backgroundColor: '#007bff',")
        );
    }

    #[test]
    fn handler_default_is_emitted_verbatim() {
        let prop = handler("onClick", None, Some("() => {}"));
        assert_eq!(prop.interface_field(), "  onClick?: () => void;");
        assert_eq!(prop.parameter(), "  onClick = () => {},");
        assert_eq!(prop.prop_type_entry(), "  onClick: PropTypes.func,");
        assert_eq!(prop.default_entry().as_deref(), Some("  onClick: () => {},"));
    }

    #[test]
    fn handler_signature_overrides_default_signature() {
        let prop = handler(
            "onChange",
            Some("(event: ChangeEvent<HTMLInputElement>) => void"),
            None,
        );
        assert_eq!(
            prop.static_type(),
            "(event: ChangeEvent<HTMLInputElement>) => void"
        );
    }

    #[test]
    fn text_defaults_are_escaped() {
        let prop = text("placeholder", false, Some("It's a \\path"));
        assert_eq!(prop.default_expr().as_deref(), Some("'It\\'s a \\\\path'"));
    }

    #[test]
    fn validate_rejects_empty_list() {
        assert!(validate_props(&[]).is_err());
    }

    #[test]
    fn validate_rejects_duplicates() {
        let props = vec![text("color", false, None), text("color", false, None)];
        let err = validate_props(&props).unwrap_err();
        assert!(err.contains("duplicate prop 'color'"));
    }

    #[test]
    fn validate_rejects_required_with_default() {
        let props = vec![text("value", true, Some("x"))];
        assert!(validate_props(&props).is_err());
    }

    #[test]
    fn validate_rejects_signature_on_text() {
        let mut prop = text("value", true, None);
        prop.signature = Some("() => void".into());
        assert!(validate_props(&[prop]).is_err());
    }

    #[test]
    fn validate_rejects_bad_identifier() {
        let props = vec![text("background-color", false, None)];
        assert!(validate_props(&props).is_err());
    }

    #[test]
    fn identifiers() {
        assert!(is_identifier("onClick"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("Button2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("2fast"));
        assert!(!is_identifier("text-field"));
    }

    #[test]
    fn component_names() {
        assert!(is_component_name("Button"));
        assert!(is_component_name("PrimaryButton"));
        assert!(!is_component_name("button"));
        assert!(!is_component_name("my-button"));
        assert!(!is_component_name("../x"));
        assert!(!is_component_name("Nested/Button"));
        assert!(!is_component_name(""));
    }

    #[test]
    fn deserializes_from_yaml() {
        let yaml = r#"
name: onChange
kind: handler
required: true
signature: "(value: string) => void"
"#;
        let prop: PropSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(prop.kind, PropKind::Handler);
        assert!(prop.required);
        assert_eq!(prop.default, None);
    }
}
