//! Source dialects a component can be generated in.

use serde::Serialize;
use std::fmt;

/// Target source flavor for a generated component.
///
/// Exactly one dialect is chosen per invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// Statically typed: an explicit props interface, TSX markup.
    TypeScript,
    /// Dynamically typed: runtime PropTypes descriptors, JSX markup.
    #[default]
    JavaScript,
}

impl Dialect {
    /// Every dialect, in a stable order.
    pub const ALL: [Dialect; 2] = [Dialect::TypeScript, Dialect::JavaScript];

    /// Select a dialect from a "use the statically typed dialect" flag.
    pub fn from_static_flag(use_static: bool) -> Self {
        if use_static {
            Dialect::TypeScript
        } else {
            Dialect::JavaScript
        }
    }

    /// Whether this dialect carries compile-time types.
    pub fn is_static(&self) -> bool {
        matches!(self, Dialect::TypeScript)
    }

    /// File extension for generated files.
    pub fn extension(&self) -> &'static str {
        match self {
            Dialect::TypeScript => "tsx",
            Dialect::JavaScript => "jsx",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::TypeScript => write!(f, "TypeScript"),
            Dialect::JavaScript => write!(f, "JavaScript"),
        }
    }
}
