//! Placeholder interpolation for template text.
//!
//! Templates reference substitution points with `${variable}` syntax.
//!
//! # Syntax
//!
//! - `${variable_name}` - replaced with the variable's value
//! - `$${escaped}` - produces literal `${escaped}` in output
//! - any other `$` is literal text
//!
//! Templates are parsed once when the registry loads, so rendering only walks
//! pre-split segments. A malformed placeholder fails the load instead of
//! leaking into generated source.

use std::collections::{BTreeSet, HashMap};

use thiserror::Error;

use super::props::is_identifier;

/// A segment of an interpolated string.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Literal text
    Literal(String),
    /// Variable reference: ${name}
    Variable(String),
}

/// A placeholder that cannot be parsed. Offsets are byte positions of the
/// opening `$`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceholderError {
    #[error("unclosed placeholder at byte {offset}")]
    Unclosed { offset: usize },

    #[error("empty placeholder at byte {offset}")]
    Empty { offset: usize },

    #[error("placeholder '{name}' at byte {offset} is not an identifier")]
    InvalidName { name: String, offset: usize },
}

/// Split template text into literal and `${var}` segments.
pub fn parse_interpolation(input: &str) -> Result<Vec<Segment>, PlaceholderError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut rest = input;

    while let Some(pos) = rest.find('$') {
        let offset = input.len() - rest.len() + pos;
        literal.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];

        if let Some(escaped) = after.strip_prefix("${") {
            literal.push_str("${");
            rest = escaped;
        } else if let Some(body) = after.strip_prefix('{') {
            let end = body
                .find('}')
                .ok_or(PlaceholderError::Unclosed { offset })?;
            let name = &body[..end];
            if name.is_empty() {
                return Err(PlaceholderError::Empty { offset });
            }
            if !is_identifier(name) {
                return Err(PlaceholderError::InvalidName {
                    name: name.to_string(),
                    offset,
                });
            }

            if !literal.is_empty() {
                segments.push(Segment::Literal(std::mem::take(&mut literal)));
            }
            segments.push(Segment::Variable(name.to_string()));
            rest = &body[end + 1..];
        } else {
            literal.push('$');
            rest = after;
        }
    }

    literal.push_str(rest);
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }

    Ok(segments)
}

/// Collect the unique variable names referenced by parsed segments.
pub fn variables(segments: &[Segment]) -> BTreeSet<&str> {
    segments
        .iter()
        .filter_map(|seg| match seg {
            Segment::Variable(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
        .collect()
}

/// Values available to a single interpolation pass.
#[derive(Debug, Default)]
pub struct InterpolationContext<'a> {
    values: HashMap<&'static str, &'a str>,
}

impl<'a> InterpolationContext<'a> {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a variable, replacing any previous binding.
    pub fn with(mut self, name: &'static str, value: &'a str) -> Self {
        self.values.insert(name, value);
        self
    }

    /// Look up a bound variable.
    pub fn resolve(&self, name: &str) -> Option<&'a str> {
        self.values.get(name).copied()
    }
}

/// Substitute every variable segment from the context.
///
/// Unbound variables are written back as `${name}`. Templates are checked
/// against the variables they may use when the registry loads, so this never
/// happens for built-in templates.
pub fn interpolate(segments: &[Segment], context: &InterpolationContext<'_>) -> String {
    let mut result = String::new();

    for segment in segments {
        match segment {
            Segment::Literal(text) => result.push_str(text),
            Segment::Variable(name) => match context.resolve(name) {
                Some(value) => result.push_str(value),
                None => {
                    result.push_str("${");
                    result.push_str(name);
                    result.push('}');
                }
            },
        }
    }

    result
}
