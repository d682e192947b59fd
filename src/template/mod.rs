//! Component template registry and renderer.
//!
//! Templates are embedded in the binary at compile time:
//! - `templates/registry.yml` lists each component category and its props
//! - `templates/components/` holds one markup fragment per category
//! - `templates/frames/` holds one frame per [`Dialect`]
//!
//! A category is resolved against the registry first; only a
//! [`ResolvedTemplate`] can be rendered, so validation always precedes
//! rendering and I/O.
//!
//! # Example
//!
//! ```
//! use componentgen::template::{Dialect, Registry};
//!
//! let registry = Registry::builtin();
//! let resolved = registry.resolve("Button", Dialect::TypeScript).unwrap();
//! let source = resolved.render();
//!
//! assert_eq!(source.file_name(), "Button.tsx");
//! assert!(source.body.contains("interface ButtonProps"));
//! assert!(registry.resolve("Checkbox", Dialect::TypeScript).is_err());
//! ```

pub mod dialect;
pub mod interpolation;
pub mod manifest;
pub mod props;
pub mod registry;
pub mod render;

pub use dialect::Dialect;
pub use manifest::{ComponentEntry, TemplateManifest};
pub use props::{PropKind, PropSpec};
pub use registry::{ComponentTemplate, Registry, ResolvedTemplate, TemplateSources};
pub use render::{render, RenderedSource};
