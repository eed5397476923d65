//! Tera-based rendering with name-addressed template overrides.
//!
//! The built-in set renders Go source:
//!
//! | Template           | Context                                 |
//! |--------------------|-----------------------------------------|
//! | `output.tera`      | the whole document plus `declarations`  |
//! | `header.tera`      | `package_name`                          |
//! | `struct.tera`      | `struct` (see [`crate::model::Struct`]) |
//! | `field.tera`       | `field` (see [`crate::model::Field`])   |
//! | `type_alias.tera`  | `alias`                                 |
//! | `const_group.tera` | `group`                                 |
//!
//! `declarations` lists every record in source order as `{ kind, record }`
//! with `kind` one of `struct`, `type_alias` or `const_group`.
//!
//! An override set with a template of the same name wins; built-ins fill in
//! everything else. Override templates may use the `snake_case`,
//! `pascal_case`, `camel_case` and `kebab_case` filters.

mod engine;
mod filters;
mod loader;

use std::path::PathBuf;

pub use engine::TemplateEngine;
pub use loader::{builtin_templates, InMemoryTemplates, TemplateDir, TemplateSource, ENTRY_TEMPLATE};

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("template override directory {} does not exist", .0.display())]
    OverrideDir(PathBuf),
    #[error("failed to load templates from {origin}: {source}")]
    Load {
        origin: String,
        source: tera::Error,
    },
    #[error("render error for '{template}': {source}")]
    Render {
        template: String,
        source: tera::Error,
    },
    #[error("failed to build template context: {0}")]
    Context(#[source] tera::Error),
}
