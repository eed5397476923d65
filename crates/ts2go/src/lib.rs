//! # ts2go
//!
//! Generate Go type declarations from TypeScript type declarations.
//!
//! ```text
//! source ─▶ parser ─▶ walker ─▶ Document ─▶ mixins ─▶ templates ─▶ Go
//! ```
//!
//! Type aliases of object literals and interfaces become structs, aliases of
//! a named type become Go type aliases. Field types are resolved shallowly:
//! `boolean` becomes `bool`, other names pass through, anything else becomes
//! `any`. Optional members render as pointers with `omitempty` tags.
//!
//! ```no_run
//! use ts2go::{mixin, Generator};
//!
//! let (go, _) = Generator::new()
//!     .with_mixin(mixin::set_package_name("api"))
//!     .generate_str("type Foo = { bar?: string }")?;
//! print!("{go}");
//! # Ok::<(), ts2go::GenerateError>(())
//! ```
//!
//! Declarations are emitted in source order. Mixins are plain closures over
//! the [`Document`]; [`Document::find_struct_mut`] and [`Struct::field_mut`]
//! look records up by name:
//!
//! ```
//! use ts2go::{Document, Generator, Mixin};
//!
//! let rename: Mixin = Box::new(|doc: &mut Document| {
//!     if let Some(foo) = doc.find_struct_mut("Foo") {
//!         foo.name = "FooDTO".to_string();
//!     }
//! });
//! let (go, _) = Generator::new().with_mixin(rename).generate_str("type Foo = { bar?: string }")?;
//! assert!(go.contains("type FooDTO struct"));
//! # Ok::<(), ts2go::GenerateError>(())
//! ```
//!
//! Output is shaped by Tera templates; see [`template_engine`] for the
//! built-in set and how to override it.

pub mod ast;
pub mod build;
pub mod diagnostic;
pub mod generate;
pub mod mixin;
pub mod model;
pub mod parser;
pub mod resolve;
pub mod template_engine;
pub mod walker;

pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use generate::{generate, GenerateError, Generated, Generator};
pub use mixin::Mixin;
pub use model::{ConstGroup, Declaration, Document, Field, Struct, TypeAlias};
pub use parser::{parse, ParseError};
pub use template_engine::{EngineError, InMemoryTemplates, TemplateDir, TemplateSource};
