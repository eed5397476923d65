//! Map TypeScript type expressions to Go type names.

use crate::ast::{TypeName, TypeNode};

/// Go type used for any shape the resolver does not understand.
pub const UNTYPED: &str = "any";

/// Resolve a declared type to a Go type name.
///
/// Plain references pass through verbatim, except `boolean` which becomes
/// `bool`. The referenced name is not checked against the document. A
/// reference with type arguments (`Array<string>`, `Promise<T>`) has no Go
/// counterpart without generics and is untyped. Every other shape (unions,
/// inline objects, arrays, functions, ...) degrades to [`UNTYPED`] as well;
/// this never fails.
pub fn resolve_type(node: &TypeNode) -> String {
    match node {
        TypeNode::Reference(reference) if reference.arity == 0 => match &reference.type_name {
            TypeName::Identifier(name) => resolve_identifier(name).to_string(),
            TypeName::Qualified(_) | TypeName::Literal(_) => UNTYPED.to_string(),
        },
        _ => UNTYPED.to_string(),
    }
}

/// Resolve an optional annotation; an absent type is untyped.
pub fn resolve_annotation(node: Option<&TypeNode>) -> String {
    node.map_or_else(|| UNTYPED.to_string(), resolve_type)
}

fn resolve_identifier(name: &str) -> &str {
    match name {
        "boolean" => "bool",
        other => other,
    }
}
