//! Route parsed declarations into a [`Document`].

use tracing::debug;

use crate::ast::{self, SourceFile, Statement, TypeAliasDeclaration, TypeName, TypeNode};
use crate::build::{build_type_alias, ModelBuilder};
use crate::diagnostic::Diagnostic;
use crate::model::Document;
use crate::resolve::UNTYPED;

/// Result of walking one source file.
#[derive(Debug, Default)]
pub struct Walked {
    pub document: Document,
    pub diagnostics: Vec<Diagnostic>,
}

/// Walk `source` in lexical order and build the document.
///
/// Type aliases of object shapes (direct or parenthesised) and interfaces
/// become structs; aliases of a plain name become type aliases. Namespaces
/// are entered. Every other statement is ignored.
pub fn walk(source: &SourceFile) -> Walked {
    let mut document = Document::default();
    let mut builder = ModelBuilder::new();

    ast::inspect(source, |statement| {
        match statement {
            Statement::TypeAlias(alias) => route_alias(alias, &mut builder, &mut document),
            Statement::Interface(interface) => {
                debug!(name = %interface.name, "interface -> struct");
                let record = builder.build_interface(
                    &interface.name,
                    interface.leading_comment.as_deref(),
                    &interface.heritage,
                    &interface.members,
                );
                document.push_struct(record);
            }
            Statement::Module(module) => debug!(name = %module.name, "entering module"),
            Statement::Other(other) => debug!(keyword = %other.keyword, "statement ignored"),
        }
        true
    });

    Walked {
        document,
        diagnostics: builder.into_diagnostics(),
    }
}

fn route_alias(alias: &TypeAliasDeclaration, builder: &mut ModelBuilder, document: &mut Document) {
    let comment = alias.leading_comment.as_deref();
    match &alias.ty {
        TypeNode::Object(literal) => {
            debug!(name = %alias.name, "type literal -> struct");
            let record = builder.build_struct(&alias.name, comment, &literal.members);
            document.push_struct(record);
        }
        TypeNode::Reference(reference) => match &reference.type_name {
            TypeName::Identifier(target) if reference.arity > 0 => {
                debug!(name = %alias.name, target = %target, "generic alias target -> {UNTYPED}");
                document.push_type_alias(build_type_alias(&alias.name, comment, UNTYPED));
            }
            TypeName::Identifier(target) => {
                debug!(name = %alias.name, target = %target, "type reference -> alias");
                document.push_type_alias(build_type_alias(&alias.name, comment, target));
            }
            TypeName::Literal(literal) => {
                debug!(name = %alias.name, "indirect type literal -> struct");
                let record = builder.build_struct(&alias.name, comment, &literal.members);
                document.push_struct(record);
            }
            TypeName::Qualified(_) => {
                debug!(name = %alias.name, "qualified alias target ignored");
            }
        },
        _ => debug!(name = %alias.name, "alias shape ignored"),
    }
}
