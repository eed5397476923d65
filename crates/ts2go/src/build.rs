//! Turn declarations into model records.

use tracing::debug;

use crate::ast::{PropertySignature, Signature};
use crate::diagnostic::{Diagnostic, DiagnosticKind};
use crate::model::{Field, Struct, TypeAlias};
use crate::resolve::{resolve_annotation, UNTYPED};

/// Builds model records, collecting diagnostics for members it skips.
#[derive(Debug, Default)]
pub struct ModelBuilder {
    diagnostics: Vec<Diagnostic>,
}

impl ModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a struct from a declaration's name, comment and members.
    ///
    /// Property members become fields in declared order. Everything else is
    /// reported through [`ModelBuilder::diagnostics`] and left out.
    pub fn build_struct(
        &mut self,
        name: &str,
        leading_comment: Option<&str>,
        members: &[Signature],
    ) -> Struct {
        let mut fields = Vec::with_capacity(members.len());
        for member in members {
            match member {
                Signature::Property(property) => fields.push(build_field(property)),
                Signature::Index(index) => self.skip(
                    name,
                    format!("[{}]", index.parameter),
                    DiagnosticKind::IndexSignatureSkipped,
                ),
                Signature::Mapped(mapped) => self.skip(
                    name,
                    format!("[{} in ...]", mapped.parameter),
                    DiagnosticKind::MappedMemberSkipped,
                ),
                Signature::Method(method) => self.skip(
                    name,
                    format!("{}()", method.name),
                    DiagnosticKind::UnsupportedMember,
                ),
                Signature::Computed(key) => {
                    self.skip(name, key.clone(), DiagnosticKind::UnsupportedMember)
                }
                Signature::Call => {
                    self.skip(name, "()".to_string(), DiagnosticKind::UnsupportedMember)
                }
                Signature::Construct => {
                    self.skip(name, "new ()".to_string(), DiagnosticKind::UnsupportedMember)
                }
            }
        }

        Struct {
            name: name.to_string(),
            doc: doc_lines(leading_comment),
            fields,
            ..Struct::default()
        }
    }

    /// Build a struct for an interface, embedding its heritage names.
    pub fn build_interface(
        &mut self,
        name: &str,
        leading_comment: Option<&str>,
        heritage: &[String],
        members: &[Signature],
    ) -> Struct {
        let mut record = self.build_struct(name, leading_comment, members);
        record.embeds = heritage.to_vec();
        record
    }

    /// Diagnostics recorded so far, in encounter order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn skip(&mut self, declaration: &str, member: String, kind: DiagnosticKind) {
        debug!(declaration, member = %member, %kind, "member skipped");
        self.diagnostics.push(Diagnostic {
            declaration: declaration.to_string(),
            member,
            kind,
        });
    }
}

/// Build an alias record pointing at `target`, kept verbatim.
pub fn build_type_alias(name: &str, leading_comment: Option<&str>, target: &str) -> TypeAlias {
    TypeAlias {
        name: name.to_string(),
        doc: doc_lines(leading_comment),
        type_name: target.to_string(),
        ..TypeAlias::default()
    }
}

fn build_field(property: &PropertySignature) -> Field {
    let type_name = resolve_annotation(property.ty.as_ref());
    if type_name == UNTYPED {
        debug!(member = %property.name, "type degraded to {UNTYPED}");
    }

    let comment = property
        .leading_comment
        .as_deref()
        .or(property.trailing_comment.as_deref());

    Field {
        name: field_name(&property.name),
        doc: doc_lines(comment),
        type_name,
        is_pointer: property.optional,
        json_name: property.name.clone(),
        optional: property.optional,
        ..Field::default()
    }
}

/// Upper-case the first character of a member name.
///
/// Uses Unicode case mapping, so a leading `ß` becomes `SS`; characters
/// without an upper-case form are kept as they are.
pub fn field_name(member: &str) -> String {
    let mut chars = member.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn doc_lines(comment: Option<&str>) -> Vec<String> {
    comment
        .map(|text| text.lines().map(str::to_string).collect())
        .unwrap_or_default()
}
