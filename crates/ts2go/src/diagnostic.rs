//! Non-fatal notes about source members that were not turned into fields.

use std::fmt;

/// Why a member was left out of the generated struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// `[key: string]: T`
    IndexSignatureSkipped,
    /// `[K in Keys]: T`
    MappedMemberSkipped,
    /// Method, call, construct signatures and computed keys.
    UnsupportedMember,
}

/// A member the model builder saw but did not materialise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Declaration that owns the member.
    pub declaration: String,
    /// Member as written (parameter name for index signatures).
    pub member: String,
    pub kind: DiagnosticKind,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::IndexSignatureSkipped => write!(f, "index signature not supported"),
            DiagnosticKind::MappedMemberSkipped => write!(f, "mapped member not supported"),
            DiagnosticKind::UnsupportedMember => write!(f, "member kind not supported"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: `{}` skipped ({})",
            self.declaration, self.member, self.kind
        )
    }
}
