//! Declaration tree produced by [`crate::parser`] and consumed by the walker.
//!
//! The tree only models what code generation needs: type aliases, interfaces,
//! namespaces, their members and the type expressions attached to them.
//! Everything else in a source file collapses into [`Statement::Other`], and
//! type shapes the resolver never looks inside keep only their kind.

/// A parsed source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceFile {
    /// Top-level statements in lexical order.
    pub statements: Vec<Statement>,
}

/// A top-level (or namespace-level) statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    TypeAlias(TypeAliasDeclaration),
    Interface(InterfaceDeclaration),
    Module(ModuleDeclaration),
    /// Any other statement (imports, functions, enums, ...).
    Other(OtherStatement),
}

/// `type Name<T> = ...`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDeclaration {
    pub name: String,
    pub ty: TypeNode,
    pub leading_comment: Option<String>,
}

/// `interface Name<T> extends A, B { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDeclaration {
    pub name: String,
    /// Names in the `extends` clause as written, dotted for qualified
    /// names, in declared order.
    pub heritage: Vec<String>,
    pub members: Vec<Signature>,
    pub leading_comment: Option<String>,
}

/// `namespace Name { ... }` or `declare module "name" { ... }`
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDeclaration {
    pub name: String,
    pub body: Vec<Statement>,
    pub leading_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherStatement {
    /// Short description of the statement, for log output.
    pub keyword: &'static str,
}

/// A member of an interface body or an object type literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Signature {
    Property(PropertySignature),
    /// `[key: string]: T`
    Index(IndexSignature),
    /// `[K in Keys]: T`
    Mapped(MappedSignature),
    /// `name(args): T`, getters and setters
    Method(MethodSignature),
    /// `[expr]: T`, holding the bracketed key as written.
    Computed(String),
    /// `(args): T`
    Call,
    /// `new (args): T`
    Construct,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PropertySignature {
    pub name: String,
    /// Whether the member carries the `?` marker.
    pub optional: bool,
    /// Declared type; `None` when the member has no annotation.
    pub ty: Option<TypeNode>,
    pub leading_comment: Option<String>,
    pub trailing_comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSignature {
    pub parameter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedSignature {
    pub parameter: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
}

/// A type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    /// Named type, including keywords such as `string` and `boolean`.
    Reference(TypeReference),
    /// Inline object shape `{ ... }`.
    Object(TypeLiteral),
    /// Any other shape.
    Other(TypeShape),
}

/// Kinds of type expression that are kept without their contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeShape {
    /// `T[]`
    Array,
    /// `[A, B]`
    Tuple,
    Union,
    Intersection,
    /// String, numeric, boolean or template literal.
    Literal,
    /// `(args) => T` and `new (args) => T`
    Function,
    /// `(T)` around anything but an object literal.
    Parenthesized,
    /// `keyof T`, `readonly T[]`, `unique symbol`, `infer U`
    Operator,
    /// `typeof value`
    Query,
    /// `T["key"]`
    IndexedAccess,
    /// `C extends E ? T : F`
    Conditional,
    /// `this`, type predicates, `import("mod")` and the like.
    Special,
}

/// A named type, optionally with type arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeReference {
    pub type_name: TypeName,
    /// Number of type arguments; zero for a plain name.
    pub arity: usize,
}

/// What a [`TypeReference`] points at.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeName {
    Identifier(String),
    /// `ns.Inner.Name`, one entry per segment.
    Qualified(Vec<String>),
    /// An object literal one indirection removed, e.g. `({ ... })`.
    Literal(TypeLiteral),
}

/// The members of an inline object shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TypeLiteral {
    pub members: Vec<Signature>,
}

impl TypeReference {
    /// A plain reference to `name` without type arguments.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            type_name: TypeName::Identifier(name.into()),
            arity: 0,
        }
    }
}

impl Statement {
    /// Short name of the statement kind, used in log output.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::TypeAlias(_) => "type alias",
            Statement::Interface(_) => "interface",
            Statement::Module(_) => "module",
            Statement::Other(other) => other.keyword,
        }
    }
}

/// Visit every statement of `source` in pre-order.
///
/// Module bodies are entered only when `visitor` returns `true` for the
/// module statement itself.
pub fn inspect<F>(source: &SourceFile, mut visitor: F)
where
    F: FnMut(&Statement) -> bool,
{
    inspect_statements(&source.statements, &mut visitor);
}

fn inspect_statements<F>(statements: &[Statement], visitor: &mut F)
where
    F: FnMut(&Statement) -> bool,
{
    for statement in statements {
        let descend = visitor(statement);
        if let Statement::Module(module) = statement {
            if descend {
                inspect_statements(&module.body, visitor);
            }
        }
    }
}
