//! TypeScript front end.
//!
//! Source text is parsed as a TypeScript module with `swc_ecma_parser` and
//! lowered into the closed [`crate::ast`] tree. Type aliases, interfaces and
//! namespaces are converted in full. Every other statement surfaces as
//! [`Statement::Other`], so ordinary `.ts` files can be fed in unchanged.

mod comments;
mod nesting;

use swc_common::comments::SingleThreadedComments;
use swc_common::{BytePos, FileName, SourceMap, Span, Spanned};
use swc_ecma_ast::{self as swc, EsVersion};
use swc_ecma_parser::{error::Error as SwcError, parse_file_as_module, Syntax, TsSyntax};
use tracing::debug;

use crate::ast::{
    IndexSignature, InterfaceDeclaration, MappedSignature, MethodSignature, ModuleDeclaration,
    OtherStatement, PropertySignature, Signature, SourceFile, Statement, TypeAliasDeclaration,
    TypeLiteral, TypeName, TypeNode, TypeReference, TypeShape,
};
use comments::{CommentSpan, Comments};

pub use nesting::MAX_NESTING;

/// Stack reserved for parsing and lowering one source file.
const PARSER_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Error produced when the source is not valid TypeScript.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    pub message: String,
    /// 1-based line of the offending token.
    pub line: usize,
    /// 1-based column, counted in characters.
    pub column: usize,
}

/// Parse declaration source text into a [`SourceFile`].
pub fn parse(source: &str) -> Result<SourceFile, ParseError> {
    let source = source.strip_prefix('\u{feff}').unwrap_or(source);
    nesting::check_nesting(source)?;
    // The swc tree is built and dropped on the grown stack as well.
    stacker::grow(PARSER_STACK_SIZE, || parse_module(source))
}

fn parse_module(source: &str) -> Result<SourceFile, ParseError> {
    let source_map = SourceMap::default();
    let file = source_map.new_source_file(FileName::Anon.into(), source.to_string());
    let base = file.start_pos;
    let comments = SingleThreadedComments::default();
    let mut recovered = Vec::new();

    let module = parse_file_as_module(
        &file,
        Syntax::Typescript(TsSyntax::default()),
        EsVersion::latest(),
        Some(&comments),
        &mut recovered,
    )
    .map_err(|err| syntax_error(source, base, &err))?;

    for err in &recovered {
        let (line, column) = line_column(source, offset(base, err.span().lo));
        debug!(line, column, error = %err.kind().msg(), "recovered from syntax error");
    }

    let (leading, trailing) = comments.take_all();
    let spans = leading
        .borrow()
        .values()
        .chain(trailing.borrow().values())
        .flatten()
        .map(|comment| CommentSpan {
            start: offset(base, comment.span.lo),
            end: offset(base, comment.span.hi),
        })
        .collect();

    let lower = Lower {
        source,
        base,
        comments: Comments::new(source, spans),
    };
    Ok(SourceFile {
        statements: lower.items(&module.body),
    })
}

fn syntax_error(source: &str, base: BytePos, err: &SwcError) -> ParseError {
    let (line, column) = line_column(source, offset(base, err.span().lo));
    ParseError {
        message: err.kind().msg().into_owned(),
        line,
        column,
    }
}

/// Byte offset of `pos` within the file starting at `base`.
fn offset(base: BytePos, pos: BytePos) -> usize {
    pos.0.saturating_sub(base.0) as usize
}

/// 1-based line and column for a byte offset.
pub(crate) fn line_column(source: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(source.len());
    while !source.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &source[..offset];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before.chars().count(), |i| before[i + 1..].chars().count())
        + 1;
    (line, column)
}

fn other(keyword: &'static str) -> Statement {
    Statement::Other(OtherStatement { keyword })
}

/// Lowers the swc tree into [`crate::ast`], attaching comments by position.
struct Lower<'src> {
    source: &'src str,
    base: BytePos,
    comments: Comments<'src>,
}

impl Lower<'_> {
    fn offset(&self, pos: BytePos) -> usize {
        offset(self.base, pos)
    }

    fn text(&self, span: Span) -> String {
        self.source
            .get(self.offset(span.lo)..self.offset(span.hi))
            .unwrap_or_default()
            .to_string()
    }

    // =====================================================================
    // Statements
    // =====================================================================

    fn items(&self, items: &[swc::ModuleItem]) -> Vec<Statement> {
        items.iter().map(|item| self.item(item)).collect()
    }

    fn item(&self, item: &swc::ModuleItem) -> Statement {
        let lo = statement_start(self.source, self.offset(item.span().lo));
        match item {
            swc::ModuleItem::ModuleDecl(decl) => match decl {
                swc::ModuleDecl::ExportDecl(export) => self.decl(&export.decl, lo),
                swc::ModuleDecl::ExportDefaultDecl(export) => match &export.decl {
                    swc::DefaultDecl::TsInterfaceDecl(interface) => {
                        Statement::Interface(self.interface(interface, lo))
                    }
                    swc::DefaultDecl::Class(_) => other("class"),
                    swc::DefaultDecl::Fn(_) => other("function"),
                    _ => other("export"),
                },
                swc::ModuleDecl::Import(_) | swc::ModuleDecl::TsImportEquals(_) => other("import"),
                _ => other("export"),
            },
            swc::ModuleItem::Stmt(swc::Stmt::Decl(decl)) => self.decl(decl, lo),
            swc::ModuleItem::Stmt(_) => other("statement"),
        }
    }

    fn decl(&self, decl: &swc::Decl, lo: usize) -> Statement {
        match decl {
            swc::Decl::TsTypeAlias(alias) => Statement::TypeAlias(TypeAliasDeclaration {
                name: alias.id.sym.to_string(),
                ty: self.ty(&alias.type_ann),
                leading_comment: self.comments.leading(lo),
            }),
            swc::Decl::TsInterface(interface) => Statement::Interface(self.interface(interface, lo)),
            swc::Decl::TsModule(module) => Statement::Module(self.module(module, lo)),
            swc::Decl::TsEnum(_) => other("enum"),
            swc::Decl::Class(_) => other("class"),
            swc::Decl::Fn(_) => other("function"),
            swc::Decl::Var(_) => other("variable"),
            _ => other("declaration"),
        }
    }

    fn interface(&self, decl: &swc::TsInterfaceDecl, lo: usize) -> InterfaceDeclaration {
        InterfaceDeclaration {
            name: decl.id.sym.to_string(),
            heritage: decl
                .extends
                .iter()
                .map(|heritage| {
                    expression_name(&heritage.expr).unwrap_or_else(|| self.text(heritage.expr.span()))
                })
                .collect(),
            members: self.members(&decl.body.body),
            leading_comment: self.comments.leading(lo),
        }
    }

    fn module(&self, decl: &swc::TsModuleDecl, lo: usize) -> ModuleDeclaration {
        let name = match &decl.id {
            swc::TsModuleName::Ident(ident) => ident.sym.to_string(),
            swc::TsModuleName::Str(literal) => literal.value.to_atom_lossy().as_str().to_string(),
        };
        ModuleDeclaration {
            name,
            body: decl
                .body
                .as_ref()
                .map(|body| self.namespace_body(body))
                .unwrap_or_default(),
            leading_comment: self.comments.leading(lo),
        }
    }

    /// `namespace A.B { ... }` nests `B` inside `A`.
    fn namespace_body(&self, body: &swc::TsNamespaceBody) -> Vec<Statement> {
        match body {
            swc::TsNamespaceBody::TsModuleBlock(block) => self.items(&block.body),
            swc::TsNamespaceBody::TsNamespaceDecl(inner) => {
                vec![Statement::Module(ModuleDeclaration {
                    name: inner.id.sym.to_string(),
                    body: self.namespace_body(&inner.body),
                    leading_comment: None,
                })]
            }
        }
    }

    // =====================================================================
    // Members
    // =====================================================================

    fn members(&self, members: &[swc::TsTypeElement]) -> Vec<Signature> {
        members.iter().map(|member| self.member(member)).collect()
    }

    fn member(&self, member: &swc::TsTypeElement) -> Signature {
        match member {
            swc::TsTypeElement::TsPropertySignature(property) => {
                let name = (!property.computed)
                    .then(|| self.property_name(&property.key))
                    .flatten();
                let Some(name) = name else {
                    return Signature::Computed(format!("[{}]", self.text(property.key.span())));
                };
                Signature::Property(PropertySignature {
                    name,
                    optional: property.optional,
                    ty: property.type_ann.as_ref().map(|ann| self.ty(&ann.type_ann)),
                    leading_comment: self.comments.leading(self.offset(property.span.lo)),
                    trailing_comment: self.comments.trailing(self.offset(property.span.hi)),
                })
            }
            swc::TsTypeElement::TsMethodSignature(method) => self.method(&method.key, method.computed),
            swc::TsTypeElement::TsGetterSignature(getter) => self.method(&getter.key, getter.computed),
            swc::TsTypeElement::TsSetterSignature(setter) => self.method(&setter.key, setter.computed),
            swc::TsTypeElement::TsIndexSignature(index) => Signature::Index(IndexSignature {
                parameter: index.params.first().map(param_name).unwrap_or_default(),
            }),
            swc::TsTypeElement::TsCallSignatureDecl(_) => Signature::Call,
            swc::TsTypeElement::TsConstructSignatureDecl(_) => Signature::Construct,
        }
    }

    fn method(&self, key: &swc::Expr, computed: bool) -> Signature {
        let name = (!computed)
            .then(|| self.property_name(key))
            .flatten()
            .unwrap_or_else(|| format!("[{}]", self.text(key.span())));
        Signature::Method(MethodSignature { name })
    }

    /// Name of a non-computed member key, unquoted.
    fn property_name(&self, key: &swc::Expr) -> Option<String> {
        match key {
            swc::Expr::Ident(ident) => Some(ident.sym.to_string()),
            swc::Expr::Lit(swc::Lit::Str(literal)) => {
                Some(literal.value.to_atom_lossy().as_str().to_string())
            }
            swc::Expr::Lit(swc::Lit::Num(number)) => Some(self.text(number.span)),
            _ => None,
        }
    }

    // =====================================================================
    // Types
    // =====================================================================

    fn ty(&self, ty: &swc::TsType) -> TypeNode {
        match ty {
            swc::TsType::TsKeywordType(keyword) => {
                TypeNode::Reference(TypeReference::named(self.text(keyword.span)))
            }
            swc::TsType::TsTypeRef(reference) => TypeNode::Reference(TypeReference {
                type_name: entity_name(&reference.type_name),
                arity: reference
                    .type_params
                    .as_ref()
                    .map_or(0, |arguments| arguments.params.len()),
            }),
            swc::TsType::TsTypeLit(literal) => TypeNode::Object(TypeLiteral {
                members: self.members(&literal.members),
            }),
            swc::TsType::TsParenthesizedType(parenthesized) => match parenthesized.type_ann.as_ref() {
                swc::TsType::TsTypeLit(literal) => TypeNode::Reference(TypeReference {
                    type_name: TypeName::Literal(TypeLiteral {
                        members: self.members(&literal.members),
                    }),
                    arity: 0,
                }),
                _ => TypeNode::Other(TypeShape::Parenthesized),
            },
            swc::TsType::TsMappedType(mapped) => TypeNode::Object(TypeLiteral {
                members: vec![Signature::Mapped(MappedSignature {
                    parameter: mapped.type_param.name.sym.to_string(),
                })],
            }),
            swc::TsType::TsArrayType(_) => TypeNode::Other(TypeShape::Array),
            swc::TsType::TsTupleType(_) => TypeNode::Other(TypeShape::Tuple),
            swc::TsType::TsUnionOrIntersectionType(swc::TsUnionOrIntersectionType::TsUnionType(_)) => {
                TypeNode::Other(TypeShape::Union)
            }
            swc::TsType::TsUnionOrIntersectionType(_) => TypeNode::Other(TypeShape::Intersection),
            swc::TsType::TsLitType(_) => TypeNode::Other(TypeShape::Literal),
            swc::TsType::TsFnOrConstructorType(_) => TypeNode::Other(TypeShape::Function),
            swc::TsType::TsTypeOperator(_) | swc::TsType::TsInferType(_) => {
                TypeNode::Other(TypeShape::Operator)
            }
            swc::TsType::TsTypeQuery(_) => TypeNode::Other(TypeShape::Query),
            swc::TsType::TsIndexedAccessType(_) => TypeNode::Other(TypeShape::IndexedAccess),
            swc::TsType::TsConditionalType(_) => TypeNode::Other(TypeShape::Conditional),
            _ => TypeNode::Other(TypeShape::Special),
        }
    }
}

/// Move `lo` back over modifiers a declaration's span may leave out.
fn statement_start(source: &str, mut lo: usize) -> usize {
    const MODIFIERS: &[&str] = &["export", "declare", "default"];
    loop {
        let before = source.get(..lo).unwrap_or_default().trim_end();
        let Some(modifier) = MODIFIERS.iter().find(|m| before.ends_with(*m)) else {
            return lo;
        };
        let start = before.len() - modifier.len();
        let joined = before[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$');
        if joined {
            return lo;
        }
        lo = start;
    }
}

/// Dotted name of an `extends` clause expression.
fn expression_name(expr: &swc::Expr) -> Option<String> {
    match expr {
        swc::Expr::Ident(ident) => Some(ident.sym.to_string()),
        swc::Expr::Member(member) => match &member.prop {
            swc::MemberProp::Ident(prop) => {
                expression_name(&member.obj).map(|object| format!("{object}.{}", prop.sym))
            }
            _ => None,
        },
        _ => None,
    }
}

fn entity_name(name: &swc::TsEntityName) -> TypeName {
    match name {
        swc::TsEntityName::Ident(ident) => TypeName::Identifier(ident.sym.to_string()),
        swc::TsEntityName::TsQualifiedName(_) => {
            let mut segments = Vec::new();
            entity_segments(name, &mut segments);
            TypeName::Qualified(segments)
        }
    }
}

fn entity_segments(name: &swc::TsEntityName, segments: &mut Vec<String>) {
    match name {
        swc::TsEntityName::Ident(ident) => segments.push(ident.sym.to_string()),
        swc::TsEntityName::TsQualifiedName(qualified) => {
            entity_segments(&qualified.left, segments);
            segments.push(qualified.right.sym.to_string());
        }
    }
}

fn param_name(param: &swc::TsFnParam) -> String {
    match param {
        swc::TsFnParam::Ident(binding) => binding.id.sym.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_one(source: &str) -> Statement {
        let mut file = parse(source).unwrap();
        assert_eq!(file.statements.len(), 1, "statements: {:?}", file.statements);
        file.statements.remove(0)
    }

    fn alias_type(source: &str) -> TypeNode {
        match parse_one(source) {
            Statement::TypeAlias(alias) => alias.ty,
            other => panic!("expected type alias, got {other:?}"),
        }
    }

    fn interface(source: &str) -> InterfaceDeclaration {
        match parse_one(source) {
            Statement::Interface(interface) => interface,
            other => panic!("expected interface, got {other:?}"),
        }
    }

    fn reference(name: &str) -> TypeNode {
        TypeNode::Reference(TypeReference::named(name))
    }

    fn property(signature: &Signature) -> &PropertySignature {
        match signature {
            Signature::Property(p) => p,
            other => panic!("expected property, got {other:?}"),
        }
    }

    #[test]
    fn test_type_alias_with_object_literal() {
        let statement = parse_one("/**\n * My type\n */\ntype Foo = { bar?: string /* My field */ }");
        let Statement::TypeAlias(alias) = statement else {
            panic!("expected type alias");
        };
        assert_eq!(alias.name, "Foo");
        assert_eq!(alias.leading_comment.as_deref(), Some("My type"));

        let TypeNode::Object(literal) = alias.ty else {
            panic!("expected object literal");
        };
        assert_eq!(literal.members.len(), 1);
        let bar = property(&literal.members[0]);
        assert_eq!(bar.name, "bar");
        assert!(bar.optional);
        assert_eq!(bar.ty, Some(reference("string")));
        assert_eq!(bar.trailing_comment.as_deref(), Some("My field"));
        assert!(bar.leading_comment.is_none());
    }

    #[test]
    fn test_interface_with_heritage_and_comments() {
        let interface = interface(
            r#"
// A user
export interface User extends Base, ns.Audited<string> {
  /** Identifier */
  id: number;
  name: string; // display name
  readonly "created-at"?: Date,
  tags: string[]
}
"#,
        );
        assert_eq!(interface.name, "User");
        assert_eq!(interface.leading_comment.as_deref(), Some("A user"));
        assert_eq!(interface.heritage, vec!["Base", "ns.Audited"]);

        assert_eq!(interface.members.len(), 4);
        let id = property(&interface.members[0]);
        assert_eq!(id.leading_comment.as_deref(), Some("Identifier"));
        let name = property(&interface.members[1]);
        assert_eq!(name.trailing_comment.as_deref(), Some("display name"));
        assert!(name.leading_comment.is_none());
        let created = property(&interface.members[2]);
        assert_eq!(created.name, "created-at");
        assert!(created.optional);
        assert!(created.leading_comment.is_none());
        let tags = property(&interface.members[3]);
        assert_eq!(tags.ty, Some(TypeNode::Other(TypeShape::Array)));
    }

    #[test]
    fn test_non_ascii_identifiers() {
        let interface = interface("interface Café { naïve: string }");
        assert_eq!(interface.name, "Café");
        let member = property(&interface.members[0]);
        assert_eq!(member.name, "naïve");
        assert_eq!(member.ty, Some(reference("string")));
    }

    #[test]
    fn test_regex_literals_do_not_confuse_following_declarations() {
        for regex in [r#"/"/"#, "/[{]/", "/\\//g", "/[/]/"] {
            let source = format!("const re = {regex};\ninterface After {{ a: string }}\n");
            let file = parse(&source).unwrap();
            let kinds: Vec<_> = file.statements.iter().map(Statement::kind).collect();
            assert_eq!(kinds, vec!["variable", "interface"], "source: {source}");
        }
    }

    #[test]
    fn test_alias_to_named_reference() {
        assert_eq!(alias_type("type Id = UserId;"), reference("UserId"));
        assert_eq!(alias_type("type Flag = boolean"), reference("boolean"));
    }

    #[test]
    fn test_parenthesized_object_literal_is_indirect_reference() {
        let ty = alias_type("type Foo = ({ a: string })");
        let TypeNode::Reference(reference) = ty else {
            panic!("expected reference");
        };
        let TypeName::Literal(literal) = reference.type_name else {
            panic!("expected literal type name");
        };
        assert_eq!(literal.members.len(), 1);
    }

    #[test]
    fn test_generic_and_qualified_references() {
        assert_eq!(
            alias_type("type A = Map<string, Array<number>>"),
            TypeNode::Reference(TypeReference {
                type_name: TypeName::Identifier("Map".to_string()),
                arity: 2,
            })
        );
        assert_eq!(
            alias_type("type Q = ns.Inner.T"),
            TypeNode::Reference(TypeReference {
                type_name: TypeName::Qualified(vec![
                    "ns".to_string(),
                    "Inner".to_string(),
                    "T".to_string()
                ]),
                arity: 0,
            })
        );
    }

    #[test]
    fn test_other_type_shapes_keep_their_kind() {
        let cases = [
            ("type A = | 'a' | 'b'", TypeShape::Union),
            ("type A = B & C", TypeShape::Intersection),
            ("type A = [first: string, second?: number]", TypeShape::Tuple),
            ("type A = 'a'", TypeShape::Literal),
            ("type A = (a: string, b?: number) => void", TypeShape::Function),
            ("type A = (string | number)[]", TypeShape::Array),
            ("type A = (string)", TypeShape::Parenthesized),
            ("type A = keyof typeof config", TypeShape::Operator),
            ("type A = typeof config", TypeShape::Query),
            ("type A = B['key']", TypeShape::IndexedAccess),
            ("type A<T> = T extends string ? 'yes' : 'no'", TypeShape::Conditional),
        ];
        for (source, shape) in cases {
            assert_eq!(alias_type(source), TypeNode::Other(shape), "source: {source}");
        }
    }

    #[test]
    fn test_index_mapped_and_method_members() {
        let interface = interface(
            "interface Bag { [key: string]: number; run(x: number): void; get size(): number; (): void; new (): Bag; [Symbol.iterator]: string }",
        );
        assert_eq!(
            interface.members[0],
            Signature::Index(IndexSignature {
                parameter: "key".to_string()
            })
        );
        assert_eq!(
            interface.members[1],
            Signature::Method(MethodSignature {
                name: "run".to_string()
            })
        );
        assert!(matches!(interface.members[2], Signature::Method(_)));
        assert_eq!(interface.members[3], Signature::Call);
        assert_eq!(interface.members[4], Signature::Construct);
        assert_eq!(
            interface.members[5],
            Signature::Computed("[Symbol.iterator]".to_string())
        );

        let TypeNode::Object(mapped) = alias_type("type M = { [K in Keys]?: string }") else {
            panic!("expected object");
        };
        assert_eq!(
            mapped.members,
            vec![Signature::Mapped(MappedSignature {
                parameter: "K".to_string()
            })]
        );
    }

    #[test]
    fn test_other_statements_are_kept_in_order() {
        let file = parse(
            r#"
import { Thing } from "./thing";
export const value = { a: 1, b: [1, 2] };
function helper(x: number): number {
  return x * 2;
}
enum Color { Red, Green }
type After = Thing
"#,
        )
        .unwrap();

        let kinds: Vec<_> = file.statements.iter().map(Statement::kind).collect();
        assert_eq!(kinds, vec!["import", "variable", "function", "enum", "type alias"]);
    }

    #[test]
    fn test_namespaces_nest_statements() {
        let file = parse(
            "declare namespace Api { interface A {} namespace Inner { type B = A } }\nnamespace X.Y { type C = D }",
        )
        .unwrap();
        let Statement::Module(module) = &file.statements[0] else {
            panic!("expected module");
        };
        assert_eq!(module.name, "Api");
        assert_eq!(module.body.len(), 2);
        assert!(matches!(module.body[1], Statement::Module(_)));

        let Statement::Module(outer) = &file.statements[1] else {
            panic!("expected module");
        };
        assert_eq!(outer.name, "X");
        let Statement::Module(inner) = &outer.body[0] else {
            panic!("expected nested module");
        };
        assert_eq!(inner.name, "Y");
        assert_eq!(inner.body[0].kind(), "type alias");
    }

    #[test]
    fn test_leading_comment_before_export_and_declare() {
        let file = parse("/** Exported */\nexport type A = B\n\n// Ambient\ndeclare interface C {}\n").unwrap();
        let comments: Vec<_> = file
            .statements
            .iter()
            .map(|s| match s {
                Statement::TypeAlias(a) => a.leading_comment.clone(),
                Statement::Interface(i) => i.leading_comment.clone(),
                _ => None,
            })
            .collect();
        assert_eq!(
            comments,
            vec![Some("Exported".to_string()), Some("Ambient".to_string())]
        );
    }

    #[test]
    fn test_unterminated_interface_is_an_error() {
        let err = parse("interface A { a: string").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.to_string().contains("at line 1"));
    }

    #[test]
    fn test_error_reports_position() {
        let err = parse("type A = B\ntype C = ;").unwrap_err();
        assert_eq!((err.line, err.column), (2, 10));
    }

    #[test]
    fn test_deep_nesting_is_an_error() {
        let source = format!("type T = {}string{};", "(".repeat(50_000), ")".repeat(50_000));
        let err = parse(&source).unwrap_err();
        assert!(err.message.contains("nesting"), "{err}");
    }

    #[test]
    fn test_nesting_below_the_limit_parses() {
        let depth = MAX_NESTING - 1;
        let source = format!("type T = {}string{};", "(".repeat(depth), ")".repeat(depth));
        assert_eq!(alias_type(&source), TypeNode::Other(TypeShape::Parenthesized));
    }

    #[test]
    fn test_byte_order_mark_is_ignored() {
        assert_eq!(parse("\u{feff}type A = B").unwrap().statements.len(), 1);
    }

    #[test]
    fn test_line_column_counts_characters() {
        let source = "ab\ncé d";
        assert_eq!(line_column(source, 0), (1, 1));
        assert_eq!(line_column(source, 3), (2, 1));
        assert_eq!(line_column(source, source.find('d').unwrap()), (2, 4));
    }
}
