//! Source ingestion: oxc parse plus tree collection.
//!
//! One pass over each file's AST records import provenance and lowers every
//! JSX element into a flat arena with parent links and normalized attribute
//! values. Attribute extraction never evaluates expressions; anything
//! beyond a literal becomes [`PropValue::Unresolved`].

#[cfg(feature = "napi")]
use napi_derive::napi;
use oxc_allocator::Allocator;
use oxc_ast::ast::*;
use oxc_ast_visit::walk::{walk_import_declaration, walk_jsx_element};
use oxc_ast_visit::Visit;
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType};
use serde::{Deserialize, Serialize};

use crate::props::PropValue;
use crate::provenance::ImportProvenance;
use crate::tree::{JsxArena, JsxAttr, JsxNode, NodeId};

// ═══════════════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

pub const ERR_PARSE: &str = "PARSE_ERROR";
pub const ERR_IO: &str = "IO_ERROR";

/// Failure surfaced to the host. Only parse failures and batch I/O
/// problems exist; classification itself never errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct AnnotateError {
    pub code: String,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl AnnotateError {
    pub fn new(code: &str, message: &str, file: &str, line: u32, column: u32) -> Self {
        AnnotateError {
            code: code.to_string(),
            message: message.to_string(),
            file: file.to_string(),
            line,
            column,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SOURCE TREE
// ═══════════════════════════════════════════════════════════════════════════════

/// Everything downstream passes need from one file: the element arena,
/// the import table, and the top-level element ids.
#[derive(Debug, Default)]
pub struct SourceTree {
    pub file_path: String,
    pub arena: JsxArena,
    pub provenance: ImportProvenance,
    pub roots: Vec<NodeId>,
}

/// Check if a tag name can denote a component (starts uppercase).
pub fn is_component_name(name: &str) -> bool {
    name.chars().next().map_or(false, |c| c.is_ascii_uppercase())
}

/// Parse one JSX/TSX module into a [`SourceTree`]. The parser runs in
/// TypeScript + JSX mode, which also accepts plain JS input.
pub fn parse_source(source: &str, file_path: &str) -> Result<SourceTree, AnnotateError> {
    let allocator = Allocator::default();
    let source_type = SourceType::default()
        .with_module(true)
        .with_typescript(true)
        .with_jsx(true);
    let ret = Parser::new(&allocator, source, source_type).parse();

    if !ret.errors.is_empty() {
        let message = ret
            .errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(AnnotateError::new(ERR_PARSE, &message, file_path, 1, 1));
    }

    let mut collector = TreeCollector {
        tree: SourceTree {
            file_path: file_path.to_string(),
            ..Default::default()
        },
        stack: Vec::new(),
    };
    collector.visit_program(&ret.program);
    Ok(collector.tree)
}

// ═══════════════════════════════════════════════════════════════════════════════
// TREE COLLECTOR
// ═══════════════════════════════════════════════════════════════════════════════

struct TreeCollector {
    tree: SourceTree,
    /// Enclosing element ids; the top is the parent of whatever element is
    /// visited next. Fragments are transparent and never appear here.
    stack: Vec<NodeId>,
}

impl TreeCollector {
    fn record_import(&mut self, decl: &ImportDeclaration) {
        if decl.import_kind.is_type() {
            return;
        }
        let package = decl.source.value.to_string();
        if let Some(specifiers) = &decl.specifiers {
            for specifier in specifiers {
                match specifier {
                    ImportDeclarationSpecifier::ImportSpecifier(s) => {
                        let exported = match &s.imported {
                            ModuleExportName::IdentifierName(id) => id.name.to_string(),
                            ModuleExportName::StringLiteral(lit) => lit.value.to_string(),
                            _ => s.local.name.to_string(),
                        };
                        self.tree
                            .provenance
                            .record_named(&s.local.name, &exported, &package);
                    }
                    ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => {
                        self.tree.provenance.record_default(&s.local.name, &package);
                    }
                    ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => {
                        self.tree
                            .provenance
                            .record_namespace(&s.local.name, &package);
                    }
                }
            }
        }
    }

    fn element_name(name: &JSXElementName) -> (String, bool) {
        match name {
            JSXElementName::Identifier(id) => (id.name.to_string(), true),
            JSXElementName::IdentifierReference(id) => (id.name.to_string(), true),
            JSXElementName::NamespacedName(ns) => {
                (format!("{}:{}", ns.namespace.name, ns.name.name), false)
            }
            JSXElementName::MemberExpression(me) => (Self::member_name(me), false),
            JSXElementName::ThisExpression(_) => ("this".to_string(), false),
        }
    }

    fn member_name(me: &JSXMemberExpression) -> String {
        let object = match &me.object {
            JSXMemberExpressionObject::IdentifierReference(id) => id.name.to_string(),
            JSXMemberExpressionObject::MemberExpression(inner) => Self::member_name(inner),
            _ => "unknown".to_string(),
        };
        format!("{}.{}", object, me.property.name)
    }

    /// Reduce an attribute value to a literal or mark it unresolved. A
    /// missing value is JSX boolean shorthand.
    fn attr_value(value: Option<&JSXAttributeValue>) -> PropValue {
        match value {
            None => PropValue::Bool(true),
            Some(JSXAttributeValue::StringLiteral(s)) => PropValue::Str(s.value.to_string()),
            Some(JSXAttributeValue::ExpressionContainer(container)) => {
                match container.expression.as_expression() {
                    Some(Expression::BooleanLiteral(b)) => PropValue::Bool(b.value),
                    Some(Expression::StringLiteral(s)) => PropValue::Str(s.value.to_string()),
                    Some(Expression::NumericLiteral(n)) => PropValue::Num(n.value),
                    // Substitution-free template literals are plain strings.
                    Some(Expression::TemplateLiteral(t))
                        if t.expressions.is_empty() && t.quasis.len() == 1 =>
                    {
                        match &t.quasis[0].value.cooked {
                            Some(cooked) => PropValue::Str(cooked.to_string()),
                            None => PropValue::Unresolved,
                        }
                    }
                    _ => PropValue::Unresolved,
                }
            }
            Some(JSXAttributeValue::Element(_)) | Some(JSXAttributeValue::Fragment(_)) => {
                PropValue::Unresolved
            }
        }
    }

    fn lower_element(&mut self, element: &JSXElement) -> NodeId {
        let opening = &element.opening_element;
        let (name, identifier) = Self::element_name(&opening.name);

        let mut attrs = Vec::new();
        for item in &opening.attributes {
            // Spread attributes carry no usable names; they neither feed
            // classification nor block it.
            if let JSXAttributeItem::Attribute(attr) = item {
                let attr_name = match &attr.name {
                    JSXAttributeName::Identifier(id) => id.name.to_string(),
                    JSXAttributeName::NamespacedName(ns) => {
                        format!("{}:{}", ns.namespace.name, ns.name.name)
                    }
                };
                attrs.push(JsxAttr {
                    name: attr_name,
                    value: Self::attr_value(attr.value.as_ref()),
                });
            }
        }

        let insert_offset = match opening.attributes.last() {
            Some(item) => item.span().end,
            None => opening.name.span().end,
        };

        let parent = self.stack.last().copied();
        let id = self.tree.arena.push(JsxNode {
            name,
            identifier,
            attrs,
            parent,
            children: Vec::new(),
            span_start: element.span.start,
            span_end: element.span.end,
            insert_offset,
        });
        match parent {
            Some(parent_id) => self.tree.arena.get_mut(parent_id).children.push(id),
            None => self.tree.roots.push(id),
        }
        id
    }
}

impl<'a> Visit<'a> for TreeCollector {
    fn visit_import_declaration(&mut self, decl: &ImportDeclaration<'a>) {
        self.record_import(decl);
        walk_import_declaration(self, decl);
    }

    fn visit_jsx_element(&mut self, element: &JSXElement<'a>) {
        let id = self.lower_element(element);
        self.stack.push(id);
        walk_jsx_element(self, element);
        self.stack.pop();
    }
}
