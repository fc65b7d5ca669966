//! Lowering of Tree-sitter concrete syntax trees into [`SourceTree`]s.

use tree_sitter::{Node, Parser};

use super::{
    Binding, CallSite, Callee, Dialect, FunctionNode, FunctionShape, MethodKind, Modifiers,
    SignatureKind, SourceTree, Span, SyntaxError, SyntaxNode,
};

/// Wrappers that are looked through when searching for a binding site.
const TRANSPARENT: &[&str] = &[
    "type_annotation",
    "opting_type_annotation",
    "parenthesized_type",
    "parenthesized_expression",
    "union_type",
];

pub(super) fn parse(source: &str, dialect: Dialect) -> Result<SourceTree, SyntaxError> {
    let mut parser = Parser::new();
    parser
        .set_language(&dialect.language())
        .map_err(|e| SyntaxError::Language(e.to_string()))?;

    let tree = parser
        .parse(source, None)
        .ok_or(SyntaxError::ParseFailed)?;
    let src = source.as_bytes();

    let mut nodes = Vec::new();
    let mut syntax_errors = Vec::new();

    // Pre-order walk with a cursor, so deep trees never recurse.
    let mut cursor = tree.root_node().walk();
    loop {
        let node = cursor.node();
        if node.is_error() || node.is_missing() {
            syntax_errors.push(span_of(node));
        } else if let Some(lowered) = lower_node(node, src) {
            nodes.push(lowered);
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return Ok(SourceTree {
                    nodes,
                    syntax_errors,
                });
            }
        }
    }
}

fn lower_node(node: Node<'_>, src: &[u8]) -> Option<SyntaxNode> {
    if !node.is_named() {
        return None;
    }

    if node.kind() == "call_expression" {
        return lower_call(node, src).map(SyntaxNode::Call);
    }

    let shape = function_shape(node, src)?;
    Some(SyntaxNode::Function(FunctionNode {
        shape,
        param_count: count_params(node),
        binding: binding_for(node, src),
        span: span_of(node),
    }))
}

fn lower_call(node: Node<'_>, src: &[u8]) -> Option<CallSite> {
    let function = node.child_by_field_name("function")?;
    // Dynamic `import(...)` is not a call.
    if function.kind() == "import" {
        return None;
    }

    // Tagged templates carry a template string instead of an argument list.
    let arguments = node.child_by_field_name("arguments")?;
    if arguments.kind() != "arguments" {
        return None;
    }

    let mut cursor = arguments.walk();
    let argument_count = arguments
        .named_children(&mut cursor)
        .filter(|child| !is_comment(child))
        .count();

    Some(CallSite {
        callee: lower_callee(function, src),
        argument_count,
        span: span_of(node),
    })
}

fn lower_callee(node: Node<'_>, src: &[u8]) -> Callee {
    match node.kind() {
        "identifier" => Callee::Identifier(text(node, src).to_owned()),
        "member_expression" => node
            .child_by_field_name("property")
            .map_or(Callee::Other, |property| Callee::Member {
                property: text(property, src).trim_start_matches('#').to_owned(),
            }),
        "parenthesized_expression" => {
            let mut cursor = node.walk();
            let inner = node
                .named_children(&mut cursor)
                .find(|child| !is_comment(child));
            inner.map_or(Callee::Other, |inner| lower_callee(inner, src))
        }
        _ => Callee::Other,
    }
}

fn function_shape(node: Node<'_>, src: &[u8]) -> Option<FunctionShape> {
    let shape = match node.kind() {
        "function_declaration" | "generator_function_declaration" => FunctionShape::Declaration {
            name: identifier_name(node, src),
            modifiers: modifiers(node),
        },
        // `export default function () {}` is a declaration without a name.
        "function_expression" | "function" | "generator_function" if is_default_export(node) => {
            FunctionShape::Declaration {
                name: identifier_name(node, src),
                modifiers: modifiers(node),
            }
        }
        "function_expression" | "function" | "generator_function" => FunctionShape::Expression {
            name: identifier_name(node, src),
            modifiers: modifiers(node),
        },
        "method_definition" => FunctionShape::Method {
            name: key_name(node, src),
            kind: method_kind(node, src),
            modifiers: modifiers(node),
        },
        "arrow_function" => FunctionShape::Arrow {
            is_async: has_token(node, "async"),
        },
        "function_type" => signature(None, SignatureKind::FunctionType),
        "constructor_type" => signature(None, SignatureKind::ConstructorType),
        "call_signature" => signature(None, SignatureKind::CallSignature),
        "construct_signature" => signature(None, SignatureKind::ConstructSignature),
        "method_signature" | "abstract_method_signature" => {
            signature(key_name(node, src), SignatureKind::MethodSignature)
        }
        "function_signature" => {
            signature(identifier_name(node, src), SignatureKind::FunctionSignature)
        }
        _ => return None,
    };
    Some(shape)
}

fn signature(name: Option<String>, kind: SignatureKind) -> FunctionShape {
    FunctionShape::Signature { name, kind }
}

fn is_default_export(node: Node<'_>) -> bool {
    node.parent().is_some_and(|parent| {
        parent.kind() == "export_statement"
            && has_token(parent, "default")
            && (parent.child_by_field_name("value") == Some(node)
                || parent.child_by_field_name("declaration") == Some(node))
    })
}

fn modifiers(node: Node<'_>) -> Modifiers {
    Modifiers {
        is_async: has_token(node, "async"),
        is_generator: node.kind().starts_with("generator") || has_token(node, "*"),
    }
}

fn method_kind(node: Node<'_>, src: &[u8]) -> MethodKind {
    if has_token(node, "get") {
        return MethodKind::Getter;
    }
    if has_token(node, "set") {
        return MethodKind::Setter;
    }
    let in_class = node.parent().is_some_and(|p| p.kind() == "class_body");
    if in_class && key_name(node, src).as_deref() == Some("constructor") {
        return MethodKind::Constructor;
    }
    MethodKind::Method
}

fn count_params(node: Node<'_>) -> usize {
    // `x => x` has a bare identifier instead of a parameter list.
    if node.child_by_field_name("parameter").is_some() {
        return 1;
    }

    let params = node.child_by_field_name("parameters").or_else(|| {
        let mut cursor = node.walk();
        let found = node
            .named_children(&mut cursor)
            .find(|child| child.kind() == "formal_parameters");
        found
    });
    let Some(params) = params else {
        return 0;
    };

    let mut cursor = params.walk();
    let count = params
        .named_children(&mut cursor)
        .filter(|child| !is_comment(child))
        .count();
    count
}

/// Finds the binding site a construct is directly attached to.
fn binding_for(node: Node<'_>, src: &[u8]) -> Option<Binding> {
    let mut child = node;
    let mut parent = node.parent()?;
    while TRANSPARENT.contains(&parent.kind()) {
        child = parent;
        parent = parent.parent()?;
    }

    let is_field = |field: &str| parent.child_by_field_name(field) == Some(child);

    match parent.kind() {
        "type_alias_declaration" if is_field("value") => parent
            .child_by_field_name("name")
            .map(|name| Binding::TypeAlias(text(name, src).to_owned())),
        "property_signature" if is_field("type") => key_name(parent, src).map(Binding::Member),
        "public_field_definition" if is_field("value") || is_field("type") => {
            key_name(parent, src).map(Binding::Member)
        }
        "field_definition" if is_field("value") => parent
            .child_by_field_name("property")
            .and_then(|key| property_name(key, src))
            .map(Binding::Member),
        "pair" if is_field("value") => parent
            .child_by_field_name("key")
            .and_then(|key| property_name(key, src))
            .map(Binding::Member),
        "variable_declarator" if is_field("value") || is_field("type") => parent
            .child_by_field_name("name")
            .filter(|name| name.kind() == "identifier")
            .map(|name| Binding::Variable(text(name, src).to_owned())),
        "assignment_expression" if is_field("right") => {
            let left = parent.child_by_field_name("left")?;
            match left.kind() {
                "identifier" => Some(Binding::Variable(text(left, src).to_owned())),
                "member_expression" => left
                    .child_by_field_name("property")
                    .map(|property| Binding::Member(text(property, src).to_owned())),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Name of a declaration's `name` identifier field.
fn identifier_name(node: Node<'_>, src: &[u8]) -> Option<String> {
    node.child_by_field_name("name")
        .map(|name| text(name, src).to_owned())
}

/// Name of a method, member signature or field key.
fn key_name(node: Node<'_>, src: &[u8]) -> Option<String> {
    node.child_by_field_name("name")
        .and_then(|key| property_name(key, src))
}

fn property_name(key: Node<'_>, src: &[u8]) -> Option<String> {
    match key.kind() {
        "property_identifier"
        | "private_property_identifier"
        | "shorthand_property_identifier"
        | "identifier"
        | "type_identifier"
        | "number" => Some(text(key, src).to_owned()),
        "string" => Some(text(key, src)
            .trim_matches(|c| c == '"' || c == '\'')
            .to_owned()),
        "computed_property_name" => {
            let mut cursor = key.walk();
            let inner = key
                .named_children(&mut cursor)
                .find(|child| matches!(child.kind(), "string" | "number"));
            inner.and_then(|inner| property_name(inner, src))
        }
        _ => None,
    }
}

fn has_token(node: Node<'_>, token: &str) -> bool {
    let mut cursor = node.walk();
    let found = node
        .children(&mut cursor)
        .any(|child| !child.is_named() && child.kind() == token);
    found
}

fn is_comment(node: &Node<'_>) -> bool {
    matches!(node.kind(), "comment" | "html_comment")
}

fn text<'a>(node: Node<'_>, src: &'a [u8]) -> &'a str {
    node.utf8_text(src).unwrap_or("")
}

fn span_of(node: Node<'_>) -> Span {
    let start = node.start_position();
    Span {
        offset: node.start_byte(),
        length: node.end_byte() - node.start_byte(),
        line: start.row + 1,
        column: start.column + 1,
    }
}
