//! Typed syntax model for JavaScript and TypeScript sources.
//!
//! Source text is parsed with Tree-sitter and lowered once into a
//! [`SourceTree`]: a flat, document-ordered list of the nodes the arity
//! rules care about. Each node kind is a tagged union ([`Callee`],
//! [`FunctionShape`], [`Binding`]) so rules dispatch with exhaustive
//! `match`es instead of probing node properties.
//!
//! Rules consume the tree through the [`Visit`] trait:
//!
//! ```ignore
//! struct CountCalls(usize);
//!
//! impl Visit for CountCalls {
//!     fn visit_call(&mut self, _call: &CallSite) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let tree = SourceTree::parse("foo(a); bar(b);", Dialect::JavaScript)?;
//! let mut counter = CountCalls(0);
//! tree.walk(&mut counter);
//! assert_eq!(counter.0, 2);
//! ```

mod dialect;
mod lower;

pub use dialect::Dialect;

use serde::Serialize;

/// Position of a syntax node in its source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Span {
    /// Byte offset of the node start.
    pub offset: usize,
    /// Length of the node in bytes.
    pub length: usize,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed, in bytes).
    pub column: usize,
}

/// The callee expression of a call site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Callee {
    /// `foo(...)`
    Identifier(String),
    /// `a.foo(...)`, `a?.foo(...)`, `this.#foo(...)`
    Member {
        /// Name of the accessed property, without a leading `#`.
        property: String,
    },
    /// Any other shape: computed members, call results, `super`, IIFEs.
    Other,
}

impl Callee {
    /// Returns the logical name of the invoked function, if it has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            Self::Member { property } => Some(property),
            Self::Other => None,
        }
    }
}

/// A function or method invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallSite {
    /// What is being called.
    pub callee: Callee,
    /// Number of argument expressions (a spread counts as one).
    pub argument_count: usize,
    /// Position of the whole call expression.
    pub span: Span,
}

/// `async` / generator flags of an executable function.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Modifiers {
    /// Declared with `async`.
    pub is_async: bool,
    /// Declared with `*`.
    pub is_generator: bool,
}

/// Flavour of a class or object-literal method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MethodKind {
    /// Ordinary method.
    Method,
    /// `get foo()`
    Getter,
    /// `set foo(v)`
    Setter,
    /// Class `constructor(...)`.
    Constructor,
}

/// Flavour of a bodyless, type-level function signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SignatureKind {
    /// `(a: A) => R`
    FunctionType,
    /// `new (a: A) => R`
    ConstructorType,
    /// `(a: A): R` inside an interface or type literal.
    CallSignature,
    /// `new (a: A): R` inside an interface or type literal.
    ConstructSignature,
    /// `foo(a: A): R` inside an interface, type literal or class.
    MethodSignature,
    /// `declare function foo(a: A): R;` or an overload declaration.
    FunctionSignature,
}

/// Syntactic shape of a function-like construct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FunctionShape {
    /// `function foo() {}` statement.
    Declaration {
        /// Declared identifier, absent for `export default function () {}`.
        name: Option<String>,
        /// `async` / generator flags.
        modifiers: Modifiers,
    },
    /// `function () {}` or `function foo() {}` in expression position.
    Expression {
        /// Optional own identifier.
        name: Option<String>,
        /// `async` / generator flags.
        modifiers: Modifiers,
    },
    /// Class or object-literal method.
    Method {
        /// Method key, absent for non-literal computed keys.
        name: Option<String>,
        /// Method flavour.
        kind: MethodKind,
        /// `async` / generator flags.
        modifiers: Modifiers,
    },
    /// `(a) => {}`
    Arrow {
        /// Declared with `async`.
        is_async: bool,
    },
    /// Bodyless type-level signature.
    Signature {
        /// Own identifier for method and function signatures.
        name: Option<String>,
        /// Signature flavour.
        kind: SignatureKind,
    },
}

impl FunctionShape {
    /// Returns the construct's own identifier, if it was declared with one.
    #[must_use]
    pub fn own_name(&self) -> Option<&str> {
        match self {
            Self::Declaration { name, .. }
            | Self::Expression { name, .. }
            | Self::Method { name, .. }
            | Self::Signature { name, .. } => name.as_deref(),
            Self::Arrow { .. } => None,
        }
    }
}

/// The nearest named declaration a function-like construct is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Binding {
    /// `type F = (a) => void`
    TypeAlias(String),
    /// `{ cb: (a) => void }`, `{ cb: function () {} }`, `this.cb = () => {}`
    Member(String),
    /// `const f = () => {}`, `let f: (a) => void`, `f = function () {}`
    Variable(String),
}

/// A function-like construct: declaration, expression, arrow, method or signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionNode {
    /// Syntactic shape.
    pub shape: FunctionShape,
    /// Number of declared parameters.
    pub param_count: usize,
    /// Enclosing binding site, if any.
    pub binding: Option<Binding>,
    /// Position of the whole construct.
    pub span: Span,
}

/// A node of interest in a [`SourceTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum SyntaxNode {
    /// A call expression.
    Call(CallSite),
    /// A function-like construct.
    Function(FunctionNode),
}

/// Errors produced while parsing source text.
#[derive(Debug, thiserror::Error)]
pub enum SyntaxError {
    /// The grammar could not be loaded into the parser.
    #[error("language error: {0}")]
    Language(String),

    /// Tree-sitter returned no tree.
    #[error("parse failed")]
    ParseFailed,

    /// The file extension does not map to a supported dialect.
    #[error("unsupported file extension: {0}")]
    UnsupportedExtension(String),
}

/// Callbacks invoked by [`SourceTree::walk`] for each node, in document order.
pub trait Visit {
    /// Called for every call expression.
    fn visit_call(&mut self, _call: &CallSite) {}

    /// Called for every function-like construct.
    fn visit_function(&mut self, _func: &FunctionNode) {}
}

/// A parsed source file reduced to the nodes the arity rules inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceTree {
    nodes: Vec<SyntaxNode>,
    syntax_errors: Vec<Span>,
}

impl SourceTree {
    /// Parses source text in the given dialect.
    ///
    /// Syntax errors do not fail parsing; they are recorded and exposed
    /// through [`SourceTree::syntax_errors`].
    ///
    /// # Errors
    ///
    /// Returns an error if the grammar cannot be loaded or Tree-sitter
    /// produces no tree.
    pub fn parse(source: &str, dialect: Dialect) -> Result<Self, SyntaxError> {
        lower::parse(source, dialect)
    }

    /// Creates a tree from already-lowered nodes.
    #[must_use]
    pub fn from_nodes(nodes: Vec<SyntaxNode>) -> Self {
        Self {
            nodes,
            syntax_errors: Vec::new(),
        }
    }

    /// Returns the lowered nodes in document order.
    #[must_use]
    pub fn nodes(&self) -> &[SyntaxNode] {
        &self.nodes
    }

    /// Returns the positions of `ERROR` and missing nodes found while parsing.
    #[must_use]
    pub fn syntax_errors(&self) -> &[Span] {
        &self.syntax_errors
    }

    /// Returns true if the source did not parse cleanly.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.syntax_errors.is_empty()
    }

    /// Drives a visitor over every node, in document order.
    pub fn walk<V: Visit + ?Sized>(&self, visitor: &mut V) {
        for node in &self.nodes {
            match node {
                SyntaxNode::Call(call) => visitor.visit_call(call),
                SyntaxNode::Function(func) => visitor.visit_function(func),
            }
        }
    }
}
