//! Rule to limit the number of declared parameters.
//!
//! # Rationale
//!
//! Functions that take many positional parameters are hard to call
//! correctly and tend to accumulate unrelated concerns. This rule caps the
//! parameter count per kind of function-like construct, including
//! TypeScript function-type signatures.
//!
//! # Configuration
//!
//! | Key | Applies to |
//! |-----|------------|
//! | `global` | every construct without a more specific limit |
//! | `funcDefinition` | `function foo() {}` statements |
//! | `funcExpression` | `function () {}` expressions and methods |
//! | `arrowFuncExpression` | `() => {}` |
//! | `funcTypeAnnotation` | function types and bodyless signatures |
//!
//! A limit of `-1` disables the check for that category.

use arity_lint_core::syntax::{
    Binding, FunctionNode, FunctionShape, MethodKind, Modifiers, SignatureKind,
};
use arity_lint_core::{
    Config, ConfigError, ExceedData, FileContext, LimitOptions, Location, Rule, Severity,
    SourceTree, Suggestion, Violation, Visit, GLOBAL_KEY,
};
use std::fmt;
use tracing::trace;

/// Rule code for func-params.
pub const CODE: &str = "AR002";

/// Rule name for func-params.
pub const NAME: &str = "func-params";

/// Message template key.
pub const MESSAGE_ID: &str = "exceed";

/// Option keys accepted in the `[rules.func-params]` table.
pub const CONFIG_KEYS: &[&str] = &[
    GLOBAL_KEY,
    "funcDefinition",
    "funcExpression",
    "arrowFuncExpression",
    "funcTypeAnnotation",
];

const MESSAGE: &str = "{{name}} has too many params ({{count}}). Maximum allowed is ({{max}}).";

const DOCS_URL: &str =
    "https://github.com/ynishi/arity-lint/blob/main/docs/rules/func-params.md";

/// Category of a function-like construct, keyed by its option name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Function declarations.
    FuncDefinition,
    /// Function expressions and methods.
    FuncExpression,
    /// Arrow functions.
    ArrowFuncExpression,
    /// Function types and bodyless signatures.
    FuncTypeAnnotation,
}

impl Category {
    /// Classifies a construct by its syntactic shape.
    #[must_use]
    pub fn of(shape: &FunctionShape) -> Self {
        match shape {
            FunctionShape::Declaration { .. } => Self::FuncDefinition,
            FunctionShape::Expression { .. } | FunctionShape::Method { .. } => {
                Self::FuncExpression
            }
            FunctionShape::Arrow { .. } => Self::ArrowFuncExpression,
            FunctionShape::Signature { .. } => Self::FuncTypeAnnotation,
        }
    }

    /// Returns the option key carrying this category's limit.
    #[must_use]
    pub fn config_key(self) -> &'static str {
        match self {
            Self::FuncDefinition => "funcDefinition",
            Self::FuncExpression => "funcExpression",
            Self::ArrowFuncExpression => "arrowFuncExpression",
            Self::FuncTypeAnnotation => "funcTypeAnnotation",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.config_key())
    }
}

/// Limits the number of parameters in function definitions, expressions,
/// arrows and function-type signatures.
#[derive(Debug, Clone)]
pub struct FuncParams {
    options: LimitOptions,
    severity: Severity,
}

impl Default for FuncParams {
    fn default() -> Self {
        Self::new(LimitOptions::new())
    }
}

impl FuncParams {
    /// Creates a new rule with the given limits.
    #[must_use]
    pub fn new(options: LimitOptions) -> Self {
        Self {
            options,
            severity: Severity::Error,
        }
    }

    /// Creates the rule from the `[rules.func-params]` table of a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is not one of [`CONFIG_KEYS`] or a limit is
    /// not an integer of at least `-1`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let options = match config.rule(NAME) {
            Some(table) => LimitOptions::from_rule_config(NAME, table, Some(CONFIG_KEYS))?,
            None => LimitOptions::new(),
        };
        Ok(Self::new(options))
    }

    /// Sets the limit for a category.
    #[must_use]
    pub fn limit(mut self, category: Category, max: i64) -> Self {
        self.options = self.options.with(category.config_key(), max);
        self
    }

    /// Sets the fallback limit for all categories.
    #[must_use]
    pub fn global(mut self, max: i64) -> Self {
        self.options = self.options.with(GLOBAL_KEY, max);
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Returns the configured limits.
    #[must_use]
    pub fn options(&self) -> &LimitOptions {
        &self.options
    }
}

impl Rule for FuncParams {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces the number of parameters used in functions, arrows and function types"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, tree: &SourceTree) -> Vec<Violation> {
        let mut visitor = FunctionVisitor {
            ctx,
            rule: self,
            violations: Vec::new(),
        };

        tree.walk(&mut visitor);
        visitor.violations
    }
}

struct FunctionVisitor<'a> {
    ctx: &'a FileContext,
    rule: &'a FuncParams,
    violations: Vec<Violation>,
}

impl Visit for FunctionVisitor<'_> {
    fn visit_function(&mut self, func: &FunctionNode) {
        let category = Category::of(&func.shape);
        let limit = self.rule.options.resolve(category.config_key());

        let Some(max) = limit.exceeded_by(func.param_count) else {
            return;
        };

        let data = ExceedData {
            name: label(func),
            count: func.param_count,
            max,
        };

        trace!(
            "{}:{}: {} ({}) has {} params, limit {}",
            self.ctx.relative_path.display(),
            func.span.line,
            data.name,
            category,
            func.param_count,
            max
        );

        self.violations.push(
            Violation::new(
                CODE,
                NAME,
                self.rule.severity,
                Location::from_span(self.ctx.relative_path.clone(), func.span),
                data.render(MESSAGE),
            )
            .with_data(MESSAGE_ID, data)
            .with_suggestion(Suggestion::new(
                "group related parameters into an options object",
            ))
            .with_docs_url(DOCS_URL),
        );
    }
}

/// Builds the human-readable subject of a finding, e.g. `arrow function 'handler'`.
///
/// The name is the construct's own identifier, else the type alias, member
/// or variable it is bound to. Unnamed constructs get the bare kind phrase.
#[must_use]
pub fn label(func: &FunctionNode) -> String {
    let phrase = kind_phrase(&func.shape);
    match label_name(func) {
        Some(name) => format!("{phrase} '{name}'"),
        None => phrase,
    }
}

fn label_name(func: &FunctionNode) -> Option<&str> {
    // The key of a constructor is always `constructor`.
    if let FunctionShape::Method {
        kind: MethodKind::Constructor,
        ..
    } = func.shape
    {
        return None;
    }
    if let Some(own) = func.shape.own_name() {
        return Some(own);
    }
    match func.binding.as_ref()? {
        Binding::TypeAlias(name) | Binding::Member(name) | Binding::Variable(name) => {
            Some(name.as_str())
        }
    }
}

fn kind_phrase(shape: &FunctionShape) -> String {
    match shape {
        FunctionShape::Declaration { modifiers, .. }
        | FunctionShape::Expression { modifiers, .. } => with_modifiers("function", *modifiers),
        FunctionShape::Method {
            kind, modifiers, ..
        } => match kind {
            MethodKind::Method => with_modifiers("method", *modifiers),
            MethodKind::Getter => "getter".to_string(),
            MethodKind::Setter => "setter".to_string(),
            MethodKind::Constructor => "constructor".to_string(),
        },
        FunctionShape::Arrow { is_async: true } => "async arrow function".to_string(),
        FunctionShape::Arrow { is_async: false } => "arrow function".to_string(),
        FunctionShape::Signature { kind, .. } => match kind {
            SignatureKind::FunctionType => "function type",
            SignatureKind::ConstructorType => "constructor type",
            SignatureKind::CallSignature => "call signature",
            SignatureKind::ConstructSignature => "construct signature",
            SignatureKind::MethodSignature => "method signature",
            SignatureKind::FunctionSignature => "function signature",
        }
        .to_string(),
    }
}

fn with_modifiers(base: &str, modifiers: Modifiers) -> String {
    let mut phrase = String::new();
    if modifiers.is_async {
        phrase.push_str("async ");
    }
    if modifiers.is_generator {
        phrase.push_str("generator ");
    }
    phrase.push_str(base);
    phrase
}

#[cfg(test)]
mod tests {
    use super::*;
    use arity_lint_core::syntax::Dialect;
    use std::path::Path;

    fn check_with(rule: &FuncParams, code: &str, dialect: Dialect) -> Vec<Violation> {
        let tree = SourceTree::parse(code, dialect).expect("Failed to parse");
        assert!(!tree.has_errors(), "unexpected syntax errors in {code:?}");
        let path = match dialect {
            Dialect::TypeScript => Path::new("test.ts"),
            _ => Path::new("test.js"),
        };
        let ctx = FileContext::new(path, Path::new("."));
        rule.check(&ctx, &tree)
    }

    fn check_js(rule: &FuncParams, code: &str) -> Vec<Violation> {
        check_with(rule, code, Dialect::JavaScript)
    }

    fn check_ts(rule: &FuncParams, code: &str) -> Vec<Violation> {
        check_with(rule, code, Dialect::TypeScript)
    }

    fn messages(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.message.as_str()).collect()
    }

    #[test]
    fn test_declaration_over_global() {
        let rule = FuncParams::default().global(1);
        let violations = check_js(&rule, "function test(param1, param2) {}");
        assert_eq!(
            messages(&violations),
            vec!["function 'test' has too many params (2). Maximum allowed is (1)."]
        );
        assert_eq!(violations[0].message_id.as_deref(), Some(MESSAGE_ID));
        assert!(violations[0].suggestion.is_some());
    }

    #[test]
    fn test_category_override_wins() {
        let rule = FuncParams::default()
            .global(3)
            .limit(Category::FuncDefinition, 1);
        assert_eq!(check_js(&rule, "function test(param1, param2) {}").len(), 1);
        assert!(check_js(&rule, "a = (param1, param2) => {};").is_empty());
    }

    #[test]
    fn test_zero_override_is_enforced() {
        let rule = FuncParams::default()
            .global(4)
            .limit(Category::FuncExpression, 0);
        let violations = check_js(&rule, "b = function(param1) {};");
        assert_eq!(
            messages(&violations),
            vec!["function 'b' has too many params (1). Maximum allowed is (0)."]
        );
    }

    #[test]
    fn test_minus_one_override_disables_category() {
        let rule = FuncParams::default()
            .global(1)
            .limit(Category::ArrowFuncExpression, -1);
        assert!(check_js(&rule, "c.reduce((acc, item, index, all) => acc);").is_empty());
        assert_eq!(check_js(&rule, "function f(a, b) {}").len(), 1);
    }

    #[test]
    fn test_empty_options_report_nothing() {
        let rule = FuncParams::default();
        assert!(check_js(&rule, "function f(a, b, c, d, e, f, g) {}").is_empty());
    }

    #[test]
    fn test_unnamed_callback_label() {
        let rule = FuncParams::default().limit(Category::ArrowFuncExpression, 0);
        let violations = check_js(&rule, "c.forEach((param1) => {});");
        assert_eq!(
            messages(&violations),
            vec!["arrow function has too many params (1). Maximum allowed is (0)."]
        );
    }

    #[test]
    fn test_type_alias_label() {
        let rule = FuncParams::default().limit(Category::FuncTypeAnnotation, 1);
        let violations = check_ts(&rule, "type F = (a: number, b: number) => void;");
        assert_eq!(
            messages(&violations),
            vec!["function type 'F' has too many params (2). Maximum allowed is (1)."]
        );
    }

    #[test]
    fn test_variable_annotation_label() {
        let rule = FuncParams::default().limit(Category::FuncTypeAnnotation, 1);
        let violations = check_ts(&rule, "let x: (a: string, b: string) => void;");
        assert_eq!(
            violations[0].data.as_ref().map(|d| d.name.as_str()),
            Some("function type 'x'")
        );
    }

    #[test]
    fn test_method_labels() {
        let rule = FuncParams::default().global(0);
        let violations = check_js(
            &rule,
            "class A { constructor(a) {} async run(a) {} set value(v) {} }",
        );
        assert_eq!(
            violations
                .iter()
                .filter_map(|v| v.data.as_ref().map(|d| d.name.as_str()))
                .collect::<Vec<_>>(),
            vec!["constructor", "async method 'run'", "setter 'value'"]
        );
    }

    #[test]
    fn test_generator_declaration_label() {
        let rule = FuncParams::default().global(0);
        let violations = check_js(&rule, "async function* stream(source) {}");
        assert_eq!(
            violations[0].data.as_ref().map(|d| d.name.as_str()),
            Some("async generator function 'stream'")
        );
    }

    #[test]
    fn test_category_of() {
        assert_eq!(
            Category::of(&FunctionShape::Arrow { is_async: true }),
            Category::ArrowFuncExpression
        );
        assert_eq!(
            Category::of(&FunctionShape::Method {
                name: None,
                kind: MethodKind::Getter,
                modifiers: Modifiers::default(),
            }),
            Category::FuncExpression
        );
        assert_eq!(Category::FuncTypeAnnotation.to_string(), "funcTypeAnnotation");
    }

    #[test]
    fn test_from_config_rejects_unknown_key() {
        let config = Config::parse("[rules.func-params]\nfuncDefinitions = 2\n").expect("parse");
        assert!(matches!(
            FuncParams::from_config(&config),
            Err(ConfigError::UnknownOption { .. })
        ));
    }

    #[test]
    fn test_from_config() {
        let toml = "[rules.func-params]\nglobal = 2\nfuncTypeAnnotation = -1\n";
        let config = Config::parse(toml).expect("parse");
        let rule = FuncParams::from_config(&config).expect("valid");
        assert_eq!(rule.options().get("global"), Some(2));
        assert!(check_ts(&rule, "type G = (a: 1, b: 2, c: 3) => void;").is_empty());
        assert_eq!(check_ts(&rule, "function g(a, b, c) {}").len(), 1);
    }
}
