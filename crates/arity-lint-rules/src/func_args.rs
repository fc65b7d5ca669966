//! Rule to limit the number of arguments passed at call sites.
//!
//! # Rationale
//!
//! Calls with long argument lists are hard to read and easy to get wrong,
//! especially for positional APIs. This rule caps the argument count per
//! called function, with a global fallback.
//!
//! # Configuration
//!
//! Every key of the rule table is a limit:
//!
//! - `global`: fallback limit for calls without a specific override
//! - any other key: limit for calls to that name (`foo(...)` or `a.foo(...)`)
//!
//! A limit of `-1` disables the check for that key. With no limits at all
//! the rule is inactive.

use arity_lint_core::syntax::CallSite;
use arity_lint_core::{
    Config, ConfigError, ExceedData, FileContext, LimitOptions, Location, Rule, Severity,
    SourceTree, Violation, Visit,
};
use tracing::trace;

/// Rule code for func-args.
pub const CODE: &str = "AR001";

/// Rule name for func-args.
pub const NAME: &str = "func-args";

/// Message template key.
pub const MESSAGE_ID: &str = "exceed";

const MESSAGE: &str =
    "{{name}} has been called with too many arguments ({{count}}). Maximum allowed is ({{max}}).";

/// Rendered in place of `{{name}}` when the callee has no name.
const UNNAMED_CALLEE: &str = "anonymous function";

const DOCS_URL: &str = "https://github.com/ynishi/arity-lint/blob/main/docs/rules/func-args.md";

/// Limits the number of arguments used in function calls.
#[derive(Debug, Clone)]
pub struct FuncArgs {
    options: LimitOptions,
    severity: Severity,
}

impl Default for FuncArgs {
    fn default() -> Self {
        Self::new(LimitOptions::new())
    }
}

impl FuncArgs {
    /// Creates a new rule with the given limits.
    #[must_use]
    pub fn new(options: LimitOptions) -> Self {
        Self {
            options,
            severity: Severity::Error,
        }
    }

    /// Creates the rule from the `[rules.func-args]` table of a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a limit is not an integer of at least `-1`.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let options = match config.rule(NAME) {
            Some(table) => LimitOptions::from_rule_config(NAME, table, None)?,
            None => LimitOptions::new(),
        };
        Ok(Self::new(options))
    }

    /// Sets the limit for calls to `name` (or `global`).
    #[must_use]
    pub fn limit(mut self, name: impl Into<String>, max: i64) -> Self {
        self.options = self.options.with(name, max);
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

impl Rule for FuncArgs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enforces the number of arguments used in a function call"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn is_active(&self) -> bool {
        !self.options.is_empty()
    }

    fn check(&self, ctx: &FileContext, tree: &SourceTree) -> Vec<Violation> {
        if !self.is_active() {
            return Vec::new();
        }

        let mut visitor = CallVisitor {
            ctx,
            rule: self,
            violations: Vec::new(),
        };

        tree.walk(&mut visitor);
        visitor.violations
    }
}

struct CallVisitor<'a> {
    ctx: &'a FileContext,
    rule: &'a FuncArgs,
    violations: Vec<Violation>,
}

impl Visit for CallVisitor<'_> {
    fn visit_call(&mut self, call: &CallSite) {
        let name = call.callee.name().unwrap_or("");
        let limit = self.rule.options.resolve(name);

        let Some(max) = limit.exceeded_by(call.argument_count) else {
            return;
        };

        trace!(
            "{}:{}: `{}` called with {} arguments, limit {}",
            self.ctx.relative_path.display(),
            call.span.line,
            name,
            call.argument_count,
            max
        );

        let data = ExceedData {
            name: name.to_string(),
            count: call.argument_count,
            max,
        };
        let shown = ExceedData {
            name: if name.is_empty() {
                UNNAMED_CALLEE.to_string()
            } else {
                data.name.clone()
            },
            ..data.clone()
        };

        self.violations.push(
            Violation::new(
                CODE,
                NAME,
                self.rule.severity,
                Location::from_span(self.ctx.relative_path.clone(), call.span),
                shown.render(MESSAGE),
            )
            .with_data(MESSAGE_ID, data)
            .with_docs_url(DOCS_URL),
        );
    }
}
