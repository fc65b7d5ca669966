//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::syntax::SourceTree;
use crate::types::{Severity, Violation};

/// A per-file lint rule over the lowered syntax tree.
///
/// Rules receive the parsed [`SourceTree`] and usually drive a
/// [`Visit`](crate::syntax::Visit) implementation over it.
///
/// # Example
///
/// ```ignore
/// use arity_lint_core::{FileContext, Rule, SourceTree, Violation};
/// use arity_lint_core::syntax::{CallSite, Visit};
///
/// pub struct NoEval;
///
/// impl Rule for NoEval {
///     fn name(&self) -> &'static str { "no-eval" }
///     fn code(&self) -> &'static str { "AR100" }
///
///     fn check(&self, ctx: &FileContext, tree: &SourceTree) -> Vec<Violation> {
///         let mut visitor = EvalVisitor::new(ctx);
///         tree.walk(&mut visitor);
///         visitor.violations
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "func-args").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "AR001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Whether this rule has anything to check.
    ///
    /// Inactive rules are never run by the analyzer.
    fn is_active(&self) -> bool {
        true
    }

    /// Checks a single file and returns any violations found.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked
    /// * `tree` - The lowered syntax tree of the file
    ///
    /// # Returns
    ///
    /// A vector of violations found in this file.
    fn check(&self, ctx: &FileContext, tree: &SourceTree) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
