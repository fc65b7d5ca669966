//! # arity-lint-core
//!
//! Core framework for arity linting of JavaScript and TypeScript sources.
//!
//! This crate provides the foundational traits and types for building
//! arity rules. It includes:
//!
//! - [`syntax`]: Tree-sitter parsing lowered into a typed [`SourceTree`]
//!   with a [`Visit`] trait for callbacks
//! - [`LimitOptions`] for resolving per-key limits over a global default
//! - [`Rule`] trait for per-file rules
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use arity_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./src")
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod options;
mod rule;
mod types;

/// Typed syntax model and parsing.
pub mod syntax;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use options::{Limit, LimitOptions, GLOBAL_KEY, MIN_LIMIT};
pub use rule::{Rule, RuleBox};
pub use syntax::{SourceTree, Visit};
pub use types::{
    ExceedData, LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic,
};
