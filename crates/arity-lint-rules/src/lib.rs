//! # arity-lint-rules
//!
//! Built-in arity rules for arity-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | AR001 | `func-args` | Limits the number of arguments passed at call sites |
//! | AR002 | `func-params` | Limits the number of declared parameters, including function types |
//!
//! Both rules read their limits from the rule table in `arity-lint.toml`:
//!
//! ```toml
//! [rules.func-args]
//! global = 4
//! setTimeout = 2
//!
//! [rules.func-params]
//! global = 3
//! arrowFuncExpression = -1
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use arity_lint_core::{Analyzer, Config};
//! use arity_lint_rules::rules_from_config;
//!
//! let config = Config::from_file("arity-lint.toml".as_ref())?;
//! let mut builder = Analyzer::builder().root("./src");
//! for rule in rules_from_config(&config)? {
//!     builder = builder.rule_box(rule);
//! }
//! let result = builder.config(config).build()?.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod func_args;
pub mod func_params;
mod registry;

pub use func_args::FuncArgs;
pub use func_params::{Category, FuncParams};
pub use registry::{all_rules, rules_from_config, RULE_NAMES};

/// Re-export core types for convenience.
pub use arity_lint_core::{Rule, Severity, Violation};
