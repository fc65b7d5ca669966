//! Construction of the built-in rule set.

use crate::{func_args, func_params, FuncArgs, FuncParams};
use arity_lint_core::{Config, ConfigError, RuleBox};

/// Names of every built-in rule.
pub const RULE_NAMES: &[&str] = &[func_args::NAME, func_params::NAME];

/// Returns every built-in rule with empty limits.
///
/// Useful for listing rules; with no limits configured neither rule reports.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![Box::new(FuncArgs::default()), Box::new(FuncParams::default())]
}

/// Builds every built-in rule from its table in `config`.
///
/// Rules without a table get empty limits.
///
/// # Errors
///
/// Returns an error if a rule table holds an invalid limit or, for
/// `func-params`, an unknown key.
pub fn rules_from_config(config: &Config) -> Result<Vec<RuleBox>, ConfigError> {
    Ok(vec![
        Box::new(FuncArgs::from_config(config)?),
        Box::new(FuncParams::from_config(config)?),
    ])
}
