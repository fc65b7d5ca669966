//! Check command implementation.

use anyhow::{bail, Context, Result};
use arity_lint_core::{Analyzer, RuleBox};
use arity_lint_rules::rules_from_config;
use std::path::Path;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    path: &Path,
    format: OutputFormat,
    rules_filter: Option<String>,
    exclude: Vec<String>,
    source: &ConfigSource,
) -> Result<()> {
    let config = source.load()?;
    let rules = rules_from_config(&config).context("Invalid rule configuration")?;

    let rules = match rules_filter {
        Some(filter) => {
            let selectors: Vec<&str> = filter.split(',').map(str::trim).collect();
            select_rules(rules, &selectors)?
        }
        None => rules,
    };

    let mut builder = Analyzer::builder().root(path).config(config);
    for pattern in exclude {
        builder = builder.exclude(pattern);
    }
    for rule in rules {
        if !rule.is_active() {
            tracing::debug!("Rule {} has no limits configured", rule.name());
        }
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, format, analyzer.root())?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

/// Keeps the rules whose name or code appears in `selectors`.
fn select_rules(rules: Vec<RuleBox>, selectors: &[&str]) -> Result<Vec<RuleBox>> {
    for selector in selectors {
        if !rules
            .iter()
            .any(|r| r.name() == *selector || r.code() == *selector)
        {
            bail!("Unknown rule: {selector}");
        }
    }

    Ok(rules
        .into_iter()
        .filter(|r| selectors.contains(&r.name()) || selectors.contains(&r.code()))
        .collect())
}
