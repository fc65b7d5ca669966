//! Output formatting for lint results.

use anyhow::{Context, Result};
use arity_lint_core::{LintResult, Severity, Violation, ViolationDiagnostic};
use miette::{NamedSource, Report};
use std::path::Path;

use crate::OutputFormat;

/// Prints lint results in the specified format.
///
/// `root` is the analyzed directory; violation paths are relative to it.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Pretty => print_pretty(result, root)?,
        OutputFormat::Json => print_json(result)?,
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        let severity = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{}:{}:{} {} {}",
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
            violation.code,
            violation.rule,
        );
        println!("  {severity}: {}", violation.message);
        if let Some(suggestion) = &violation.suggestion {
            println!("  = help: {}", suggestion.message);
        }
        println!();
    }

    print_summary(result);
}

fn print_pretty(result: &LintResult, root: &Path) -> Result<()> {
    for violation in &result.violations {
        println!("{:?}", report(violation, root)?);
    }

    print_summary(result);
    Ok(())
}

fn report(violation: &Violation, root: &Path) -> Result<Report> {
    let path = root.join(&violation.location.file);
    let source = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to re-read {}", path.display()))?;

    Ok(Report::new(ViolationDiagnostic::from(violation)).with_source_code(NamedSource::new(
        violation.location.file.display().to_string(),
        source,
    )))
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();
    let color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    let files = result.files_checked;
    println!(
        "{color}Found {errors} error(s), {warnings} warning(s), {infos} info(s) \
         in {files} file(s)\x1b[0m"
    );
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}
