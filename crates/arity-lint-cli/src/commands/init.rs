//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "arity-lint.toml";

const DEFAULT_CONFIG: &str = r#"# arity-lint configuration

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./src"

# Glob patterns to exclude from analysis
exclude = [
    "**/node_modules/**",
    "**/dist/**",
    "**/build/**",
]

# Respect .gitignore files
respect_gitignore = true

# Every key other than `enabled` and `severity` is a limit.
# A limit of -1 disables the check for that key.

# Arguments passed at call sites. Keys are called function names;
# `global` applies to every other call. No keys means no checks.
[rules.func-args]
# severity = "warning"
global = 4
# setTimeout = 2

# Declared parameters. Keys are construct categories.
[rules.func-params]
global = 3
# funcDefinition = 4
# funcExpression = 3
# arrowFuncExpression = 3
# funcTypeAnnotation = -1
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to set your limits");
    println!("  2. Run: arity-lint check");

    Ok(())
}

fn write_config(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))
}
