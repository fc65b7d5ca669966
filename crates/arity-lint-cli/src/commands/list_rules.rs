//! List rules command implementation.

use arity_lint_rules::{all_rules, func_args, func_params};

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<8} {:<14} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in all_rules() {
        println!(
            "{:<8} {:<14} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nOptions ([rules.<name>] in arity-lint.toml):");
    println!(
        "  {:<14} global, or any called function name",
        func_args::NAME
    );
    println!(
        "  {:<14} {}",
        func_params::NAME,
        func_params::CONFIG_KEYS.join(", ")
    );
    println!("\nA limit of -1 disables the check for that key.");
    println!("func-args reports nothing until at least one limit is set.");

    println!("\nUse --rules to run a subset, e.g.:");
    println!("  arity-lint check --rules func-params");
    println!("  arity-lint check --rules AR001");
}
