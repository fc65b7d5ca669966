//! Integration test: built-in rules driven through `arity-lint.toml` tables.
//!
//! Each case lints an in-memory snippet with the rule set built by
//! `rules_from_config` and compares the rendered messages.

use arity_lint_core::{Analyzer, Config};
use arity_lint_rules::rules_from_config;
use std::path::Path;

fn lint(toml: &str, file: &str, code: &str) -> Vec<String> {
    let config = Config::parse(toml).expect("valid config");
    let mut builder = Analyzer::builder().root(".");
    for rule in rules_from_config(&config).expect("valid rule tables") {
        builder = builder.rule_box(rule);
    }
    let analyzer = builder.config(config).build().expect("analyzer");
    analyzer
        .analyze_source(Path::new(file), code)
        .expect("clean source")
        .into_iter()
        .map(|v| v.message)
        .collect()
}

fn lint_js(toml: &str, code: &str) -> Vec<String> {
    lint(toml, "fixture.js", code)
}

fn lint_ts(toml: &str, code: &str) -> Vec<String> {
    lint(toml, "fixture.ts", code)
}

const FOO_BAR: &str = "[rules.func-args]\nfoo = 3\nbar = 2\n";

#[test]
fn func_args_calls_within_limits() {
    for code in [
        "foo('arg1');",
        "a.foo('arg1');",
        "foo('arg1', 'arg2');",
        "a.foo('arg1', 'arg2');",
        "foo('arg1', 'arg2', arg3);",
        "a.foo('arg1', 'arg2', arg3);",
        "bar('arg1');",
        "a.bar('arg1');",
        "bar('arg1', 'arg2');",
        "a.bar('arg1', 'arg2');",
    ] {
        assert!(lint_js(FOO_BAR, code).is_empty(), "{code}");
    }
}

#[test]
fn func_args_calls_over_limits() {
    let cases = [
        ("foo('arg1', 'arg2', arg3, arg4);", "foo", 4, 3),
        ("a.foo('arg1', 'arg2', arg3, arg4);", "foo", 4, 3),
        ("foo('arg1', 'arg2', arg3, arg4, arg5);", "foo", 5, 3),
        ("a.foo('arg1', 'arg2', arg3, arg4, arg5);", "foo", 5, 3),
        ("bar('arg1', 'arg2', arg3);", "bar", 3, 2),
        ("a.bar('arg1', 'arg2', arg3);", "bar", 3, 2),
        ("bar('arg1', 'arg2', arg3, arg4);", "bar", 4, 2),
        ("a.bar('arg1', 'arg2', arg3, arg4);", "bar", 4, 2),
    ];
    for (code, name, count, max) in cases {
        assert_eq!(
            lint_js(FOO_BAR, code),
            vec![format!(
                "{name} has been called with too many arguments ({count}). \
                 Maximum allowed is ({max})."
            )],
            "{code}"
        );
    }
}

#[test]
fn func_args_without_table_reports_nothing() {
    assert!(lint_js("", "foo(1, 2, 3, 4, 5, 6, 7, 8, 9);").is_empty());
}

#[test]
fn func_args_zero_limit_is_enforced() {
    let toml = "[rules.func-args]\nnoop = 0\n";
    assert!(lint_js(toml, "noop();").is_empty());
    assert_eq!(lint_js(toml, "noop(1);").len(), 1);
}

#[test]
fn func_args_nested_calls_report_separately() {
    let toml = "[rules.func-args]\nglobal = 1\n";
    let messages = lint_js(toml, "outer(inner(a, b), c);");
    assert_eq!(
        messages,
        vec![
            "outer has been called with too many arguments (2). Maximum allowed is (1).",
            "inner has been called with too many arguments (2). Maximum allowed is (1).",
        ]
    );
}

const PARAM_CODE: [&str; 4] = [
    "function test(param1, param2) {}",
    "a = (param1, param2) => {};",
    "b = function(param1, param2) {};",
    "c.forEach((param1, param2) => {});",
];

#[test]
fn func_params_global_limit() {
    let toml = "[rules.func-params]\nglobal = 1\n";
    let expected = [
        "function 'test' has too many params (2). Maximum allowed is (1).",
        "arrow function 'a' has too many params (2). Maximum allowed is (1).",
        "function 'b' has too many params (2). Maximum allowed is (1).",
        "arrow function has too many params (2). Maximum allowed is (1).",
    ];
    for (code, message) in PARAM_CODE.iter().zip(expected) {
        assert_eq!(lint_js(toml, code), vec![message], "{code}");
    }
}

#[test]
fn func_params_without_table_reports_nothing() {
    for code in [
        "function test(param1, param2, param3, param4, param5) {}",
        "a = (param1, param2, param3, param4, param5) => {};",
        "b = function(param1, param2, param3, param4, param5) {};",
        "c.forEach((param1, param2, param3, param4, param5) => {});",
    ] {
        assert!(lint_js("", code).is_empty(), "{code}");
    }
}

#[test]
fn func_params_category_overrides() {
    // (override key, index of the snippet it relaxes)
    for (key, relaxed) in [
        ("funcDefinition", 0),
        ("arrowFuncExpression", 1),
        ("funcExpression", 2),
    ] {
        let toml = format!("[rules.func-params]\nglobal = 1\n{key} = 2\n");
        for (index, code) in PARAM_CODE.iter().enumerate() {
            let relaxed_here = index == relaxed || (relaxed == 1 && index == 3);
            assert_eq!(
                lint_js(&toml, code).is_empty(),
                relaxed_here,
                "{key}: {code}"
            );
        }
    }
}

#[test]
fn func_params_all_overrides() {
    let toml = "[rules.func-params]\nglobal = 1\nfuncDefinition = 2\n\
                funcExpression = 3\narrowFuncExpression = 4\n";
    for code in [
        "function test(param1, param2) {}",
        "a = (param1, param2, param3, param4) => {};",
        "b = function(param1, param2, param3) {};",
        "c.reduce((param1, param2, param3, param4) => {});",
    ] {
        assert!(lint_js(toml, code).is_empty(), "{code}");
    }
    assert_eq!(
        lint_js(toml, "function test(param1, param2, param3) {}"),
        vec!["function 'test' has too many params (3). Maximum allowed is (2)."]
    );
}

#[test]
fn func_params_zero_category_beats_global() {
    let toml = "[rules.func-params]\nglobal = 4\nfuncExpression = 0\n";
    assert_eq!(lint_js(toml, "b = function(param1) {};").len(), 1);
    assert!(lint_js(toml, "function test(param1) {}").is_empty());
}

#[test]
fn func_params_disabled_category_beats_global() {
    let toml = "[rules.func-params]\nglobal = 1\narrowFuncExpression = -1\n";
    assert!(lint_js(toml, "c.reduce((a, b, c, d, e) => a);").is_empty());
    assert_eq!(lint_js(toml, "function test(a, b) {}").len(), 1);
}

#[test]
fn func_params_type_annotations() {
    let toml = "[rules.func-params]\nfuncTypeAnnotation = 1\n";
    assert_eq!(
        lint_ts(toml, "type F = (a: number, b: number) => void;"),
        vec!["function type 'F' has too many params (2). Maximum allowed is (1)."]
    );
    assert_eq!(
        lint_ts(toml, "let x: (a: string, b: string) => void;"),
        vec!["function type 'x' has too many params (2). Maximum allowed is (1)."]
    );
    assert!(lint_ts(toml, "function plain(a: number, b: number) {}").is_empty());
}

#[test]
fn func_params_interface_signatures() {
    let toml = "[rules.func-params]\nfuncTypeAnnotation = 1\n";
    let code = "interface Api {\n  (a: string, b: string): void;\n  \
                send(to: string, body: string): void;\n}\n";
    let messages = lint_ts(toml, code);
    assert_eq!(
        messages,
        vec![
            "call signature has too many params (2). Maximum allowed is (1).",
            "method signature 'send' has too many params (2). Maximum allowed is (1).",
        ]
    );
}

#[test]
fn both_rules_report_on_one_snippet() {
    let toml = "[rules.func-args]\nglobal = 1\n\n[rules.func-params]\nglobal = 1\n";
    let messages = lint_js(toml, "list.reduce((acc, item) => acc, 0);");
    assert_eq!(
        messages,
        vec![
            "reduce has been called with too many arguments (2). Maximum allowed is (1).",
            "arrow function has too many params (2). Maximum allowed is (1).",
        ]
    );
}

#[test]
fn disabled_rule_table_is_skipped() {
    let toml = "[rules.func-params]\nenabled = false\nglobal = 0\n";
    assert!(lint_js(toml, "function test(a) {}").is_empty());
}

#[test]
fn linting_is_idempotent() {
    let toml = "[rules.func-args]\nglobal = 1\n\n[rules.func-params]\nglobal = 1\n";
    let code = "function f(a, b) { return g(a, b); }\nconst h = (x, y) => f(x, y);\n";
    assert_eq!(lint_js(toml, code), lint_js(toml, code));
}

#[test]
fn invalid_rule_table_is_rejected() {
    let config = Config::parse("[rules.func-params]\nfuncDefinitions = 2\n").expect("parse");
    assert!(rules_from_config(&config).is_err());
}

#[test]
fn func_args_override_precedence() {
    let toml = "[rules.func-args]\nfoo = 3\nglobal = 1\n";
    assert!(lint_js(toml, "bar(a);").is_empty());
    assert_eq!(
        lint_js(toml, "bar(a, b);"),
        vec!["bar has been called with too many arguments (2). Maximum allowed is (1)."]
    );
    assert_eq!(
        lint_js(toml, "foo(a, b, c, d);"),
        vec!["foo has been called with too many arguments (4). Maximum allowed is (3)."]
    );
}

#[test]
fn func_params_subjects_carry_recovered_names() {
    let toml = "[rules.func-params]\nglobal = 2\n";
    let alias = lint_ts(toml, "type F = (a, b, c) => void;");
    assert_eq!(alias.len(), 1);
    assert!(alias[0].contains("'F'"), "{alias:?}");

    let variable = lint_js(toml, "const x = (a, b, c) => {};");
    assert_eq!(variable.len(), 1);
    assert!(variable[0].contains("'x'"), "{variable:?}");

    assert_eq!(
        lint_js(toml, "items.forEach((a, b, c) => {});"),
        vec!["arrow function has too many params (3). Maximum allowed is (2)."]
    );
}

#[test]
fn func_params_default_export_is_a_definition() {
    let toml = "[rules.func-params]\nfuncDefinition = 1\n";
    for file in ["fixture.js", "fixture.ts"] {
        assert_eq!(
            lint(toml, file, "export default function (a, b) {}"),
            vec!["function has too many params (2). Maximum allowed is (1)."],
            "{file}"
        );
        assert_eq!(
            lint(toml, file, "export default function named(a, b) {}"),
            vec!["function 'named' has too many params (2). Maximum allowed is (1)."],
            "{file}"
        );
        assert!(lint(toml, file, "export default function (a) {}").is_empty(), "{file}");
    }

    let expressions_only = "[rules.func-params]\nfuncExpression = 0\n";
    assert!(lint_js(expressions_only, "export default function (a, b) {}").is_empty());
}

#[test]
fn func_args_javascript_is_not_parsed_as_typescript() {
    let toml = "[rules.func-args]\nglobal = 1\n";
    assert!(lint_js(toml, "let x = a\n<b>(c, d)").is_empty());
    assert_eq!(
        lint_js(toml, "abstract(a, b);"),
        vec!["abstract has been called with too many arguments (2). Maximum allowed is (1)."]
    );
    for file in ["fixture.mjs", "fixture.cjs", "fixture.jsx"] {
        assert_eq!(lint(toml, file, "abstract(a, b);").len(), 1, "{file}");
    }
}
