//! Tests for argument compilation and environment expansion.

use crate::compile::{compile, compile_with, expand_with};
use crate::config::{ConfigItem, ConfigValue, Scalar, from_yaml};
use serial_test::serial;
use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

fn compile_yaml(yaml: &str) -> Vec<String> {
    compile_with(&from_yaml(yaml).unwrap(), env(&[]))
}

// ============================================================================
// Expansion
// ============================================================================

#[test]
fn test_expand_without_dollar_is_identity() {
    let lookup = env(&[("HOME", "/root")]);
    for s in ["", "plain", "with space", "{HOME}", "100%", "a{b}c"] {
        assert_eq!(expand_with(s, &lookup), s);
    }
}

#[test]
fn test_braced_and_bare_forms_match() {
    let lookup = env(&[("FOO", "bar")]);
    assert_eq!(expand_with("${FOO}", &lookup), "bar");
    assert_eq!(expand_with("$FOO", &lookup), "bar");
    assert_eq!(
        expand_with("x${FOO}y", &lookup),
        expand_with("x$FOO", &lookup) + "y"
    );
}

#[test]
fn test_unset_variable_expands_to_empty() {
    let lookup = env(&[]);
    assert_eq!(expand_with("$MISSING", &lookup), "");
    assert_eq!(expand_with("${MISSING}", &lookup), "");
    assert_eq!(expand_with("pre-$MISSING-post", &lookup), "pre--post");
}

#[test]
fn test_bare_form_stops_at_non_identifier_char() {
    let lookup = env(&[("DIR", "/tmp")]);
    assert_eq!(expand_with("$DIR/file.txt", &lookup), "/tmp/file.txt");
    assert_eq!(expand_with("$DIR.bak", &lookup), "/tmp.bak");
    assert_eq!(expand_with("${DIR}suffix", &lookup), "/tmpsuffix");
}

#[test]
fn test_multiple_references() {
    let lookup = env(&[("USER", "ci"), ("HOST", "build-1")]);
    assert_eq!(expand_with("$USER@${HOST}:22", &lookup), "ci@build-1:22");
}

#[test]
fn test_expansion_is_not_recursive() {
    let lookup = env(&[("OUTER", "$INNER"), ("INNER", "deep")]);
    assert_eq!(expand_with("$OUTER", &lookup), "$INNER");
    assert_eq!(expand_with("${OUTER}", &lookup), "$INNER");
}

#[test]
fn test_dollar_without_name_is_literal() {
    let lookup = env(&[]);
    assert_eq!(expand_with("cost: $", &lookup), "cost: $");
    assert_eq!(expand_with("$5", &lookup), "$5");
    assert_eq!(expand_with("a $ b", &lookup), "a $ b");
}

#[test]
fn test_empty_braces_expand_to_empty() {
    assert_eq!(expand_with("a${}b", env(&[])), "ab");
}

#[test]
#[serial]
fn test_compile_reads_process_environment() {
    // SAFETY: serialized with the other environment tests.
    unsafe {
        std::env::set_var("C7R_TEST_REGION", "eu-west-1");
        std::env::remove_var("C7R_TEST_UNSET");
    }

    let items = vec![
        ConfigItem::flag("--region", "${C7R_TEST_REGION}".into()),
        ConfigItem::flag("--profile", "$C7R_TEST_UNSET".into()).with_joiner("="),
    ];
    let args = compile(&items);

    unsafe {
        std::env::remove_var("C7R_TEST_REGION");
    }

    assert_eq!(args, vec!["--region", "eu-west-1", "--profile="]);
}

// ============================================================================
// Compilation
// ============================================================================

#[test]
fn test_list_with_equals_joiner() {
    let args = compile_yaml(
        r#"
- name: --flag
  value: [a, b]
  joiner: "="
"#,
    );
    assert_eq!(args, vec!["--flag=a", "--flag=b"]);
}

#[test]
fn test_positional_then_quoted_flag() {
    let args = compile_yaml(
        r#"
- pos1
- name: -o
  value: out file
"#,
    );
    assert_eq!(args, vec!["pos1", "-o", "\"out file\""]);
}

#[test]
fn test_space_joiner_emits_two_tokens_per_value() {
    let items = vec![ConfigItem::flag("--include", vec!["src", "tests"].into())];
    assert_eq!(
        compile_with(&items, env(&[])),
        vec!["--include", "src", "--include", "tests"]
    );

    for value in ["v", "", "two words", "a=b", "$X", "-dash"] {
        let lookup = env(&[("X", "from env")]);
        let expanded = expand_with(value, &lookup);
        let expected = if expanded.contains(' ') {
            format!("\"{}\"", expanded)
        } else {
            expanded
        };

        let args = compile_with(&[ConfigItem::flag("--f", value.into())], &lookup);
        assert_eq!(args, vec!["--f".to_string(), expected], "value {value:?}");
    }
}

#[test]
fn test_non_space_joiner_emits_one_token_per_value() {
    for joiner in ["=", "", ":", "  ", "\t", "=>"] {
        for value in ["v", "", "two words", "$X"] {
            let lookup = env(&[("X", "x")]);
            let expanded = expand_with(value, &lookup);
            let expected = if expanded.contains(' ') {
                format!("\"{}\"", expanded)
            } else {
                expanded
            };

            let items = vec![ConfigItem::flag("--f", value.into()).with_joiner(joiner)];
            let args = compile_with(&items, &lookup);
            assert_eq!(
                args,
                vec![format!("--f{}{}", joiner, expected)],
                "joiner {joiner:?}, value {value:?}"
            );
        }
    }
}

#[test]
fn test_positional_value_is_expanded_not_quoted() {
    let items = vec![ConfigItem::positional("$TARGET dir")];
    let args = compile_with(&items, env(&[("TARGET", "build")]));
    assert_eq!(args, vec!["build dir"]);
}

#[test]
fn test_positional_non_string_values_are_skipped() {
    // Only string values are usable as positionals; other shapes are dropped
    // without an error.
    let args = compile_yaml(
        r#"
- name: ""
  value: 42
- name: ""
  value: [a, b]
- value: true
- keep
"#,
    );
    assert_eq!(args, vec!["keep"]);
}

#[test]
fn test_scalar_values_use_default_text() {
    let items = vec![
        ConfigItem::flag("--retries", ConfigValue::Scalar(Scalar::Number(3u64.into()))),
        ConfigItem::flag("--force", ConfigValue::Scalar(Scalar::Bool(false))).with_joiner("="),
    ];
    assert_eq!(
        compile_with(&items, env(&[])),
        vec!["--retries", "3", "--force=false"]
    );
}

#[test]
fn test_null_value_emits_bare_flag() {
    let args = compile_yaml(
        r#"
- name: --verbose
- name: --level
  value: null
  joiner: "="
"#,
    );
    assert_eq!(args, vec!["--verbose", "--level"]);
}

#[test]
fn test_unsupported_value_is_skipped() {
    let args = compile_yaml(
        r#"
- name: --nested
  value:
    a: b
- name: --kept
  value: here
"#,
    );
    assert_eq!(args, vec!["--kept", "here"]);
}

#[test]
fn test_list_skips_non_string_elements() {
    let args = compile_yaml(
        r#"
- name: -e
  value: [one, 2, three]
  joiner: ""
"#,
    );
    assert_eq!(args, vec!["-eone", "-ethree"]);
}

#[test]
fn test_list_elements_are_expanded_and_quoted() {
    let items = vec![ConfigItem::flag("--note", vec!["$A", "${B}"].into()).with_joiner("=")];
    let args = compile_with(&items, env(&[("A", "x"), ("B", "y z")]));
    assert_eq!(args, vec!["--note=x", "--note=\"y z\""]);
}

#[test]
fn test_items_mapping_with_named_items() {
    let args = compile_yaml(
        r#"
items:
  - name: ""
    value: apply
  - name: -var-file
    value: prod.tfvars
    joiner: "="
  - name: -auto-approve
    value: true
    joiner: "="
"#,
    );
    assert_eq!(
        args,
        vec!["apply", "-var-file=prod.tfvars", "-auto-approve=true"]
    );
}

#[test]
fn test_empty_items_compile_to_nothing() {
    assert!(compile_with(&[], env(&[])).is_empty());
}
