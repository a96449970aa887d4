//! Integration tests for the hook-list merge engine through the public API.
//!
//! ## Test Scenarios
//!
//! 1. `reconcile_into_empty_document` - a missing group is inserted whole, once
//! 2. `remove_one_local_hook` - only the named local hook goes away
//! 3. `user_config_round_trip` - a hand-written config survives processing
//!    and rendering with its unrelated fields intact

use repo_setup::loader::render_yaml;
use repo_setup::merge::yaml::{reconcile, remove, Layout};
use repo_setup::options::PythonFormatter;
use repo_setup::processors::pre_commit::{process, PreCommitOptions};
use serde_yaml::Value;

const USER_CONFIG: &str = r#"
default_stages: [commit]
repos:
  - repo: https://github.com/pre-commit/pre-commit-hooks
    rev: v4.5.0
    hooks:
      - id: check-yaml
        args: [--allow-multiple-documents]
        exclude: ^charts/
      - id: check-added-large-files
  - repo: https://github.com/pycqa/isort
    rev: 5.13.2
    hooks:
      - id: isort
        args: [--profile=black]
  - repo: local
    hooks:
      - id: mypy
        name: mypy
        entry: mypy
        language: system
"#;

fn parse(text: &str) -> Value {
    serde_yaml::from_str(text).unwrap()
}

#[test]
fn test_reconcile_into_empty_document() {
    let layout = Layout::PRE_COMMIT;
    let default = parse("repo: https://example/repo\nrev: v1\nhooks:\n- id: x\n");
    let mut document = parse("{}");

    reconcile(&mut document, &layout, "https://example/repo", &default, &[]).unwrap();
    let once = document.clone();
    reconcile(&mut document, &layout, "https://example/repo", &default, &[]).unwrap();

    assert_eq!(document, once);
    let repos = document["repos"].as_sequence().unwrap();
    assert_eq!(repos.len(), 1);
    assert_eq!(repos[0]["hooks"], parse("- id: x"));
}

#[test]
fn test_remove_one_local_hook() {
    let mut document = parse(
        "repos:\n- repo: local\n  hooks:\n  - id: fake\n    entry: fake.sh\n  - id: pylint\n    entry: ensure_venv.sh\n",
    );

    remove(&mut document, &Layout::PRE_COMMIT, &["local"], &["pylint"]).unwrap();

    assert_eq!(
        document,
        parse("repos:\n- repo: local\n  hooks:\n  - id: fake\n    entry: fake.sh\n")
    );
}

#[test]
fn test_user_config_round_trip() {
    let mut document = parse(USER_CONFIG);
    let options = PreCommitOptions {
        include_isort: true,
        python_formatter: PythonFormatter::Black,
        pylint_enabled: true,
        ..PreCommitOptions::default()
    };

    process(&mut document, &options).unwrap();
    let rendered = render_yaml(&document).unwrap();
    let reparsed = parse(&rendered);

    assert_eq!(reparsed["default_stages"], parse("[commit]"));

    let repos = reparsed["repos"].as_sequence().unwrap();
    let base = &repos[0];
    assert_eq!(base["rev"].as_str(), Some("v4.5.0"));
    assert_eq!(base["hooks"][0]["exclude"].as_str(), Some("^charts/"));
    assert_eq!(base["hooks"][1]["id"].as_str(), Some("check-added-large-files"));
    assert_eq!(base["hooks"].as_sequence().unwrap().len(), 4);

    let isort = &repos[1];
    assert_eq!(isort["rev"].as_str(), Some("5.13.2"));
    assert_eq!(
        isort["hooks"][0]["args"],
        parse("[--profile=black, --settings-file=pyproject.toml]")
    );

    let local = &repos[2];
    let hook_ids: Vec<_> = local["hooks"]
        .as_sequence()
        .unwrap()
        .iter()
        .map(|hook| hook["id"].as_str().unwrap())
        .collect();
    assert_eq!(hook_ids, vec!["mypy", "pylint"]);

    process(&mut document, &options).unwrap();
    assert_eq!(render_yaml(&document).unwrap(), rendered);
}
