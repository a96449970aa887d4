//! Property-based tests for the YAML merge and the pre-commit processor.
//!
//! These tests use proptest to generate documents and option combinations
//! and check that updates are idempotent and leave unrelated data alone.

#[cfg(test)]
mod proptest_tests {
    use crate::defaults::pre_commit::SAMPLE;
    use crate::merge::yaml::deep_merge;
    use crate::options::PythonFormatter;
    use crate::processors::pre_commit::{process, PreCommitOptions};
    use proptest::prelude::*;
    use serde_yaml::{Mapping, Value as YamlValue};

    const CUSTOM_REPO: &str = "https://example.com/acme/custom-hooks";

    fn yaml_value() -> impl Strategy<Value = YamlValue> {
        let leaf = prop_oneof![
            Just(YamlValue::Null),
            any::<bool>().prop_map(YamlValue::Bool),
            any::<i64>().prop_map(YamlValue::from),
            "[a-z]{0,6}".prop_map(YamlValue::from),
        ];
        leaf.prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(YamlValue::Sequence),
                prop::collection::btree_map("[a-d]", inner, 0..4).prop_map(|entries| {
                    YamlValue::Mapping(
                        entries
                            .into_iter()
                            .map(|(key, value)| (YamlValue::from(key), value))
                            .collect(),
                    )
                }),
            ]
        })
    }

    fn mapping() -> impl Strategy<Value = Mapping> {
        prop::collection::btree_map("[a-f]", yaml_value(), 0..6).prop_map(|entries| {
            entries
                .into_iter()
                .map(|(key, value)| (YamlValue::from(key), value))
                .collect()
        })
    }

    fn formatter() -> impl Strategy<Value = PythonFormatter> {
        prop_oneof![
            Just(PythonFormatter::None),
            Just(PythonFormatter::Autopep8),
            Just(PythonFormatter::Black),
            Just(PythonFormatter::Yapf),
        ]
    }

    fn pre_commit_options() -> impl Strategy<Value = PreCommitOptions> {
        (
            prop::array::uniform8(any::<bool>()),
            formatter(),
        )
            .prop_map(|(flags, python_formatter)| PreCommitOptions {
                include_jumanji_house: flags[0],
                include_prettier: flags[1],
                include_isort: flags[2],
                python_formatter,
                pylint_enabled: flags[3],
                flake8_enabled: flags[4],
                pydocstyle_enabled: flags[5],
                bandit_enabled: flags[6],
                pylint_entry_prefix: if flags[7] {
                    "utility-repo-scripts/".to_string()
                } else {
                    "scripts/".to_string()
                },
            })
    }

    fn sample_with_custom_repo() -> YamlValue {
        let mut document: YamlValue = serde_yaml::from_str(SAMPLE).unwrap();
        let custom: YamlValue = serde_yaml::from_str(&format!(
            "repo: {}\nrev: v1.0.0\nhooks:\n- id: custom-check\n",
            CUSTOM_REPO
        ))
        .unwrap();
        document["repos"].as_sequence_mut().unwrap().push(custom);
        document
    }

    // ============================================================================
    // deep_merge property tests
    // ============================================================================

    proptest! {
        /// Property: merging the same defaults twice changes nothing the second time
        #[test]
        fn deep_merge_is_idempotent(existing in mapping(), desired in mapping()) {
            let mut once = existing;
            deep_merge(&mut once, &desired);
            let mut twice = once.clone();
            deep_merge(&mut twice, &desired);
            prop_assert_eq!(once, twice);
        }

        /// Property: keys only present in the existing mapping are untouched
        #[test]
        fn deep_merge_preserves_unrelated_keys(existing in mapping(), desired in mapping()) {
            let mut merged = existing.clone();
            deep_merge(&mut merged, &desired);
            for (key, value) in &existing {
                if !desired.contains_key(key) {
                    prop_assert_eq!(merged.get(key), Some(value));
                }
            }
        }

        /// Property: scalar defaults always win
        #[test]
        fn deep_merge_overwrites_scalars(existing in mapping(), desired in mapping()) {
            let mut merged = existing;
            deep_merge(&mut merged, &desired);
            for (key, value) in &desired {
                if !value.is_mapping() && !value.is_sequence() {
                    prop_assert_eq!(merged.get(key), Some(value));
                }
            }
        }
    }

    // ============================================================================
    // pre-commit processing property tests
    // ============================================================================

    proptest! {
        /// Property: processing is idempotent for every option combination
        #[test]
        fn pre_commit_process_is_idempotent(options in pre_commit_options()) {
            let mut once = sample_with_custom_repo();
            process(&mut once, &options).unwrap();
            let mut twice = once.clone();
            process(&mut twice, &options).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Property: repos the tool does not manage survive processing
        #[test]
        fn pre_commit_process_keeps_custom_repo(options in pre_commit_options()) {
            let mut document = sample_with_custom_repo();
            process(&mut document, &options).unwrap();
            let repos = document["repos"].as_sequence().unwrap();
            let custom = repos
                .iter()
                .find(|repo| repo["repo"].as_str() == Some(CUSTOM_REPO));
            prop_assert!(custom.is_some());
            prop_assert_eq!(custom.unwrap()["rev"].as_str(), Some("v1.0.0"));
        }

        /// Property: a repo id never appears twice
        #[test]
        fn pre_commit_process_never_duplicates_repos(options in pre_commit_options()) {
            let mut document = sample_with_custom_repo();
            process(&mut document, &options).unwrap();
            process(&mut document, &options).unwrap();
            let ids: Vec<_> = document["repos"]
                .as_sequence()
                .unwrap()
                .iter()
                .filter_map(|repo| repo["repo"].as_str())
                .collect();
            let mut unique = ids.clone();
            unique.sort_unstable();
            unique.dedup();
            prop_assert_eq!(ids.len(), unique.len());
        }
    }
}
