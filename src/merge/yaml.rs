//! YAML document reconciliation
//!
//! This module holds the merge engine used for hook-list documents such as
//! `.pre-commit-config.yaml`: an ordered mapping whose `repos` key holds a
//! sequence of groups, each owning a sequence of `hooks` entries.
//!
//! ## Operations
//!
//! - [`find_index`] / [`locate`] / [`locate_entry`] - find a record by key field
//! - [`deep_merge`] - recursive merge where mappings merge, lists union and
//!   scalars overwrite
//! - [`reconcile`] - ensure a group exists (bulk insert of its default) or
//!   merge the owned entries into an existing group
//! - [`remove`] - drop groups, or named entries of the `local` group
//!
//! Every operation is idempotent: running it twice against the same document
//! yields the same document as running it once.
//!
//! ## Example
//!
//! ```
//! use repo_setup::merge::yaml::{reconcile, Layout};
//! use serde_yaml::Value;
//!
//! let mut document: Value = serde_yaml::from_str("{}").unwrap();
//! let default: Value = serde_yaml::from_str(
//!     "{repo: 'https://example/repo', rev: v1, hooks: [{id: x}]}",
//! )
//! .unwrap();
//!
//! reconcile(&mut document, &Layout::PRE_COMMIT, "https://example/repo", &default, &[]).unwrap();
//! reconcile(&mut document, &Layout::PRE_COMMIT, "https://example/repo", &default, &[]).unwrap();
//!
//! assert_eq!(document["repos"].as_sequence().unwrap().len(), 1);
//! ```

use log::{debug, warn};
use serde_yaml::{Mapping, Value as YamlValue};

use crate::error::{Error, Result};

/// Key names a hook-list document is organized by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Top-level key holding the group sequence
    pub groups: &'static str,
    /// Field identifying a group
    pub group_id: &'static str,
    /// Group field holding the entry sequence
    pub entries: &'static str,
    /// Field identifying an entry
    pub entry_id: &'static str,
    /// Group id whose entries are removed one by one instead of wholesale
    pub local_marker: &'static str,
}

impl Layout {
    /// The `.pre-commit-config.yaml` layout.
    pub const PRE_COMMIT: Layout = Layout {
        groups: "repos",
        group_id: "repo",
        entries: "hooks",
        entry_id: "id",
        local_marker: "local",
    };
}

/// Find the index of the first record whose `key_field` equals `key_value`.
///
/// Records that are not mappings, or whose key field is not a string, never
/// match.
///
/// # Errors
///
/// Returns `Error::NotFound` when no record matches.
pub fn find_index(
    records: &[YamlValue],
    kind: &'static str,
    key_field: &str,
    key_value: &str,
) -> Result<usize> {
    records
        .iter()
        .position(|record| record.get(key_field).and_then(YamlValue::as_str) == Some(key_value))
        .ok_or_else(|| Error::NotFound {
            kind,
            key: key_value.to_string(),
            context: None,
        })
}

/// Find the index of a group inside a document.
///
/// A document without a group sequence has no groups, so every lookup
/// against it is `NotFound`.
pub fn locate(document: &YamlValue, layout: &Layout, group_key: &str) -> Result<usize> {
    let groups = document
        .get(layout.groups)
        .and_then(YamlValue::as_sequence)
        .map(Vec::as_slice)
        .unwrap_or_default();
    find_index(groups, layout.group_id, layout.group_id, group_key)
}

/// Find the index of an entry inside a group.
pub fn locate_entry(group: &YamlValue, layout: &Layout, entry_key: &str) -> Result<usize> {
    let entries = group
        .get(layout.entries)
        .and_then(YamlValue::as_sequence)
        .map(Vec::as_slice)
        .unwrap_or_default();
    find_index(entries, layout.entry_id, layout.entry_id, entry_key).map_err(|err| match err {
        Error::NotFound { kind, key, .. } => Error::NotFound {
            kind,
            key,
            context: Some(format!(
                "{} '{}'",
                layout.group_id,
                group
                    .get(layout.group_id)
                    .and_then(YamlValue::as_str)
                    .unwrap_or_default()
            )),
        },
        other => other,
    })
}

/// Borrow a group by key, if present.
pub fn find_group<'a>(document: &'a YamlValue, layout: &Layout, group_key: &str) -> Option<&'a YamlValue> {
    let index = locate(document, layout, group_key).ok()?;
    document.get(layout.groups)?.get(index)
}

/// Turn a null document into an empty mapping and borrow the mapping.
///
/// # Errors
///
/// Returns `Error::Document` when the document root is some other type.
pub fn ensure_mapping(document: &mut YamlValue) -> Result<&mut Mapping> {
    if document.is_null() {
        *document = YamlValue::Mapping(Mapping::new());
    }
    match document {
        YamlValue::Mapping(map) => Ok(map),
        other => Err(Error::Document {
            message: format!("expected a mapping, found {}", get_yaml_type_name(other)),
        }),
    }
}

/// Borrow the sequence stored under `key`, creating it when absent or null.
///
/// # Errors
///
/// Returns `Error::Document` when `key` holds a value of another type.
pub fn ensure_sequence<'a>(map: &'a mut Mapping, key: &str) -> Result<&'a mut Vec<YamlValue>> {
    let slot = map
        .entry(YamlValue::String(key.to_string()))
        .or_insert(YamlValue::Sequence(Vec::new()));
    if slot.is_null() {
        *slot = YamlValue::Sequence(Vec::new());
    }
    match slot {
        YamlValue::Sequence(seq) => Ok(seq),
        other => Err(Error::Document {
            message: format!(
                "expected '{}' to be a sequence, found {}",
                key,
                get_yaml_type_name(other)
            ),
        }),
    }
}

/// Recursively merge `desired` into `existing`.
///
/// - Mappings: merged key by key, creating the nested mapping when absent
/// - Sequences: items of `desired` not already present (by value) are
///   appended, keeping the existing order
/// - Scalars: overwritten
///
/// Keys present only in `existing` are never touched.
pub fn deep_merge(existing: &mut Mapping, desired: &Mapping) {
    for (key, value) in desired {
        match value {
            YamlValue::Mapping(desired_map) => {
                let slot = existing
                    .entry(key.clone())
                    .or_insert(YamlValue::Mapping(Mapping::new()));
                if !slot.is_mapping() {
                    if !slot.is_null() {
                        warn!(
                            "Type mismatch at '{}': replacing {} with Mapping",
                            key_name(key),
                            get_yaml_type_name(slot)
                        );
                    }
                    *slot = YamlValue::Mapping(Mapping::new());
                }
                if let YamlValue::Mapping(existing_map) = slot {
                    deep_merge(existing_map, desired_map);
                }
            }
            YamlValue::Sequence(desired_seq) => {
                let slot = existing
                    .entry(key.clone())
                    .or_insert(YamlValue::Sequence(Vec::new()));
                if !slot.is_sequence() {
                    if !slot.is_null() {
                        warn!(
                            "Type mismatch at '{}': replacing {} with Sequence",
                            key_name(key),
                            get_yaml_type_name(slot)
                        );
                    }
                    *slot = YamlValue::Sequence(Vec::new());
                }
                if let YamlValue::Sequence(existing_seq) = slot {
                    for item in desired_seq {
                        if !existing_seq.contains(item) {
                            existing_seq.push(item.clone());
                        }
                    }
                }
            }
            _ => {
                existing.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Ensure a group and its owned entries exist.
///
/// When no group with `group_key` exists, a copy of `group_default` (including
/// all of its default entries) is appended and nothing else happens. When the
/// group exists, each `(entry_id, entry_default)` pair is merged into the
/// matching entry, or appended when the entry is missing. Unrelated groups,
/// unrelated entries and group metadata such as `rev` are left alone.
pub fn reconcile(
    document: &mut YamlValue,
    layout: &Layout,
    group_key: &str,
    group_default: &YamlValue,
    entries: &[(&str, YamlValue)],
) -> Result<()> {
    let root = ensure_mapping(document)?;
    let groups = ensure_sequence(root, layout.groups)?;

    let index = match find_index(groups, layout.group_id, layout.group_id, group_key) {
        Ok(index) => index,
        Err(err) if err.is_not_found() => {
            debug!("Adding {} '{}' with its default {}", layout.group_id, group_key, layout.entries);
            groups.push(group_default.clone());
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let group = groups[index].as_mapping_mut().ok_or_else(|| Error::Document {
        message: format!("{} '{}' is not a mapping", layout.group_id, group_key),
    })?;
    let existing_entries = ensure_sequence(group, layout.entries)?;

    for (entry_id, entry_default) in entries {
        let desired = entry_default.as_mapping().ok_or_else(|| Error::Document {
            message: format!("default for {} '{}' is not a mapping", layout.entry_id, entry_id),
        })?;
        match find_index(existing_entries, layout.entry_id, layout.entry_id, entry_id) {
            Ok(entry_index) => {
                debug!("Merging defaults into {} '{}' of '{}'", layout.entry_id, entry_id, group_key);
                let existing = existing_entries[entry_index]
                    .as_mapping_mut()
                    .ok_or_else(|| Error::Document {
                        message: format!("{} '{}' is not a mapping", layout.entry_id, entry_id),
                    })?;
                deep_merge(existing, desired);
            }
            Err(err) if err.is_not_found() => {
                debug!("Appending {} '{}' to '{}'", layout.entry_id, entry_id, group_key);
                existing_entries.push(entry_default.clone());
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

/// Remove groups from a document.
///
/// For ordinary keys the whole group is dropped. For the layout's local
/// marker only the entries named in `local_entry_ids` are dropped, and the
/// group goes away if that leaves it empty. Missing groups and entries are
/// skipped.
///
/// # Errors
///
/// Returns `Error::InvalidArgument` when the local marker is requested with
/// no entry ids.
pub fn remove(
    document: &mut YamlValue,
    layout: &Layout,
    group_keys: &[&str],
    local_entry_ids: &[&str],
) -> Result<()> {
    for group_key in group_keys {
        if *group_key == layout.local_marker {
            remove_local_entries(document, layout, local_entry_ids)?;
            continue;
        }

        let Some(groups) = existing_groups_mut(document, layout)? else {
            continue;
        };
        match find_index(groups, layout.group_id, layout.group_id, group_key) {
            Ok(index) => {
                debug!("Removing {} '{}'", layout.group_id, group_key);
                groups.remove(index);
            }
            Err(err) if err.is_not_found() => {}
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

fn remove_local_entries(
    document: &mut YamlValue,
    layout: &Layout,
    local_entry_ids: &[&str],
) -> Result<()> {
    if local_entry_ids.is_empty() {
        return Err(Error::InvalidArgument {
            message: format!(
                "Unable to remove {} {} without specifying the {}(s) to remove.",
                layout.local_marker, layout.entries, layout.entry_id
            ),
        });
    }

    let Some(groups) = existing_groups_mut(document, layout)? else {
        return Ok(());
    };
    let index = match find_index(groups, layout.group_id, layout.group_id, layout.local_marker) {
        Ok(index) => index,
        Err(err) if err.is_not_found() => return Ok(()),
        Err(err) => return Err(err),
    };

    let mut removed_any = false;
    if let Some(entries) = groups[index]
        .get_mut(layout.entries)
        .and_then(YamlValue::as_sequence_mut)
    {
        for entry_id in local_entry_ids {
            if let Ok(entry_index) = find_index(entries, layout.entry_id, layout.entry_id, entry_id) {
                debug!("Removing {} {} '{}'", layout.local_marker, layout.entry_id, entry_id);
                entries.remove(entry_index);
                removed_any = true;
            }
        }
        if removed_any && entries.is_empty() {
            debug!("Removing empty {} group", layout.local_marker);
            groups.remove(index);
        }
    }

    Ok(())
}

fn existing_groups_mut<'a>(
    document: &'a mut YamlValue,
    layout: &Layout,
) -> Result<Option<&'a mut Vec<YamlValue>>> {
    match document.get_mut(layout.groups) {
        None | Some(YamlValue::Null) => Ok(None),
        Some(YamlValue::Sequence(groups)) => Ok(Some(groups)),
        Some(other) => Err(Error::Document {
            message: format!(
                "expected '{}' to be a sequence, found {}",
                layout.groups,
                get_yaml_type_name(other)
            ),
        }),
    }
}

/// Overwrite one field of an entry inside a group.
///
/// # Errors
///
/// Returns `Error::NotFound` when the group or the entry does not exist.
pub fn set_entry_field(
    document: &mut YamlValue,
    layout: &Layout,
    group_key: &str,
    entry_key: &str,
    field: &str,
    value: YamlValue,
) -> Result<()> {
    let group_index = locate(document, layout, group_key)?;
    let group = &mut document[layout.groups][group_index];
    let entry_index = locate_entry(group, layout, entry_key)?;
    let entry = group[layout.entries][entry_index]
        .as_mapping_mut()
        .ok_or_else(|| Error::Document {
            message: format!("{} '{}' is not a mapping", layout.entry_id, entry_key),
        })?;
    entry.insert(YamlValue::String(field.to_string()), value);
    Ok(())
}

/// Set a group-level field, appending `group_default` when the group is
/// missing.
pub fn update_group_field(
    document: &mut YamlValue,
    layout: &Layout,
    group_key: &str,
    group_default: &YamlValue,
    field: &str,
    value: YamlValue,
) -> Result<()> {
    let root = ensure_mapping(document)?;
    let groups = ensure_sequence(root, layout.groups)?;
    match find_index(groups, layout.group_id, layout.group_id, group_key) {
        Ok(index) => {
            let group = groups[index].as_mapping_mut().ok_or_else(|| Error::Document {
                message: format!("{} '{}' is not a mapping", layout.group_id, group_key),
            })?;
            group.insert(YamlValue::String(field.to_string()), value);
        }
        Err(err) if err.is_not_found() => groups.push(group_default.clone()),
        Err(err) => return Err(err),
    }
    Ok(())
}

fn key_name(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        _ => format!("{:?}", key),
    }
}

/// Get a human-readable type name for a YAML value
///
/// Used for logging and error messages to describe the type of a value.
pub fn get_yaml_type_name(value: &YamlValue) -> &'static str {
    match value {
        YamlValue::Null => "Null",
        YamlValue::Bool(_) => "Bool",
        YamlValue::Number(_) => "Number",
        YamlValue::String(_) => "String",
        YamlValue::Sequence(_) => "Sequence",
        YamlValue::Mapping(_) => "Mapping",
        YamlValue::Tagged(_) => "Tagged",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: Layout = Layout::PRE_COMMIT;

    fn yaml(text: &str) -> YamlValue {
        serde_yaml::from_str(text).unwrap()
    }

    fn mapping(text: &str) -> Mapping {
        yaml(text).as_mapping().unwrap().clone()
    }

    fn hooks_of<'a>(document: &'a YamlValue, repo: &str) -> &'a Vec<YamlValue> {
        find_group(document, &LAYOUT, repo)
            .and_then(|group| group.get("hooks"))
            .and_then(YamlValue::as_sequence)
            .unwrap()
    }

    mod locate_tests {
        use super::*;

        #[test]
        fn test_find_index_returns_zero_for_first_record() {
            let records = yaml("[{id: a}, {id: b}]");
            let index = find_index(records.as_sequence().unwrap(), "id", "id", "a").unwrap();
            assert_eq!(index, 0);
        }

        #[test]
        fn test_find_index_returns_first_match() {
            let records = yaml("[{id: a}, {id: b}, {id: b}]");
            let index = find_index(records.as_sequence().unwrap(), "id", "id", "b").unwrap();
            assert_eq!(index, 1);
        }

        #[test]
        fn test_find_index_not_found() {
            let records = yaml("[{id: a}, plain, {id: 3}]");
            let err = find_index(records.as_sequence().unwrap(), "id", "id", "b").unwrap_err();
            assert!(err.is_not_found());
        }

        #[test]
        fn test_locate_group() {
            let document = yaml("repos: [{repo: one}, {repo: two}]");
            assert_eq!(locate(&document, &LAYOUT, "two").unwrap(), 1);
        }

        #[test]
        fn test_locate_in_empty_document() {
            assert!(locate(&yaml("{}"), &LAYOUT, "one").unwrap_err().is_not_found());
            assert!(locate(&YamlValue::Null, &LAYOUT, "one").unwrap_err().is_not_found());
        }

        #[test]
        fn test_locate_entry_reports_group() {
            let group = yaml("{repo: local, hooks: [{id: fake}]}");
            assert_eq!(locate_entry(&group, &LAYOUT, "fake").unwrap(), 0);
            let err = locate_entry(&group, &LAYOUT, "pylint").unwrap_err();
            assert!(err.to_string().contains("repo 'local'"));
        }
    }

    mod deep_merge_tests {
        use super::*;

        #[test]
        fn test_scalars_overwrite() {
            let mut existing = mapping("{id: pylint, entry: ensure_venv.sh}");
            deep_merge(&mut existing, &mapping("{entry: scripts/ensure_venv.sh}"));
            assert_eq!(existing, mapping("{id: pylint, entry: scripts/ensure_venv.sh}"));
        }

        #[test]
        fn test_lists_union_in_existing_order() {
            let mut existing = mapping("{args: [b, c]}");
            deep_merge(&mut existing, &mapping("{args: [a, b]}"));
            assert_eq!(existing, mapping("{args: [b, c, a]}"));
        }

        #[test]
        fn test_unrelated_fields_preserved() {
            let mut existing = mapping("{id: pylint, exclude: ^static/}");
            deep_merge(&mut existing, &mapping("{id: pylint, types: [python]}"));
            assert_eq!(existing["exclude"], YamlValue::String("^static/".to_string()));
            assert_eq!(existing.len(), 3);
        }

        #[test]
        fn test_nested_mappings_merge() {
            let mut existing = mapping("{outer: {keep: 1, change: 1}}");
            deep_merge(&mut existing, &mapping("{outer: {change: 2, add: [x]}}"));
            assert_eq!(existing, mapping("{outer: {keep: 1, change: 2, add: [x]}}"));
        }

        #[test]
        fn test_missing_nested_mapping_created() {
            let mut existing = Mapping::new();
            deep_merge(&mut existing, &mapping("{outer: {inner: true}}"));
            assert_eq!(existing, mapping("{outer: {inner: true}}"));
        }

        #[test]
        fn test_non_list_replaced_by_list() {
            let mut existing = mapping("{args: --flag}");
            deep_merge(&mut existing, &mapping("{args: [--other]}"));
            assert_eq!(existing, mapping("{args: [--other]}"));
        }

        #[test]
        fn test_non_mapping_replaced_by_mapping() {
            let mut existing = mapping("{options: none}");
            deep_merge(&mut existing, &mapping("{options: {a: 1}}"));
            assert_eq!(existing, mapping("{options: {a: 1}}"));
        }

        #[test]
        fn test_list_items_compared_by_value() {
            let mut existing = mapping("{items: [{name: a, depth: 2}]}");
            deep_merge(&mut existing, &mapping("{items: [{name: a, depth: 2}, {name: b}]}"));
            assert_eq!(existing, mapping("{items: [{name: a, depth: 2}, {name: b}]}"));
        }

        #[test]
        fn test_merge_is_idempotent() {
            let desired = mapping("{id: pylint, args: [pylint, -v], types: [python]}");
            let mut once = mapping("{id: pylint, args: [--ignore=tests]}");
            deep_merge(&mut once, &desired);
            let mut twice = once.clone();
            deep_merge(&mut twice, &desired);
            assert_eq!(once, twice);
        }
    }

    mod reconcile_tests {
        use super::*;

        const URL: &str = "https://example/repo";

        fn default_group() -> YamlValue {
            yaml("{repo: 'https://example/repo', rev: v1, hooks: [{id: x}]}")
        }

        #[test]
        fn test_reconcile_into_empty_document() {
            let mut document = yaml("{}");
            reconcile(&mut document, &LAYOUT, URL, &default_group(), &[]).unwrap();

            let groups = document["repos"].as_sequence().unwrap();
            assert_eq!(groups.len(), 1);
            assert_eq!(hooks_of(&document, URL), &vec![yaml("{id: x}")]);
        }

        #[test]
        fn test_reconcile_into_null_document() {
            let mut document = YamlValue::Null;
            reconcile(&mut document, &LAYOUT, URL, &default_group(), &[]).unwrap();
            assert_eq!(document["repos"].as_sequence().unwrap().len(), 1);
        }

        #[test]
        fn test_reconcile_twice_is_identical() {
            let mut document = yaml("{}");
            reconcile(&mut document, &LAYOUT, URL, &default_group(), &[]).unwrap();
            let first = document.clone();
            reconcile(&mut document, &LAYOUT, URL, &default_group(), &[]).unwrap();
            assert_eq!(document, first);
        }

        #[test]
        fn test_missing_group_inserts_full_default() {
            let default = yaml("{repo: 'https://example/repo', hooks: [{id: a}, {id: b}, {id: c}]}");
            let mut document = yaml("repos: [{repo: other, hooks: []}]");
            // Only one child is named, yet the whole default lands.
            reconcile(&mut document, &LAYOUT, URL, &default, &[("a", yaml("{id: a}"))]).unwrap();

            assert_eq!(hooks_of(&document, URL).len(), 3);
            assert_eq!(document["repos"][0]["repo"], yaml("other"));
        }

        #[test]
        fn test_existing_group_keeps_metadata_and_merges_children() {
            let mut document = yaml(
                r#"
repos:
  - repo: https://example/repo
    rev: v9
    hooks:
      - id: x
        args: [--keep]
      - id: manual
"#,
            );
            let children = [
                ("x", yaml("{id: x, args: [--new]}")),
                ("y", yaml("{id: y}")),
            ];
            reconcile(&mut document, &LAYOUT, URL, &default_group(), &children).unwrap();

            let group = find_group(&document, &LAYOUT, URL).unwrap();
            assert_eq!(group["rev"], yaml("v9"));
            let hooks = hooks_of(&document, URL);
            assert_eq!(hooks.len(), 3);
            assert_eq!(hooks[0], yaml("{id: x, args: [--keep, --new]}"));
            assert_eq!(hooks[1], yaml("{id: manual}"));
            assert_eq!(hooks[2], yaml("{id: y}"));
        }

        #[test]
        fn test_existing_group_without_hooks_gets_hooks() {
            let mut document = yaml("repos: [{repo: 'https://example/repo'}]");
            reconcile(&mut document, &LAYOUT, URL, &default_group(), &[("x", yaml("{id: x}"))]).unwrap();
            assert_eq!(hooks_of(&document, URL), &vec![yaml("{id: x}")]);
        }

        #[test]
        fn test_repos_with_wrong_type_is_an_error() {
            let mut document = yaml("repos: not-a-list");
            let err = reconcile(&mut document, &LAYOUT, URL, &default_group(), &[]).unwrap_err();
            assert!(matches!(err, Error::Document { .. }));
        }

        #[test]
        fn test_inserted_default_is_not_aliased() {
            let default = default_group();
            let mut document = yaml("{}");
            reconcile(&mut document, &LAYOUT, URL, &default, &[]).unwrap();
            set_entry_field(&mut document, &LAYOUT, URL, "x", "name", yaml("changed")).unwrap();
            assert_eq!(default, default_group());
        }
    }

    mod remove_tests {
        use super::*;

        fn local_document() -> YamlValue {
            yaml(
                r#"
repos:
  - repo: https://example/repo
    hooks: [{id: x}]
  - repo: local
    hooks:
      - id: fake
        entry: fake.sh
      - id: pylint
        entry: ensure_venv.sh
"#,
            )
        }

        #[test]
        fn test_remove_group() {
            let mut document = local_document();
            remove(&mut document, &LAYOUT, &["https://example/repo"], &[]).unwrap();
            assert!(find_group(&document, &LAYOUT, "https://example/repo").is_none());
            assert!(find_group(&document, &LAYOUT, "local").is_some());
        }

        #[test]
        fn test_remove_missing_group_is_noop() {
            let mut document = local_document();
            let before = document.clone();
            remove(&mut document, &LAYOUT, &["https://missing"], &[]).unwrap();
            assert_eq!(document, before);

            let mut empty = yaml("{}");
            remove(&mut empty, &LAYOUT, &["https://missing"], &[]).unwrap();
            assert_eq!(empty, yaml("{}"));
        }

        #[test]
        fn test_remove_some_local_entries() {
            let mut document = local_document();
            remove(&mut document, &LAYOUT, &["local"], &["pylint"]).unwrap();
            let hooks = hooks_of(&document, "local");
            assert_eq!(hooks.len(), 1);
            assert_eq!(hooks[0]["id"], yaml("fake"));
            assert_eq!(hooks[0]["entry"], yaml("fake.sh"));
        }

        #[test]
        fn test_remove_all_local_entries_prunes_group() {
            let mut document = local_document();
            remove(&mut document, &LAYOUT, &["local"], &["pylint", "fake", "absent"]).unwrap();
            assert!(find_group(&document, &LAYOUT, "local").is_none());
            assert_eq!(document["repos"].as_sequence().unwrap().len(), 1);
        }

        #[test]
        fn test_remove_local_without_ids_is_invalid() {
            let mut document = local_document();
            let err = remove(&mut document, &LAYOUT, &["local"], &[]).unwrap_err();
            assert!(matches!(err, Error::InvalidArgument { .. }));
        }

        #[test]
        fn test_remove_local_when_absent_is_noop() {
            let mut document = yaml("repos: [{repo: other, hooks: []}]");
            let before = document.clone();
            remove(&mut document, &LAYOUT, &["local"], &["pylint"]).unwrap();
            assert_eq!(document, before);
        }

        #[test]
        fn test_remove_after_reconcile_is_symmetric() {
            let default = yaml("{repo: 'https://example/repo', hooks: [{id: x}]}");
            let mut document = yaml("repos: [{repo: keep, hooks: []}]");
            reconcile(&mut document, &LAYOUT, "https://example/repo", &default, &[]).unwrap();
            remove(&mut document, &LAYOUT, &["https://example/repo"], &[]).unwrap();
            assert_eq!(document, yaml("repos: [{repo: keep, hooks: []}]"));
        }
    }

    mod field_update_tests {
        use super::*;

        #[test]
        fn test_set_entry_field() {
            let mut document = yaml("repos: [{repo: local, hooks: [{id: pylint, entry: a.sh}]}]");
            set_entry_field(&mut document, &LAYOUT, "local", "pylint", "entry", yaml("b.sh")).unwrap();
            assert_eq!(document["repos"][0]["hooks"][0]["entry"], yaml("b.sh"));
        }

        #[test]
        fn test_set_entry_field_missing_entry() {
            let mut document = yaml("repos: [{repo: local, hooks: []}]");
            let err = set_entry_field(&mut document, &LAYOUT, "local", "pylint", "entry", yaml("b.sh"))
                .unwrap_err();
            assert!(err.is_not_found());
        }

        #[test]
        fn test_update_group_field_existing() {
            let mut document = yaml("repos: [{repo: p, rev: v3.0.0-alpha.4, hooks: [{id: prettier}]}]");
            let default = yaml("{repo: p, rev: v3.1.0, hooks: [{id: prettier}]}");
            update_group_field(&mut document, &LAYOUT, "p", &default, "rev", yaml("v3.1.0")).unwrap();
            assert_eq!(document["repos"][0]["rev"], yaml("v3.1.0"));
            assert_eq!(document["repos"].as_sequence().unwrap().len(), 1);
        }

        #[test]
        fn test_update_group_field_missing_appends_default() {
            let mut document = yaml("{}");
            let default = yaml("{repo: p, rev: v3.1.0, hooks: [{id: prettier}]}");
            update_group_field(&mut document, &LAYOUT, "p", &default, "rev", yaml("v3.1.0")).unwrap();
            assert_eq!(document["repos"][0], default);
        }
    }

    #[test]
    fn test_get_yaml_type_name() {
        assert_eq!(get_yaml_type_name(&YamlValue::Null), "Null");
        assert_eq!(get_yaml_type_name(&yaml("[1]")), "Sequence");
        assert_eq!(get_yaml_type_name(&yaml("{a: 1}")), "Mapping");
        assert_eq!(get_yaml_type_name(&yaml("text")), "String");
    }
}
