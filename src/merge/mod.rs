//! Document update primitives for the supported file formats
//!
//! Each submodule works on the in-memory value type of its format and offers
//! the "ensure this container exists" helpers the processors are built from.
//! None of them touch the filesystem; loading and rendering live in
//! [`crate::loader`].
//!
//! ## Formats
//!
//! - YAML (yaml.rs) - hook-list reconciliation for `.pre-commit-config.yaml`
//! - JSON (json.rs) - nested objects for `.prettierrc` and VS Code settings
//! - TOML (toml.rs) - `[tool.*]` tables in `pyproject.toml`
//! - INI (ini.rs) - an order-preserving section model for `.flake8`,
//!   `.pylintrc` and `tox.ini`

pub mod ini;
pub mod json;
pub mod toml;
pub mod yaml;

/// Append `item` to a comma-separated list unless the list already mentions
/// it.
///
/// Any occurrence counts, so `./vendor` or `vendor/` keeps `vendor` from
/// being added again. An empty list becomes just `item`.
///
/// ```
/// use repo_setup::merge::append_csv_item;
///
/// assert_eq!(append_csv_item(".git,__pycache__", "vendor"), ".git,__pycache__,vendor");
/// assert_eq!(append_csv_item(".git, vendor", "vendor"), ".git, vendor");
/// assert_eq!(append_csv_item(".git,./vendor", "vendor"), ".git,./vendor");
/// assert_eq!(append_csv_item("", "vendor"), "vendor");
/// ```
pub fn append_csv_item(list: &str, item: &str) -> String {
    let trimmed = list.trim();
    if trimmed.is_empty() {
        return item.to_string();
    }
    if trimmed.contains(item) {
        return trimmed.to_string();
    }
    format!("{},{}", trimmed.trim_end_matches(','), item)
}

pub(crate) fn ensure_trailing_newline(mut content: String) -> String {
    if !content.ends_with('\n') {
        content.push('\n');
    }
    content
}
