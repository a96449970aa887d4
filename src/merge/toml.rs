//! TOML table helpers
//!
//! `pyproject.toml` is handled as a `toml::Table` (ordered, thanks to the
//! `preserve_order` feature). Processors reach into `[tool.<name>]` tables
//! through [`ensure_table`] and drop whole tables with [`remove_table`].

use log::{debug, warn};
use toml::{Table, Value as TomlValue};

/// Borrow the table stored under `key`, creating it when absent.
///
/// A value of another type under `key` is replaced with an empty table.
pub fn ensure_table<'a>(table: &'a mut Table, key: &str) -> &'a mut Table {
    let slot = table
        .entry(key.to_string())
        .or_insert_with(|| TomlValue::Table(Table::new()));
    if !slot.is_table() {
        warn!(
            "Type mismatch at '{}': replacing {} with Table",
            key,
            get_toml_type_name(slot)
        );
        *slot = TomlValue::Table(Table::new());
    }
    match slot {
        TomlValue::Table(inner) => inner,
        _ => unreachable!("slot was just set to a table"),
    }
}

/// Remove the value stored under `key`, returning whether anything was
/// removed.
pub fn remove_table(table: &mut Table, key: &str) -> bool {
    let removed = table.remove(key).is_some();
    if removed {
        debug!("Removed TOML table '{}'", key);
    }
    removed
}

/// Get a human-readable type name for a TOML value
pub fn get_toml_type_name(value: &TomlValue) -> &'static str {
    match value {
        TomlValue::String(_) => "String",
        TomlValue::Integer(_) => "Integer",
        TomlValue::Float(_) => "Float",
        TomlValue::Boolean(_) => "Boolean",
        TomlValue::Datetime(_) => "Datetime",
        TomlValue::Array(_) => "Array",
        TomlValue::Table(_) => "Table",
    }
}
