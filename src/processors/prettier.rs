//! `.prettierrc` and the prettier pre-commit pin.

use log::debug;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

use crate::defaults::pre_commit::{PRETTIER, PRETTIER_REV};
use crate::defaults::prettier::PRINT_WIDTH_KEY;
use crate::error::Result;
use crate::merge::json::as_object_mut;
use crate::merge::yaml::{update_group_field, Layout};

/// Set `printWidth` to the line length.
pub fn process_prettierrc(document: &mut JsonValue, line_length: u32) -> Result<()> {
    let settings = as_object_mut(document)?;
    settings.insert(PRINT_WIDTH_KEY.to_string(), JsonValue::from(line_length));
    Ok(())
}

/// Pin the prettier repo's `rev`, adding the repo when it is missing.
pub fn fix_prettier_rev(document: &mut YamlValue) -> Result<()> {
    debug!("Pinning prettier pre-commit hook to {}", PRETTIER_REV);
    update_group_field(
        document,
        &Layout::PRE_COMMIT,
        PRETTIER.repo,
        &PRETTIER.to_value()?,
        "rev",
        YamlValue::from(PRETTIER_REV),
    )
}
