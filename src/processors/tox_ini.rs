//! `tox.ini` `[pycodestyle]` processing.

use log::info;

use crate::defaults::tox_ini::*;
use crate::defaults::REPO_NAME;
use crate::merge::append_csv_item;
use crate::merge::ini::IniDocument;

/// Reconcile the `[pycodestyle]` section.
///
/// When pycodestyle is disabled the section is removed; other sections are
/// left alone either way.
pub fn process(document: &mut IniDocument, pycodestyle_enabled: bool, line_length: u32) {
    if !pycodestyle_enabled {
        if document.remove_section(PYCODESTYLE_SECTION) {
            info!("pycodestyle disabled, removed [{}]", PYCODESTYLE_SECTION);
        }
        return;
    }

    let section = document.section_mut(PYCODESTYLE_SECTION);
    section.set_default(COUNT_KEY, COUNT_VALUE);

    let exclude = match section.get(EXCLUDE_KEY).map(str::trim) {
        None | Some("") => EXCLUDE_VALUE.to_string(),
        Some(existing) => append_csv_item(existing, REPO_NAME),
    };
    section.set(EXCLUDE_KEY, exclude);

    section.set(INDENT_SIZE_KEY, INDENT_SIZE_VALUE);
    section.set(MAX_DOC_LENGTH_KEY, line_length.to_string());
    section.set(MAX_LINE_LENGTH_KEY, line_length.to_string());
    section.set_default(STATISTICS_KEY, STATISTICS_VALUE);
}
