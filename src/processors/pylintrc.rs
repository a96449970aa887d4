//! `.pylintrc` processing.

use crate::defaults::pylintrc::{FORMAT_SECTION, IGNORE_KEY, MASTER_SECTION, MAX_LINE_LENGTH_KEY};
use crate::defaults::REPO_NAME;
use crate::merge::append_csv_item;
use crate::merge::ini::IniDocument;

/// Ignore the vendored scripts and set the line length.
pub fn process(document: &mut IniDocument, line_length: u32) {
    let master = document.section_mut(MASTER_SECTION);
    let ignore = master.get(IGNORE_KEY).unwrap_or_default();
    let ignore = append_ignore(ignore);
    master.set(IGNORE_KEY, ignore);

    document
        .section_mut(FORMAT_SECTION)
        .set(MAX_LINE_LENGTH_KEY, line_length.to_string());
}

// Multi-line values keep one item per line, each line ending in a comma.
// Blank lines stay where they are so comments inside the value keep their
// place.
fn append_ignore(value: &str) -> String {
    if !value.contains('\n') {
        return append_csv_item(value, REPO_NAME);
    }
    if value.contains(REPO_NAME) {
        return value.to_string();
    }

    let mut lines: Vec<String> = value
        .trim_end()
        .split('\n')
        .map(|line| line.trim().to_string())
        .collect();
    for line in lines.iter_mut().filter(|line| !line.is_empty()) {
        if !line.ends_with(',') {
            line.push(',');
        }
    }
    lines.push(REPO_NAME.to_string());
    lines.join("\n")
}
