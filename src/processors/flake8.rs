//! `.flake8` processing.

use crate::defaults::flake8::{EXCLUDE_KEY, MAX_LINE_LENGTH_KEY, SECTION};
use crate::defaults::REPO_NAME;
use crate::merge::append_csv_item;
use crate::merge::ini::IniDocument;

/// Set the line length and exclude the vendored scripts.
pub fn process(document: &mut IniDocument, line_length: u32) {
    let section = document.section_mut(SECTION);
    section.set(MAX_LINE_LENGTH_KEY, line_length.to_string());

    let exclude = section.get(EXCLUDE_KEY).unwrap_or_default();
    let exclude = append_csv_item(exclude, REPO_NAME);
    section.set(EXCLUDE_KEY, exclude);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::flake8::SAMPLE;

    #[test]
    fn test_process_empty_config() {
        let mut document = IniDocument::new();
        process(&mut document, 110);
        assert_eq!(
            document.serialize(),
            "[flake8]\nmax-line-length = 110\nexclude = utility-repo-scripts\n"
        );
    }

    #[test]
    fn test_process_sample_is_stable() {
        let mut document = IniDocument::parse(SAMPLE).unwrap();
        process(&mut document, 125);
        assert_eq!(document.serialize(), SAMPLE);
    }

    #[test]
    fn test_process_appends_to_existing_exclude() {
        let mut document = IniDocument::parse("[flake8]\nexclude = .git,__pycache__\nselect = E,W\n").unwrap();
        process(&mut document, 100);
        let section = document.section("flake8").unwrap();
        assert_eq!(section.get("exclude"), Some(".git,__pycache__,utility-repo-scripts"));
        assert_eq!(section.get("select"), Some("E,W"));
        assert_eq!(section.get("max-line-length"), Some("100"));
    }

    #[test]
    fn test_process_existing_path_form_is_not_repeated() {
        let mut document = IniDocument::parse("[flake8]\nexclude = .git,./utility-repo-scripts\n").unwrap();
        process(&mut document, 125);
        assert_eq!(
            document.section("flake8").unwrap().get("exclude"),
            Some(".git,./utility-repo-scripts")
        );
    }

    #[test]
    fn test_process_multiline_exclude_with_blank_line() {
        let mut document = IniDocument::parse("[flake8]\nexclude =\n    .git,\n\n    build\n").unwrap();
        process(&mut document, 125);
        assert_eq!(
            document.section("flake8").unwrap().get("exclude"),
            Some(".git,\n\nbuild,utility-repo-scripts")
        );
    }

    #[test]
    fn test_process_keeps_other_sections() {
        let mut document = IniDocument::parse("[isort]\nprofile = black\n").unwrap();
        process(&mut document, 125);
        assert!(document.has_section("isort"));
        assert!(document.has_section("flake8"));
    }
}
