//! Order-preserving INI documents
//!
//! `.flake8`, `.pylintrc` and `tox.ini` are INI files that people edit by
//! hand, so the model keeps what a round trip would otherwise lose: section
//! order, key order, comment lines and multi-line values.
//!
//! ## Features
//!
//! - Section headers: `[section_name]`
//! - Key-value pairs with `=` or `:` as delimiter
//! - Comments: lines starting with `#` or `;` are kept in place, including
//!   comments between the lines of a multi-line value and after a section
//!   header (`[flake8] ; main`)
//! - Continuation lines: indented lines extend the previous value, stored as
//!   `\n`-separated lines (so `ignore=\n    a,\n    b` reads as `"\na,\nb"`).
//!   Blank lines followed by another continuation line stay in the value.
//! - Root-level entries (entries before any section header)
//!
//! ## Example
//!
//! ```
//! use repo_setup::merge::ini::IniDocument;
//!
//! let mut document = IniDocument::parse("[flake8]\nexclude = .git\n").unwrap();
//! document.section_mut("flake8").set("max-line-length", "125");
//! assert_eq!(
//!     document.serialize(),
//!     "[flake8]\nexclude = .git\nmax-line-length = 125\n"
//! );
//! ```

use log::debug;

use crate::error::{Error, Result};

const CONTINUATION_INDENT: &str = "    ";

/// Represents a key-value entry in an INI file
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IniEntry {
    pub key: String,
    /// The value with continuation lines joined by `\n`
    pub value: String,
    /// Comment lines inside the value, each written before the value line
    /// with that index (or after the value when past its end).
    comments: Vec<(usize, String)>,
}

impl IniEntry {
    fn new(key: &str, value: String) -> Self {
        Self {
            key: key.to_string(),
            value,
            comments: Vec::new(),
        }
    }

    fn line_count(&self) -> usize {
        self.value.split('\n').count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum IniItem {
    Entry(IniEntry),
    Comment(String),
}

/// A section: a name (empty for root-level entries) and its items in file
/// order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IniSection {
    name: String,
    /// Trailing comment on the header line.
    header_comment: Option<String>,
    items: Vec<IniItem>,
}

impl IniSection {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            header_comment: None,
            items: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set a value, keeping the key's position when it already exists.
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        for item in &mut self.items {
            if let IniItem::Entry(entry) = item {
                if entry.key == key {
                    entry.value = value;
                    return;
                }
            }
        }
        self.items.push(IniItem::Entry(IniEntry::new(key, value)));
    }

    /// Set a value only when the key is absent.
    pub fn set_default(&mut self, key: &str, value: impl Into<String>) {
        if !self.contains_key(key) {
            self.set(key, value);
        }
    }

    /// Remove a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self
            .items
            .iter()
            .position(|item| matches!(item, IniItem::Entry(entry) if entry.key == key))?;
        match self.items.remove(index) {
            IniItem::Entry(entry) => Some(entry.value),
            IniItem::Comment(_) => None,
        }
    }

    fn last_entry_mut(&mut self) -> Option<&mut IniEntry> {
        self.items.iter_mut().rev().find_map(|item| match item {
            IniItem::Entry(entry) => Some(entry),
            IniItem::Comment(_) => None,
        })
    }

    // Lines held back while an entry may still continue belong to the
    // section, not the value, once something other than a continuation
    // follows them.
    fn flush_pending(&mut self, pending: &mut Vec<PendingLine>) {
        for line in pending.drain(..) {
            if let PendingLine::Comment(text) = line {
                self.items.push(IniItem::Comment(text.trim().to_string()));
            }
        }
    }

    /// Iterate over the key-value entries, skipping comments.
    pub fn entries(&self) -> impl Iterator<Item = &IniEntry> {
        self.items.iter().filter_map(|item| match item {
            IniItem::Entry(entry) => Some(entry),
            IniItem::Comment(_) => None,
        })
    }
}

/// A blank or comment line seen after an entry, not yet known to be inside
/// its value.
#[derive(Debug)]
enum PendingLine {
    Blank,
    Comment(String),
}

/// A parsed INI file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IniDocument {
    sections: Vec<IniSection>,
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse INI content.
    ///
    /// # Errors
    ///
    /// Returns `Error::IniParse` for a line that is neither a header, a
    /// comment, a continuation nor a `key = value` pair.
    pub fn parse(content: &str) -> Result<Self> {
        let mut sections = vec![IniSection::new("")];
        // Whether the last entry may still take continuation lines.
        let mut open = false;
        let mut pending = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line_number = index + 1;
            let trimmed = line.trim();
            let current = sections.last_mut().ok_or_else(|| Error::IniParse {
                line: line_number,
                message: "no section to add to".to_string(),
            })?;

            if trimmed.is_empty() {
                if open {
                    pending.push(PendingLine::Blank);
                }
                continue;
            }

            if trimmed.starts_with('#') || trimmed.starts_with(';') {
                if open {
                    pending.push(PendingLine::Comment(line.trim_end().to_string()));
                } else {
                    current.items.push(IniItem::Comment(trimmed.to_string()));
                }
                continue;
            }

            let indented = line.starts_with(' ') || line.starts_with('\t');
            if indented && open {
                if let Some(entry) = current.last_entry_mut() {
                    for held in pending.drain(..) {
                        match held {
                            PendingLine::Blank => entry.value.push('\n'),
                            PendingLine::Comment(text) => {
                                let position = entry.line_count();
                                entry.comments.push((position, text));
                            }
                        }
                    }
                    entry.value.push('\n');
                    entry.value.push_str(trimmed);
                    continue;
                }
            }

            current.flush_pending(&mut pending);
            open = false;

            if let Some(section) = parse_header(trimmed) {
                sections.push(section);
                continue;
            }

            let Some(pos) = trimmed.find(['=', ':']) else {
                return Err(Error::IniParse {
                    line: line_number,
                    message: format!("expected '=' or ':' in '{}'", trimmed),
                });
            };
            let key = trimmed[..pos].trim();
            if key.is_empty() {
                return Err(Error::IniParse {
                    line: line_number,
                    message: "empty key".to_string(),
                });
            }
            current
                .items
                .push(IniItem::Entry(IniEntry::new(key, trimmed[pos + 1..].trim().to_string())));
            open = true;
        }

        if let Some(last) = sections.last_mut() {
            last.flush_pending(&mut pending);
        }

        // Drop the implicit root section when nothing was placed in it.
        if sections.first().is_some_and(|root| root.items.is_empty()) {
            sections.remove(0);
        }

        Ok(Self { sections })
    }

    /// Serialize back to INI text.
    ///
    /// Entries are written as `key = value`; continuation lines are indented
    /// by four spaces. Sections are separated by one blank line.
    pub fn serialize(&self) -> String {
        let mut output = String::new();

        for (index, section) in self.sections.iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            if !section.name.is_empty() {
                output.push('[');
                output.push_str(&section.name);
                output.push(']');
                if let Some(comment) = &section.header_comment {
                    output.push(' ');
                    output.push_str(comment);
                }
                output.push('\n');
            }

            for item in &section.items {
                match item {
                    IniItem::Comment(text) => {
                        output.push_str(text);
                        output.push('\n');
                    }
                    IniItem::Entry(entry) => write_entry(&mut output, entry),
                }
            }
        }

        output
    }

    pub fn section(&self, name: &str) -> Option<&IniSection> {
        self.sections.iter().find(|section| section.name == name)
    }

    pub fn has_section(&self, name: &str) -> bool {
        self.section(name).is_some()
    }

    /// Borrow a section, appending an empty one when it does not exist.
    pub fn section_mut(&mut self, name: &str) -> &mut IniSection {
        let index = match self.sections.iter().position(|section| section.name == name) {
            Some(index) => index,
            None => {
                debug!("Adding INI section [{}]", name);
                self.sections.push(IniSection::new(name));
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    /// Remove a section, returning whether it existed.
    pub fn remove_section(&mut self, name: &str) -> bool {
        let before = self.sections.len();
        self.sections.retain(|section| section.name != name);
        before != self.sections.len()
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|section| section.name.as_str())
    }
}

// `[name]` optionally followed by a `#` or `;` comment.
fn parse_header(trimmed: &str) -> Option<IniSection> {
    let inner = trimmed.strip_prefix('[')?;
    let close = inner.find(']')?;
    let rest = inner[close + 1..].trim();
    if !(rest.is_empty() || rest.starts_with('#') || rest.starts_with(';')) {
        return None;
    }

    let mut section = IniSection::new(inner[..close].trim());
    if !rest.is_empty() {
        section.header_comment = Some(rest.to_string());
    }
    Some(section)
}

fn write_entry(output: &mut String, entry: &IniEntry) {
    let lines: Vec<&str> = entry.value.split('\n').collect();
    let comments_at = |output: &mut String, index: usize| {
        for (_, text) in entry.comments.iter().filter(|(position, _)| *position == index) {
            output.push_str(text);
            output.push('\n');
        }
    };

    output.push_str(&entry.key);
    match lines.first() {
        Some(first) if !first.is_empty() => {
            output.push_str(" = ");
            output.push_str(first);
        }
        _ => output.push_str(" ="),
    }
    output.push('\n');

    for (index, line) in lines.iter().enumerate().skip(1) {
        comments_at(output, index);
        if !line.is_empty() {
            output.push_str(CONTINUATION_INDENT);
            output.push_str(line);
        }
        output.push('\n');
    }

    for (_, text) in entry.comments.iter().filter(|(position, _)| *position >= lines.len()) {
        output.push_str(text);
        output.push('\n');
    }
}
