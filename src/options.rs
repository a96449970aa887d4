//! Command-line option values shared by several commands.
//!
//! Free-text options are validated while arguments are parsed, so an invalid
//! value stops the run before any file is loaded.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The Python formatter a project uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PythonFormatter {
    /// No formatter; every formatter's configuration is removed.
    None,
    Autopep8,
    #[default]
    Black,
    Yapf,
}

impl PythonFormatter {
    /// Accepted spellings, in the order shown to users.
    pub const VALID: [&'static str; 4] = ["", "autopep8", "black", "yapf"];

    pub fn as_str(&self) -> &'static str {
        match self {
            PythonFormatter::None => "",
            PythonFormatter::Autopep8 => "autopep8",
            PythonFormatter::Black => "black",
            PythonFormatter::Yapf => "yapf",
        }
    }

    fn valid_list() -> String {
        let quoted: Vec<String> = Self::VALID.iter().map(|name| format!("'{}'", name)).collect();
        format!("[{}]", quoted.join(", "))
    }
}

impl FromStr for PythonFormatter {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" => Ok(PythonFormatter::None),
            "autopep8" => Ok(PythonFormatter::Autopep8),
            "black" => Ok(PythonFormatter::Black),
            "yapf" => Ok(PythonFormatter::Yapf),
            other => Err(Error::InvalidOption {
                option: "python_formatter".to_string(),
                value: other.to_string(),
                valid: Self::valid_list(),
            }),
        }
    }
}

impl fmt::Display for PythonFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a shell-style boolean: `yes/true/t/y/1` or `no/false/f/n/0`, any
/// case.
pub fn parse_bool_flag(value: &str) -> Result<bool, String> {
    match value.to_ascii_lowercase().as_str() {
        "yes" | "true" | "t" | "y" | "1" => Ok(true),
        "no" | "false" | "f" | "n" | "0" => Ok(false),
        _ => Err(format!("Boolean value expected, got '{}'.", value)),
    }
}
