//! # Output Configuration
//!
//! Status lines printed after a command finishes. Colors and emojis follow
//! the terminal and the user's preferences:
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! ## Usage
//!
//! ```
//! use repo_setup::output::{status_line, OutputConfig, Status};
//!
//! let config = OutputConfig::from_env_and_flag("never");
//! assert_eq!(status_line(&config, Status::Written, ".flake8"), "[OK] Wrote .flake8");
//! ```

use std::env;

use console::style;

/// Output configuration for controlling colors and emojis.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether colors and emojis should be used in output.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from environment and CLI flag.
    ///
    /// `color_flag` is the value of `--color`: `always` forces colors on
    /// (overriding `NO_COLOR`), `never` forces them off, anything else
    /// detects support from the environment.
    pub fn from_env_and_flag(color_flag: &str) -> Self {
        let use_color = match color_flag.to_lowercase().as_str() {
            "always" => true,
            "never" => false,
            _ => Self::detect_color_support(),
        };

        Self { use_color }
    }

    fn detect_color_support() -> bool {
        // The presence of NO_COLOR (even if empty) disables colors
        if env::var_os("NO_COLOR").is_some() {
            return false;
        }

        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            return false;
        }

        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
            return true;
        }

        if env::var("TERM").is_ok_and(|v| v == "dumb") {
            return false;
        }

        console::Term::stdout().features().colors_supported()
    }

    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::from_env_and_flag("auto")
    }
}

/// Returns the emoji when colors are enabled, the plain text otherwise.
pub fn emoji<'a>(config: &OutputConfig, emoji_str: &'a str, plain: &'a str) -> &'a str {
    if config.use_color {
        emoji_str
    } else {
        plain
    }
}

/// What happened to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Written,
    Deleted,
    /// Test mode: the file was rendered but not written.
    Rendered,
}

/// One line describing what happened to `path`.
pub fn status_line(config: &OutputConfig, status: Status, path: &str) -> String {
    let (marker, verb) = match status {
        Status::Written => (emoji(config, "✅", "[OK]"), "Wrote"),
        Status::Deleted => (emoji(config, "🗑️", "[DEL]"), "Deleted"),
        Status::Rendered => (emoji(config, "🔎", "[TEST]"), "Rendered"),
    };

    if config.use_color {
        let verb = match status {
            Status::Written => style(verb).green(),
            Status::Deleted => style(verb).yellow(),
            Status::Rendered => style(verb).cyan(),
        };
        format!("{} {} {}", marker, verb.force_styling(true), style(path).bold().force_styling(true))
    } else {
        format!("{} {} {}", marker, verb, path)
    }
}
