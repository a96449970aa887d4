//! `.pylintrc` keys and sample.

pub const FILENAME: &str = ".pylintrc";
pub const MASTER_SECTION: &str = "MASTER";
pub const IGNORE_KEY: &str = "ignore";
pub const FORMAT_SECTION: &str = "FORMAT";
pub const MAX_LINE_LENGTH_KEY: &str = "max-line-length";

pub const SAMPLE: &str = "[MASTER]
# Files or directories to be skipped. They should be base names, not paths.
ignore=CVS,utility-repo-scripts

# Use multiple processes to speed up Pylint.
jobs=1

[MESSAGES CONTROL]
disable=raw-checker-failed,
        locally-disabled,
        file-ignored,
        suppressed-message

[FORMAT]
max-line-length=125
indent-string='    '
";
