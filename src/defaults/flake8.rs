//! `.flake8` keys and sample.

pub const FILENAME: &str = ".flake8";
pub const SECTION: &str = "flake8";
pub const MAX_LINE_LENGTH_KEY: &str = "max-line-length";
pub const EXCLUDE_KEY: &str = "exclude";

pub const SAMPLE: &str = "[flake8]
exclude = .git,__pycache__,utility-repo-scripts
max-line-length = 125
";
