//! `tox.ini` keys, `[pycodestyle]` defaults and sample.

pub const FILENAME: &str = "tox.ini";
pub const PYCODESTYLE_SECTION: &str = "pycodestyle";

pub const COUNT_KEY: &str = "count";
pub const COUNT_VALUE: &str = "False";
pub const EXCLUDE_KEY: &str = "exclude";
/// pycodestyle's own default exclude list plus the vendored scripts.
pub const EXCLUDE_VALUE: &str = ".svn,CVS,.bzr,.hg,.git,__pycache__,.tox,utility-repo-scripts";
pub const INDENT_SIZE_KEY: &str = "indent-size";
pub const INDENT_SIZE_VALUE: &str = "4";
pub const MAX_DOC_LENGTH_KEY: &str = "max-doc-length";
pub const MAX_LINE_LENGTH_KEY: &str = "max-line-length";
pub const STATISTICS_KEY: &str = "statistics";
pub const STATISTICS_VALUE: &str = "True";

pub const SAMPLE: &str = "[pycodestyle]
count = False
exclude = .svn,CVS,.bzr,.hg,.git,__pycache__,.tox,utility-repo-scripts
indent-size = 4
max-doc-length = 125
max-line-length = 125
statistics = True
";
