//! Per-tool document updates
//!
//! A processor takes a loaded document and the command's options and
//! updates the document in place. Processors never read or write files, so
//! each one can be tested against an in-memory document.
//!
//! All processors are idempotent: a second run over their own output leaves
//! it unchanged.

pub mod flake8;
pub mod pre_commit;
pub mod prettier;
pub mod pylintrc;
pub mod pyproject;
pub mod tox_ini;
pub mod vscode;
