//! tsci-update - Self-update advisory library for the tsci CLI
//!
//! This library checks the npm registry for a newer published version of a
//! CLI tool, asks the user interactively (with a bounded wait) whether to
//! upgrade, and runs the package manager's global install on confirmation.
//! Nothing here ever terminates the hosting process: failures degrade to
//! "no update performed", optionally with a warning.

pub mod checker;
pub mod cli;
pub mod error;
pub mod installer;
pub mod progress;
pub mod prompt;
pub mod registry;
pub mod version;
