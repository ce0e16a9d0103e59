//! A reflog viewer for git branches
//!
//! `bosque` locates the `.git` directory governing a starting path, reads the
//! append-only reflog of a single branch (`.git/logs/refs/heads/<branch>`),
//! parses each line into a structured record, and renders the records as a
//! self-contained document.
//!
//! - `areas`: repository discovery and reflog file access
//! - `artifacts`: reflog line parsing, branch names, rendering
//! - `commands`: user-facing command implementations

pub mod areas;
pub mod artifacts;
pub mod commands;

use clap::ValueEnum;

/// Output format for rendered reflog entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogDisplayFormat {
    /// Self-contained HTML document for an external viewer
    #[default]
    Html,
    /// Plain text for terminal display
    Text,
}
