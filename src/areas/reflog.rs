//! Reflog file access
//!
//! Git records every update of a branch tip in an append-only log under
//! `.git/logs/refs/heads/<branch>`, one line per update:
//!
//! ```text
//! <old-sha> <new-sha> <name> <email> <timestamp> <timezone>\t<message>
//! ```
//!
//! This module owns path construction and file access for those logs. Line
//! parsing lives in [`crate::artifacts::reflog`]; malformed lines are skipped
//! so one corrupt line never prevents rendering the rest of a valid log.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::reflog::reflog_entry::ReflogEntry;
use anyhow::Context;
use derive_new::new;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Reflog manager rooted at a repository's `.git` directory
#[derive(Debug, new)]
pub struct Reflog {
    /// Path to the `.git` directory
    path: Box<Path>,
}

impl Reflog {
    /// Read and parse the reflog of a branch
    ///
    /// The log file is read completely before parsing begins. Entries are
    /// returned in file order; blank and malformed lines are skipped.
    ///
    /// # Errors
    ///
    /// A missing or unreadable log file is an error, reported with the
    /// underlying cause.
    pub fn read_entries(&self, branch: &BranchName) -> anyhow::Result<Vec<ReflogEntry>> {
        let log_path = self.branch_log_path(branch);
        let content = std::fs::read_to_string(&log_path)
            .with_context(|| format!("error reading log file at {:?}", log_path))?;

        Ok(Self::parse_entries(&content))
    }

    /// Parse reflog text into entries, skipping blank and malformed lines
    pub fn parse_entries(content: &str) -> Vec<ReflogEntry> {
        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(ReflogEntry::try_parse)
            .collect::<Vec<_>>()
    }

    /// List the branches that have a reflog
    ///
    /// Walks `logs/refs/heads` recursively, so hierarchical branch names
    /// (`feature/foo`) are reported with their full name. Returns an empty
    /// list when the log directory does not exist yet.
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_logs_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                if entry.path().is_file() {
                    let relative_path = entry.path().strip_prefix(&heads_path).ok()?;
                    BranchName::try_parse(relative_path.to_string_lossy().to_string()).ok()
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    /// Full path of a branch's reflog file
    pub fn branch_log_path(&self, branch: &BranchName) -> PathBuf {
        self.heads_logs_path().join(branch.as_ref())
    }

    fn heads_logs_path(&self) -> PathBuf {
        self.path.join("logs").join("refs").join("heads")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entries_keeps_file_order() {
        let content = "aaa1 bbb1 Jane Doe <jane@example.com> 1700000000 +0000\tfirst\n\
                       bbb1 ccc1 Jane Doe <jane@example.com> 1700000100 +0000\tsecond\n";

        let entries = Reflog::parse_entries(content);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].message, "second");
    }

    #[test]
    fn parse_entries_skips_blank_and_malformed_lines() {
        let content = "\n\
                       not enough tokens here\n\
                       aaa1 bbb1 Jane Doe <jane@example.com> 1700000000 +0000\tkept\n\
                       \n";

        let entries = Reflog::parse_entries(content);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "kept");
    }

    #[test]
    fn parse_entries_of_empty_text_is_empty() {
        assert!(Reflog::parse_entries("").is_empty());
    }
}
