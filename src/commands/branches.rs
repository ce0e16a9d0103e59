use crate::areas::repository::Repository;
use colored::Colorize;
use std::io::Write;

impl Repository {
    /// List the branches that have a reflog, one per line
    ///
    /// Default branches (`main`, `master`) are highlighted.
    pub fn branches(&self) -> anyhow::Result<()> {
        let branches = self.reflog().list_branches()?;

        for branch in &branches {
            if branch.is_default_branch() {
                writeln!(self.writer(), "{}", branch.as_ref().green())?;
            } else {
                writeln!(self.writer(), "{}", branch)?;
            }
        }

        Ok(())
    }
}
