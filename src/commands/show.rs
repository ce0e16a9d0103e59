use crate::LogDisplayFormat;
use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::render::{html, text};
use std::io::Write;

#[derive(Debug, Clone)]
pub struct ShowOptions {
    pub branch: BranchName,
    pub format: LogDisplayFormat,
}

impl Repository {
    /// Render the reflog of the selected branch to the repository writer
    ///
    /// The log file is read and parsed in full, then rendered in one piece.
    /// Malformed lines were already skipped during parsing, so the rendered
    /// document contains exactly the valid entries, in file order.
    pub fn show(&self, opts: &ShowOptions) -> anyhow::Result<()> {
        let entries = self.reflog().read_entries(&opts.branch)?;

        let document = match opts.format {
            LogDisplayFormat::Html => html::render_document(&opts.branch, &entries),
            LogDisplayFormat::Text => text::render_document(&opts.branch, &entries),
        };
        write!(self.writer(), "{}", document)?;

        Ok(())
    }
}
