//! Repository discovery
//!
//! A repository is identified by the presence of a `.git` directory. Discovery
//! walks ancestor directories upward from a starting path, checking the start
//! itself first, and stops at the filesystem root.

use crate::areas::reflog::Reflog;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::io::ErrorKind;
use std::path::Path;

/// Name of the marker directory that identifies a repository root
pub const GIT_DIR_NAME: &str = ".git";

pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    reflog: Reflog,
}

impl Repository {
    /// Open the repository governing `start`
    ///
    /// # Arguments
    ///
    /// * `start` - Path to begin the upward search from
    /// * `writer` - Sink for command output
    ///
    /// # Errors
    ///
    /// Fails when no ancestor of `start` contains a `.git` directory, or when
    /// the walk itself hits a filesystem error.
    pub fn discover(start: &Path, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let git_dir = locate_git_dir(start)?.ok_or_else(|| {
            anyhow::anyhow!(
                "no {} directory found in {:?} or any of its parent directories",
                GIT_DIR_NAME,
                start
            )
        })?;

        let path = git_dir
            .parent()
            .with_context(|| format!("git directory {:?} has no parent", git_dir))?
            .to_path_buf()
            .into_boxed_path();
        let reflog = Reflog::new(git_dir);

        Ok(Repository {
            path,
            writer: RefCell::new(writer),
            reflog,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn reflog(&self) -> &Reflog {
        &self.reflog
    }
}

/// Find the `.git` directory governing `start`
///
/// Checks `start` itself first, then each ancestor in turn. Returns `None`
/// once the filesystem root has been checked without a match.
///
/// The marker check does not follow symlinks, so a `.git` file (as written by
/// worktrees and submodules) does not count as a repository root and the walk
/// continues past it. A missing candidate is part of the walk; any other
/// filesystem error propagates.
pub fn locate_git_dir(start: &Path) -> anyhow::Result<Option<Box<Path>>> {
    let mut current = start
        .canonicalize()
        .with_context(|| format!("failed to resolve start path {:?}", start))?;

    loop {
        let candidate = current.join(GIT_DIR_NAME);

        match std::fs::symlink_metadata(&candidate) {
            Ok(metadata) if metadata.is_dir() => {
                return Ok(Some(candidate.into_boxed_path()));
            }
            Ok(_) => {}
            Err(error) if error.kind() == ErrorKind::NotFound => {}
            Err(error) => {
                return Err(error)
                    .with_context(|| format!("failed to inspect {:?}", candidate));
            }
        }

        // PathBuf::pop returns false once the platform root is reached
        if !current.pop() {
            return Ok(None);
        }
    }
}
