//! Core utilities and shared types
//!
//! This module contains shared utilities used across the application.

use anyhow::Context;
use derive_new::new;
use is_terminal::IsTerminal;
use minus::Pager;
use std::io::{self, Write};

/// Whether command output should go through the pager
///
/// Paging applies only when stdout is an interactive terminal and the user
/// has not opted out via the `NO_PAGER` environment variable.
pub fn should_page() -> bool {
    std::env::var_os("NO_PAGER").is_none() && io::stdout().is_terminal()
}

/// `Write` adapter over the minus pager
///
/// Commands write into the repository writer without knowing where the bytes
/// go; this adapter lets that writer be a pager instead of stdout or a file.
/// Push everything first, then hand the pager to [`page_all`] to display it.
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s =
            std::str::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Display everything pushed to the pager, blocking until the user quits
pub fn page_all(pager: Pager) -> anyhow::Result<()> {
    minus::page_all(pager).context("failed to run pager")
}
