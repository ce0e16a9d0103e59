//! Core repository components
//!
//! This module contains the filesystem-facing building blocks:
//!
//! - `reflog`: Reflog file access under `.git/logs`
//! - `repository`: Repository discovery and coordination

pub(crate) mod reflog;
pub mod repository;
