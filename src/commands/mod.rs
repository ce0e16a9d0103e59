//! Command implementations
//!
//! User-facing commands, each implemented as a method on
//! [`Repository`](crate::areas::repository::Repository):
//!
//! - `show`: render the reflog of a branch
//! - `branches`: list branches that have a reflog

pub mod branches;
pub mod show;
