//! Reflog data structures and rendering
//!
//! This module contains the pure, filesystem-free pieces:
//!
//! - `branch`: Branch name validation
//! - `core`: Shared utilities (pager wrapper, etc.)
//! - `reflog`: Reflog line parsing
//! - `render`: Output document rendering

pub mod branch;
pub mod core;
pub mod reflog;
pub mod render;
