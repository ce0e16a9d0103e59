//! Reflog line parsing
//!
//! Each reflog line records one reference update:
//!
//! ```text
//! <old-sha> <new-sha> <name> <email> <timestamp> <timezone>\t<message>
//! ```
//!
//! The parser is deliberately lenient: a line that does not match the minimum
//! token structure is dropped rather than reported, so a corrupt line never
//! aborts the operation.

pub mod reflog_entry;
