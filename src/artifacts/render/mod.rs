//! Output document rendering
//!
//! Rendering is pure formatting: entries are emitted in input order, never
//! reordered, deduplicated, or filtered (malformed lines were already dropped
//! at parse time).
//!
//! - `html`: self-contained HTML document for an external viewer
//! - `text`: plain text for terminal display

pub mod html;
pub mod text;
