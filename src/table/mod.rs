//! Table Module
//!
//! On-disk representation of the key-value table.
//!
//! ## Responsibilities
//! - Split raw lines into key/value rows
//! - Scan the table sequentially with a bounded line length
//! - Write a replacement table and swap it in atomically
//!
//! ## File Format
//! ```text
//! ┌──────────────────────────────────────┐
//! │ key ─ delim ─ value ─ '\n'           │  row 1
//! ├──────────────────────────────────────┤
//! │ key ─ delim ─ value ─ '\n'           │  row 2
//! ├──────────────────────────────────────┤
//! │ ... (no header, no quoting)          │
//! └──────────────────────────────────────┘
//! ```
//!
//! A line is split at its first delimiter. Lines without a delimiter, or with
//! an empty key or value, are kept as malformed rows: they never match a
//! lookup and are rewritten byte-for-byte.

mod row;
mod reader;
mod writer;

pub use row::Row;
pub use reader::TableReader;
pub use writer::TableWriter;

/// Byte terminating every line
pub const LINE_TERMINATOR: u8 = b'\n';
