//! # FlatKV
//!
//! A minimal key-value store persisted as a flat delimited text file:
//! - One `key,value` row per line, no header, no quoting
//! - Integer and string lookup, integer upsert
//! - Atomic rewrites (temp file + rename), so readers never see a
//!   half-written table
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         Store                               │
//! │        get_integer / get_string / set_integer               │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │ TableReader │          │ TableWriter │
//!   │   (scan)    │          │ (temp file) │
//!   └──────┬──────┘          └──────┬──────┘
//!          │                        │ rename
//!          ▼                        ▼
//!   ┌───────────────────────────────────────┐
//!   │            data.csv (table)           │
//!   └───────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use flatkv::Store;
//!
//! let store = Store::open_path("settings.csv");
//! store.set_integer("timeout", 30)?;
//! assert_eq!(store.get_integer("timeout")?, 30);
//! # Ok::<(), flatkv::FlatKvError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod table;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ErrorKind, FlatKvError, Result};
pub use config::{Config, SyncStrategy};
pub use store::Store;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FlatKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
