//! Store Module
//!
//! Get/set operations over the persisted table.
//!
//! ## Responsibilities
//! - Validate keys before touching the file system
//! - Scan the table for the first row matching a key
//! - Rewrite the table through a temp file when a value changes

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::table::{Row, TableReader, TableWriter, LINE_TERMINATOR};
use crate::FlatKvError;

/// Key-value store backed by a single delimited text file
///
/// ## Access Model: open, scan, close
///
/// The store holds only its configuration. Every call opens the table,
/// scans it from the top and closes it again; nothing is cached between
/// calls, so edits made to the file by other means are picked up at once.
///
/// ## Concurrency
///
/// There is no locking. Readers are safe against a concurrent writer because
/// the new table only becomes visible through a rename. Two concurrent
/// `set_integer` calls on the same table can both read the old contents and
/// the later rename wins, losing the other update. Callers with more than
/// one writer must serialize them.
#[derive(Debug, Clone, Default)]
pub struct Store {
    config: Config,
}

impl Store {
    /// Create a store over the table described by `config`
    ///
    /// No I/O happens here; a missing table is created by the first
    /// `set_integer`.
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Create a store at `path` (convenience method)
    ///
    /// Uses default config with the specified table path
    pub fn open_path(path: impl AsRef<Path>) -> Self {
        Self::new(Config::builder().table_path(path.as_ref()).build())
    }

    /// Get the integer stored under `key`
    ///
    /// The value must be a complete base-10 literal with an optional sign
    /// that fits in an `i64`; anything else is `InvalidInteger`.
    pub fn get_integer(&self, key: &str) -> Result<i64> {
        let value = self.lookup(key)?;
        let text = std::str::from_utf8(&value).map_err(|_| FlatKvError::InvalidInteger {
            key: key.to_string(),
            value: String::from_utf8_lossy(&value).into_owned(),
        })?;

        text.parse::<i64>().map_err(|_| FlatKvError::InvalidInteger {
            key: key.to_string(),
            value: text.to_string(),
        })
    }

    /// Get the raw value stored under `key`
    pub fn get_string(&self, key: &str) -> Result<String> {
        let value = self.lookup(key)?;
        String::from_utf8(value).map_err(|_| FlatKvError::InvalidUtf8 {
            key: key.to_string(),
        })
    }

    /// Set `key` to `value`
    ///
    /// Steps:
    /// 1. Validate the key (no I/O on failure)
    /// 2. Copy every row to a temp file, replacing the first match
    /// 3. Append a new row if nothing matched
    /// 4. Rename the temp file over the table
    ///
    /// The original table is untouched if any step before the rename fails.
    pub fn set_integer(&self, key: &str, value: i64) -> Result<()> {
        self.validate_key(key)?;

        let reader = match TableReader::open(&self.config) {
            Ok(reader) => Some(reader),
            Err(FlatKvError::TableNotFound(_)) => None,
            Err(e) => return Err(e),
        };

        let mut writer = TableWriter::create(&self.config)?;
        let replacement = Row::entry(
            key.as_bytes(),
            value.to_string().as_bytes(),
            self.config.delimiter,
        );
        let mut replaced = false;

        for row in reader.into_iter().flatten() {
            let row = row?;
            if !replaced && row.key() == Some(key.as_bytes()) {
                writer.write_row(&replacement)?;
                replaced = true;
            } else {
                writer.write_row(&row)?;
            }
        }

        if !replaced {
            writer.write_row(&replacement)?;
        }

        let rows = writer.commit()?;
        tracing::debug!(
            table = %self.config.table_path.display(),
            key,
            value,
            replaced,
            rows,
            "set_integer"
        );

        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the table path
    pub fn table_path(&self) -> &Path {
        &self.config.table_path
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Return the value of the first well-formed row whose key is `key`
    fn lookup(&self, key: &str) -> Result<Vec<u8>> {
        self.validate_key(key)?;

        let mut reader = TableReader::open(&self.config)?;
        for (index, row) in reader.by_ref().enumerate() {
            let row = row?;
            if row.key() == Some(key.as_bytes()) {
                tracing::trace!(
                    table = %self.config.table_path.display(),
                    key,
                    line = index + 1,
                    "key found"
                );
                return Ok(row.value().unwrap_or_default().to_vec());
            }
        }

        tracing::debug!(
            table = %self.config.table_path.display(),
            key,
            lines = reader.lines_read(),
            "key not found"
        );
        Err(FlatKvError::KeyNotFound(key.to_string()))
    }

    /// Keys must be non-empty and free of the delimiter and line terminator
    ///
    /// Also rejects a delimiter equal to the line terminator, which would
    /// split every written row across two lines.
    fn validate_key(&self, key: &str) -> Result<()> {
        if self.config.delimiter == LINE_TERMINATOR {
            return Err(FlatKvError::InvalidDelimiter(char::from(self.config.delimiter)));
        }

        let reason = if key.is_empty() {
            "key is empty"
        } else if key.as_bytes().contains(&self.config.delimiter) {
            "key contains the field delimiter"
        } else if key.as_bytes().contains(&LINE_TERMINATOR) {
            "key contains a line break"
        } else {
            return Ok(());
        };

        Err(FlatKvError::InvalidKey {
            key: key.to_string(),
            reason,
        })
    }
}
