//! Configuration for FlatKV
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Default location of the table, relative to the working directory
pub const DEFAULT_TABLE_PATH: &str = "data.csv";

/// Default field delimiter
pub const DEFAULT_DELIMITER: u8 = b',';

/// Default maximum line length in bytes, excluding the line terminator
pub const DEFAULT_MAX_LINE_LENGTH: usize = 1024;

/// Main configuration for a Store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the table file. Temporary files used during a rewrite are
    /// created next to it:
    ///   {dir}/
    ///     ├── data.csv                 (the table)
    ///     └── .data.csv.tmp.<pid>.<n>  (only while set_integer runs)
    pub table_path: PathBuf,

    /// Sync strategy: whether rewrites are fsynced before the swap
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Format Configuration
    // -------------------------------------------------------------------------
    /// Byte separating the key from the value on each line
    pub delimiter: u8,

    /// Longest accepted line (bytes, terminator excluded). Longer lines fail
    /// the operation with `LineTooLong` instead of being truncated.
    pub max_line_length: usize,
}

/// Sync strategy for table rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// fsync the temp file before the rename and the directory after it
    EveryWrite,

    /// Leave flushing to the OS (rename is still atomic for readers,
    /// but a crash may lose the latest write)
    Never,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from(DEFAULT_TABLE_PATH),
            sync_strategy: SyncStrategy::EveryWrite,
            delimiter: DEFAULT_DELIMITER,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the table file path
    pub fn table_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.table_path = path.into();
        self
    }

    /// Set the sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the field delimiter
    ///
    /// `b'\n'` is accepted here but every store operation rejects it with
    /// `InvalidDelimiter`.
    pub fn delimiter(mut self, delimiter: u8) -> Self {
        self.config.delimiter = delimiter;
        self
    }

    /// Set the maximum line length (in bytes)
    pub fn max_line_length(mut self, len: usize) -> Self {
        self.config.max_line_length = len;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
