//! Table Writer
//!
//! Writes a replacement table to a temporary file and swaps it in with a
//! single rename.

use std::fs::{self, File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::{Config, SyncStrategy};
use crate::error::Result;

use super::{Row, LINE_TERMINATOR};

/// Distinguishes temp files created by the same process
static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Builds a new table next to the existing one
///
/// Nothing is visible at the table path until [`TableWriter::commit`]
/// renames the temp file over it. Dropping the writer without committing
/// removes the temp file and leaves the original table untouched.
pub struct TableWriter {
    /// Final table path
    target: PathBuf,
    /// Temp file receiving the rows
    temp_path: PathBuf,
    writer: BufWriter<File>,
    sync_strategy: SyncStrategy,
    rows_written: u64,
    committed: bool,
}

impl TableWriter {
    /// Create a temp file next to the configured table path
    ///
    /// Creates the table's parent directory if it is missing. When the table
    /// already exists its permissions are carried over to the temp file, so
    /// a rewrite does not widen access to the table.
    pub fn create(config: &Config) -> Result<Self> {
        let target = config.table_path.clone();

        let file_name = target.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("table path {} has no file name", target.display()),
            )
        })?;

        if let Some(parent) = target.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let unique_id = TEMP_COUNTER.fetch_add(1, Ordering::SeqCst);
        let temp_path = target.with_file_name(format!(
            ".{}.tmp.{}.{}",
            file_name.to_string_lossy(),
            std::process::id(),
            unique_id
        ));

        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_path)?;

        // Dropping the half-built writer removes the temp file on error
        let writer = Self {
            target,
            temp_path,
            writer: BufWriter::new(file),
            sync_strategy: config.sync_strategy,
            rows_written: 0,
            committed: false,
        };

        match fs::metadata(&writer.target) {
            Ok(meta) if meta.is_file() => {
                writer.writer.get_ref().set_permissions(meta.permissions())?;
            }
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        tracing::trace!(temp = %writer.temp_path.display(), "created temp table");

        Ok(writer)
    }

    /// Append one row and its terminator
    pub fn write_row(&mut self, row: &Row) -> Result<()> {
        self.writer.write_all(row.as_bytes())?;
        self.writer.write_all(&[LINE_TERMINATOR])?;
        self.rows_written += 1;

        Ok(())
    }

    /// Path of the temp file
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Flush, sync and rename the temp file over the table
    ///
    /// Returns the number of rows in the new table.
    pub fn commit(mut self) -> Result<u64> {
        let sync = self.sync_strategy == SyncStrategy::EveryWrite;

        self.writer.flush()?;
        if sync {
            self.writer.get_ref().sync_all()?;
        }

        replace_file(&self.temp_path, &self.target)?;
        self.committed = true;

        if sync {
            sync_parent_dir(&self.target)?;
        }

        Ok(self.rows_written)
    }
}

impl Drop for TableWriter {
    fn drop(&mut self) {
        if self.committed {
            return;
        }

        if let Err(e) = fs::remove_file(&self.temp_path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(
                    temp = %self.temp_path.display(),
                    error = %e,
                    "failed to remove temp table"
                );
            }
        }
    }
}

/// Move `from` over `to`
///
/// `rename` replaces an existing target atomically on Unix and Windows.
/// Remove-then-rename is only used where the platform refuses that.
fn replace_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && to.is_file() => {
            tracing::debug!(table = %to.display(), "rename refused, removing table first");
            fs::remove_file(to)?;
            fs::rename(from, to)
        }
        Err(e) => Err(e),
    }
}

/// Persist the rename itself by syncing the containing directory
#[cfg(unix)]
fn sync_parent_dir(path: &Path) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    File::open(dir)?.sync_all()
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) -> io::Result<()> {
    Ok(())
}
