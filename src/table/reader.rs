//! Table Reader
//!
//! Sequential, bounded line scanning over the table file.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::FlatKvError;

use super::{Row, LINE_TERMINATOR};

/// Reads rows from the table in file order
///
/// The file handle is owned by the reader and closed when it is dropped,
/// whether the scan ran to the end or stopped early on an error.
pub struct TableReader {
    path: PathBuf,
    reader: BufReader<File>,
    delimiter: u8,
    max_line_length: usize,
    /// 1-based number of the last line read
    line_no: u64,
    /// Set after EOF or the first error; the iterator is fused
    done: bool,
}

impl TableReader {
    /// Open the table configured in `config`
    ///
    /// Returns `TableNotFound` if the file does not exist.
    pub fn open(config: &Config) -> Result<Self> {
        let path = config.table_path.clone();
        let file = File::open(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => FlatKvError::TableNotFound(path.clone()),
            _ => FlatKvError::Io(e),
        })?;

        Ok(Self {
            path,
            reader: BufReader::new(file),
            delimiter: config.delimiter,
            max_line_length: config.max_line_length,
            line_no: 0,
            done: false,
        })
    }

    /// Path of the table being read
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of lines read so far
    pub fn lines_read(&self) -> u64 {
        self.line_no
    }

    /// Read the next line, or `None` at EOF
    fn read_row(&mut self) -> Result<Option<Row>> {
        let mut buf = Vec::new();

        // One byte over the limit is enough to tell an overlong line apart
        // from one that fits exactly and is followed by the terminator.
        let limit = (self.max_line_length as u64).saturating_add(1);
        let n = (&mut self.reader)
            .take(limit)
            .read_until(LINE_TERMINATOR, &mut buf)?;
        if n == 0 {
            return Ok(None);
        }
        self.line_no += 1;

        if buf.last() == Some(&LINE_TERMINATOR) {
            buf.pop();
        } else if buf.len() > self.max_line_length {
            return Err(FlatKvError::LineTooLong {
                line: self.line_no,
                limit: self.max_line_length,
            });
        }

        Ok(Some(Row::parse(buf, self.delimiter)))
    }
}

impl Iterator for TableReader {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.read_row() {
            Ok(Some(row)) => Some(Ok(row)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
