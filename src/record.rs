//! Record reading and parsing
//!
//! Turns a line-oriented byte stream into `(key, value)` records split on a
//! single tab character.

use bstr::ByteSlice;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::error::{GroupsError, Result};

/// Read buffer size for input files (64KB)
const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Field separator inside a record line
pub const FIELD_SEPARATOR: u8 = b'\t';

/// Path argument that selects standard input
pub const STDIN_PATH: &str = "-";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the input
    pub line: u64,
    pub key: String,
    pub value: String,
}

impl Record {
    pub fn new(line: u64, key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            line,
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Open the input named on the command line. `-` reads standard input.
pub fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == STDIN_PATH {
        return Ok(Box::new(BufReader::with_capacity(READ_BUFFER_SIZE, io::stdin())));
    }

    let file = File::open(path).map_err(|source| GroupsError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Box::new(BufReader::with_capacity(READ_BUFFER_SIZE, file)))
}

/// Parse a single line (terminator already removed) into a record.
///
/// The line must contain exactly one tab and both fields must be valid UTF-8.
/// Empty keys and values are allowed.
pub fn parse_record(line_number: u64, line: &[u8]) -> Result<Record> {
    let fields = memchr::memchr_iter(FIELD_SEPARATOR, line).count() + 1;

    match line.split_once_str(&[FIELD_SEPARATOR]) {
        Some((key, value)) if fields == 2 => Ok(Record {
            line: line_number,
            key: decode(line_number, 0, key)?,
            value: decode(line_number, key.len() + 1, value)?,
        }),
        _ => Err(GroupsError::MalformedRecord {
            line: line_number,
            content: line.to_str_lossy().into_owned(),
            fields,
        }),
    }
}

/// Lazy record iterator over a buffered reader
pub struct RecordReader<R: BufRead> {
    reader: R,
    line_buffer: Vec<u8>,
    line_number: u64,
    bytes_read: u64,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: Vec::with_capacity(4096),
            line_number: 0,
            bytes_read: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn lines_read(&self) -> u64 {
        self.line_number
    }

    /// Number of raw bytes consumed so far, terminators included
    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        self.line_buffer.clear();

        match self.reader.read_until(b'\n', &mut self.line_buffer) {
            Ok(0) => None,
            Ok(n) => {
                self.bytes_read += n as u64;
                self.line_number += 1;

                let line = self.line_buffer.as_slice();
                let line = line.strip_suffix(b"\n").unwrap_or(line);

                Some(parse_record(self.line_number, line))
            }
            Err(e) => Some(Err(e.into())),
        }
    }
}

/// `start` is the field's byte offset within the line, for diagnostics
fn decode(line_number: u64, start: usize, bytes: &[u8]) -> Result<String> {
    bytes
        .to_str()
        .map(str::to_string)
        .map_err(|e| GroupsError::InvalidUtf8 {
            line: line_number,
            offset: start + e.valid_up_to(),
        })
}
