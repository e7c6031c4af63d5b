//! Group report writer
//!
//! Writes each group as a `key:` header, its values one per line, and a blank
//! separator line.

use std::io::{self, BufWriter, Write};

use crate::index::Group;

/// Default buffer size for report output (64KB)
const DEFAULT_BUFFER_SIZE: usize = 64 * 1024;

/// Buffered report writer
pub struct GroupWriter<W: Write> {
    writer: BufWriter<W>,
    groups_written: u64,
    lines_written: u64,
}

impl<W: Write> GroupWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_capacity(DEFAULT_BUFFER_SIZE, inner)
    }

    pub fn with_capacity(capacity: usize, inner: W) -> Self {
        Self {
            writer: BufWriter::with_capacity(capacity, inner),
            groups_written: 0,
            lines_written: 0,
        }
    }

    /// Write one group, blank separator included
    pub fn write_group(&mut self, key: &str, group: &Group) -> io::Result<()> {
        writeln!(self.writer, "{}:", key)?;
        for value in group.iter() {
            writeln!(self.writer, "{}", value)?;
        }
        writeln!(self.writer)?;

        self.groups_written += 1;
        self.lines_written += group.len() as u64 + 2;
        Ok(())
    }

    /// Write every group in order, then flush
    pub fn write_all<'a, I>(&mut self, groups: I) -> io::Result<()>
    where
        I: IntoIterator<Item = (&'a str, &'a Group)>,
    {
        for (key, group) in groups {
            self.write_group(key, group)?;
        }
        self.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }

    pub fn groups_written(&self) -> u64 {
        self.groups_written
    }

    pub fn lines_written(&self) -> u64 {
        self.lines_written
    }

    /// Flush and hand back the inner writer
    pub fn into_inner(self) -> io::Result<W> {
        self.writer.into_inner().map_err(|e| e.into_error())
    }
}
