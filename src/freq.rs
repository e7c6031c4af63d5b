//! Letter frequency counting
//!
//! All counting state lives in one [`LetterCounts`] value that the caller
//! feeds and then reports from.

use std::io::{self, ErrorKind, Read, Write};

use crate::cipher::ALPHABET_LEN;

const LETTERS: usize = ALPHABET_LEN as usize;
const CHUNK_SIZE: usize = 64 * 1024;

/// Per-letter counts plus the running total of letters seen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCounts {
    counts: [u64; LETTERS],
    total: u64,
}

impl Default for LetterCounts {
    fn default() -> Self {
        Self::new()
    }
}

impl LetterCounts {
    pub fn new() -> Self {
        Self {
            counts: [0; LETTERS],
            total: 0,
        }
    }

    /// Count the ASCII letters in `bytes`, case-insensitively
    pub fn feed(&mut self, bytes: &[u8]) {
        for &b in bytes {
            if b.is_ascii_alphabetic() {
                self.counts[(b.to_ascii_uppercase() - b'A') as usize] += 1;
                self.total += 1;
            }
        }
    }

    /// Drain `reader` into a fresh set of counts
    pub fn count_stream<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut counts = Self::new();
        let mut buffer = vec![0u8; CHUNK_SIZE];

        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => counts.feed(&buffer[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(counts)
    }

    /// Occurrences of `letter` (either case); 0 for non-letters
    pub fn count(&self, letter: char) -> u64 {
        letter_index(letter).map_or(0, |i| self.counts[i])
    }

    /// Total letters seen
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Share of `letter` among all letters seen, in percent
    pub fn percentage(&self, letter: char) -> f64 {
        letter_index(letter).map_or(0.0, |i| self.percentage_at(i))
    }

    /// Percentages for `A` through `Z`
    pub fn percentages(&self) -> [f64; LETTERS] {
        let mut out = [0.0; LETTERS];
        for (i, p) in out.iter_mut().enumerate() {
            *p = self.percentage_at(i);
        }
        out
    }

    /// Write the 26-line report, `<LETTER> <percent>` per line
    pub fn write_report<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for (i, p) in self.percentages().iter().enumerate() {
            writeln!(writer, "{} {:6.2}", (b'A' + i as u8) as char, p)?;
        }
        writer.flush()
    }

    fn percentage_at(&self, i: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.counts[i] as f64 * 100.0 / self.total as f64
        }
    }
}

fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_alphabetic() {
        Some((letter.to_ascii_uppercase() as u8 - b'A') as usize)
    } else {
        None
    }
}
