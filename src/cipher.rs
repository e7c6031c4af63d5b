//! Caesar cipher stream filter
//!
//! Rotates ASCII letters within their own case by a fixed shift. Every other
//! byte, including the bytes of multi-byte UTF-8 characters, passes through
//! unchanged, so the filter never breaks valid UTF-8.

use std::io::{self, ErrorKind, Read, Write};

/// Letters in the alphabet
pub const ALPHABET_LEN: u8 = 26;

/// Shift used when none is given
pub const DEFAULT_SHIFT: i64 = 15;

const CHUNK_SIZE: usize = 64 * 1024;

/// Which way to rotate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

/// Caesar cipher with a shift normalized into `[0, 26)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cipher {
    shift: u8,
}

impl Cipher {
    /// Any integer shift is accepted; negative shifts wrap around.
    pub fn new(shift: i64) -> Self {
        Self {
            shift: shift.rem_euclid(ALPHABET_LEN as i64) as u8,
        }
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }

    #[inline]
    pub fn encrypt_byte(&self, b: u8) -> u8 {
        match letter_base(b) {
            Some(base) => base + (b - base + self.shift) % ALPHABET_LEN,
            None => b,
        }
    }

    #[inline]
    pub fn decrypt_byte(&self, b: u8) -> u8 {
        match letter_base(b) {
            Some(base) => base + (b - base + ALPHABET_LEN - self.shift) % ALPHABET_LEN,
            None => b,
        }
    }

    #[inline]
    pub fn apply_byte(&self, b: u8, direction: Direction) -> u8 {
        match direction {
            Direction::Encrypt => self.encrypt_byte(b),
            Direction::Decrypt => self.decrypt_byte(b),
        }
    }

    pub fn encrypt_char(&self, c: char) -> char {
        if c.is_ascii() {
            self.encrypt_byte(c as u8) as char
        } else {
            c
        }
    }

    pub fn decrypt_char(&self, c: char) -> char {
        if c.is_ascii() {
            self.decrypt_byte(c as u8) as char
        } else {
            c
        }
    }

    pub fn encrypt(&self, text: &str) -> String {
        text.chars().map(|c| self.encrypt_char(c)).collect()
    }

    pub fn decrypt(&self, text: &str) -> String {
        text.chars().map(|c| self.decrypt_char(c)).collect()
    }

    /// Copy `reader` to `writer`, rotating letters on the way.
    ///
    /// Returns the number of bytes processed.
    pub fn transform_stream<R: Read, W: Write>(
        &self,
        mut reader: R,
        mut writer: W,
        direction: Direction,
    ) -> io::Result<u64> {
        let mut buffer = vec![0u8; CHUNK_SIZE];
        let mut total = 0u64;

        loop {
            let n = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            for b in &mut buffer[..n] {
                *b = self.apply_byte(*b, direction);
            }
            writer.write_all(&buffer[..n])?;
            total += n as u64;
        }

        writer.flush()?;
        Ok(total)
    }
}

impl Default for Cipher {
    fn default() -> Self {
        Self::new(DEFAULT_SHIFT)
    }
}

/// `b'A'` or `b'a'` for ASCII letters, `None` otherwise
#[inline]
fn letter_base(b: u8) -> Option<u8> {
    if b.is_ascii_uppercase() {
        Some(b'A')
    } else if b.is_ascii_lowercase() {
        Some(b'a')
    } else {
        None
    }
}
