//! Error types shared by the grouping tool and the stream filters.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code for argument errors.
pub const EXIT_USAGE: i32 = 1;

/// Exit code for every failure after arguments were accepted.
pub const EXIT_FAILURE: i32 = 2;

/// Errors raised while reading, indexing, or reporting records.
#[derive(Debug, Error)]
pub enum GroupsError {
    #[error("cannot open '{}'", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed record on line {line}: expected 2 tab-separated fields, found {fields}: {content:?}")]
    MalformedRecord {
        line: u64,
        content: String,
        fields: usize,
    },
    #[error("invalid UTF-8 on line {line} at byte {offset}")]
    InvalidUtf8 { line: u64, offset: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl GroupsError {
    /// Process exit code for this error. Argument errors never reach this
    /// type; clap reports them and the binaries exit with [`EXIT_USAGE`].
    pub fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

pub type Result<T> = std::result::Result<T, GroupsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_message_names_line_and_content() {
        let err = GroupsError::MalformedRecord {
            line: 7,
            content: "no tab here".to_string(),
            fields: 1,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("\"no tab here\""));
        assert!(msg.contains("found 1"));
    }

    #[test]
    fn test_exit_codes() {
        let err = GroupsError::FileAccess {
            path: PathBuf::from("missing.tsv"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("missing.tsv"));

        let err = GroupsError::InvalidUtf8 { line: 4, offset: 1 };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "invalid UTF-8 on line 4 at byte 1");
    }
}
