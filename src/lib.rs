//! # Record Groups
//!
//! Group tab-delimited records by key, plus two small character-stream filters.
//!
//! ## Tools
//!
//! - **groups**: read `key<TAB>value` lines, report every key with two or more
//!   values, sorted by key
//! - **caesar**: Caesar-shift ASCII letters from stdin to stdout
//! - **letterfreq**: print the share of each ASCII letter read from stdin
//!
//! ## Usage
//!
//! ```bash
//! # Group students by hometown
//! groups students.tsv
//!
//! # Encrypt, then decrypt, with the default shift of 15
//! echo "Attack at dawn" | caesar | caesar --decrypt
//!
//! # Letter frequencies of a text
//! letterfreq < book.txt
//! ```
//!
//! ## Example
//!
//! ```rust
//! use record_groups::processor::{Processor, ProcessorConfig};
//!
//! let input = "chicago\talice\nchicago\tbob\nevanston\tcarol\n";
//! let mut out = Vec::new();
//!
//! let processor = Processor::new(ProcessorConfig::default());
//! processor.process_reader(input.as_bytes(), &mut out).unwrap();
//!
//! assert_eq!(String::from_utf8(out).unwrap(), "chicago:\nalice\nbob\n\n");
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod freq;
pub mod index;
pub mod processor;
pub mod progress;
pub mod record;
pub mod report;
pub mod view;

pub use cli::GroupsArgs;
pub use error::{GroupsError, Result};
pub use processor::{Processor, ProcessorConfig};
