//! Progress display and console messages
//!
//! Everything here writes to stderr; stdout carries only report data.

use bytesize::ByteSize;
use colored::*;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use log::LevelFilter;
use std::time::{Duration, Instant};

/// Print a section header
pub fn print_header(text: &str) {
    eprintln!("\n{} {}", "▶".green(), text.green().bold());
}

/// Print an info message
pub fn print_info(text: &str) {
    eprintln!("  {} {}", "ℹ".cyan(), text);
}

/// Print a warning message
pub fn print_warning(text: &str) {
    eprintln!("  {} {}", "⚠".yellow(), text.yellow());
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!("  {} {}", "✖".red(), text.red());
}

/// Print an error and every error in its source chain
pub fn print_error_chain(err: &anyhow::Error) {
    print_error(&format!("{}", err));
    for cause in err.chain().skip(1) {
        print_error(&format!("  Caused by: {}", cause));
    }
}

/// Set up `env_logger`. `RUST_LOG` still wins when set.
pub fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Create a bytes-based progress bar on stderr
pub fn create_bytes_progress_bar(total_bytes: u64, msg: &str) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(Some(total_bytes), ProgressDrawTarget::stderr());

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓░")
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Create a spinner for input of unknown size
pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::with_draw_target(None, ProgressDrawTarget::stderr());

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {bytes} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
    );

    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Counters for one grouping run
#[derive(Debug, Clone)]
pub struct ProcessingStats {
    pub bytes_read: u64,
    pub lines_read: u64,
    pub records_indexed: u64,
    pub malformed_skipped: u64,
    pub distinct_keys: u64,
    pub groups_reported: u64,
    pub lines_written: u64,
    pub start_time: Instant,
}

impl ProcessingStats {
    pub fn new() -> Self {
        Self {
            bytes_read: 0,
            lines_read: 0,
            records_indexed: 0,
            malformed_skipped: 0,
            distinct_keys: 0,
            groups_reported: 0,
            lines_written: 0,
            start_time: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn lines_per_second(&self) -> f64 {
        let elapsed = self.elapsed().as_secs_f64();
        if elapsed > 0.0 {
            self.lines_read as f64 / elapsed
        } else {
            0.0
        }
    }

    /// Print final statistics
    pub fn print_summary(&self) {
        print_header("Run summary");

        eprintln!("  {} {}", "Data read:       ".green(), ByteSize(self.bytes_read));
        eprintln!("  {} {}", "Lines read:      ".green(), format_number(self.lines_read));
        eprintln!("  {} {}", "Records indexed: ".green(), format_number(self.records_indexed));
        if self.malformed_skipped > 0 {
            eprintln!("  {} {}", "Skipped lines:   ".yellow(),
                format_number(self.malformed_skipped).yellow());
        }
        eprintln!("  {} {}", "Distinct keys:   ".green(), format_number(self.distinct_keys));
        eprintln!("  {} {}", "Groups reported: ".green().bold(),
            format_number(self.groups_reported).green().bold());
        eprintln!("  {} {}", "Lines written:   ".green(), format_number(self.lines_written));
        eprintln!();
        eprintln!("  {} {}", "Duration:        ".green(), format_duration(self.elapsed()));
        eprintln!("  {} {:.2} lines/sec", "Throughput:      ".green(), self.lines_per_second());
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}
