//! Core grouping pipeline
//!
//! Read every record into the index, then sort, filter, and report.

use crate::cli::{GroupsArgs, IndexKind, MalformedPolicy};
use crate::error::{GroupsError, Result};
use crate::index::{create_index, GroupIndex};
use crate::progress::{create_bytes_progress_bar, create_spinner, ProcessingStats};
use crate::record::{open_input, RecordReader, STDIN_PATH};
use crate::report::GroupWriter;
use crate::view::{sorted_groups, MIN_GROUP_SIZE};

use colored::*;
use indicatif::ProgressBar;
use std::fs;
use std::io::{BufRead, ErrorKind, Write};
use std::path::Path;

/// How often the progress bar position is refreshed, in lines
const PROGRESS_INTERVAL: u64 = 1024;

/// Processor configuration
#[derive(Debug, Clone)]
pub struct ProcessorConfig {
    pub index: IndexKind,
    pub on_malformed: MalformedPolicy,
    pub progress: bool,
}

impl ProcessorConfig {
    pub fn from_args(args: &GroupsArgs) -> Self {
        Self {
            index: args.index,
            on_malformed: args.on_malformed,
            progress: args.progress && !args.quiet,
        }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            index: IndexKind::Hash,
            on_malformed: MalformedPolicy::Abort,
            progress: false,
        }
    }
}

/// Main processor
pub struct Processor {
    config: ProcessorConfig,
}

impl Processor {
    pub fn new(config: ProcessorConfig) -> Self {
        Self { config }
    }

    /// Group the records in `input` (a path or `-`) and report to `output`
    pub fn process<W: Write>(&self, input: &Path, output: W) -> Result<ProcessingStats> {
        let pb = self.progress_bar(input);
        self.process_with_progress(input, output, &pb)
    }

    /// Same as [`Processor::process`], reporting read progress on `pb`.
    ///
    /// The bar is cleared before returning, whether or not indexing failed.
    pub fn process_with_progress<W: Write>(
        &self,
        input: &Path,
        output: W,
        pb: &ProgressBar,
    ) -> Result<ProcessingStats> {
        // the input handle is dropped before reporting starts
        let indexed = open_input(input).and_then(|reader| self.build_index(reader, pb));
        pb.finish_and_clear();

        let (index, mut stats) = indexed?;
        self.report(index.as_ref(), output, &mut stats)?;
        Ok(stats)
    }

    /// Group records from an already-open reader
    pub fn process_reader<R: BufRead, W: Write>(&self, reader: R, output: W) -> Result<ProcessingStats> {
        let (index, mut stats) = self.build_index(reader, &ProgressBar::hidden())?;
        self.report(index.as_ref(), output, &mut stats)?;
        Ok(stats)
    }

    /// Drain `reader` into a fresh index
    pub fn build_index<R: BufRead>(
        &self,
        reader: R,
        pb: &ProgressBar,
    ) -> Result<(Box<dyn GroupIndex>, ProcessingStats)> {
        let mut stats = ProcessingStats::new();
        let mut index = create_index(self.config.index);
        let mut records = RecordReader::new(reader);

        log::debug!("Indexing with {:?} backend", self.config.index);

        while let Some(result) = records.next() {
            match result {
                Ok(record) => {
                    index.insert(record.key, record.value);
                    stats.records_indexed += 1;
                }
                Err(e @ (GroupsError::MalformedRecord { .. } | GroupsError::InvalidUtf8 { .. }))
                    if self.config.on_malformed == MalformedPolicy::Skip =>
                {
                    log::warn!("Skipping {}", e);
                    stats.malformed_skipped += 1;
                }
                Err(e) => return Err(e),
            }

            if records.lines_read() % PROGRESS_INTERVAL == 0 {
                pb.set_position(records.bytes_read());
            }
        }

        stats.lines_read = records.lines_read();
        stats.bytes_read = records.bytes_read();
        stats.distinct_keys = index.len() as u64;
        pb.set_position(stats.bytes_read);

        log::debug!(
            "Read {} lines, {} distinct keys, {} values",
            stats.lines_read,
            index.len(),
            index.value_count()
        );

        Ok((index, stats))
    }

    /// Sort, filter, and write the groups
    fn report<W: Write>(&self, index: &dyn GroupIndex, output: W, stats: &mut ProcessingStats) -> Result<()> {
        let view = sorted_groups(index, MIN_GROUP_SIZE);
        let mut writer = GroupWriter::new(output);

        match writer.write_all(view.iter().copied()) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                log::debug!("Output closed early, stopping report");
            }
            Err(e) => return Err(e.into()),
        }

        stats.groups_reported = writer.groups_written();
        stats.lines_written = writer.lines_written();
        log::debug!("Reported {} of {} groups", stats.groups_reported, index.len());
        Ok(())
    }

    fn progress_bar(&self, input: &Path) -> ProgressBar {
        if !self.config.progress {
            return ProgressBar::hidden();
        }

        let msg = "Indexing...".green().to_string();
        if input.as_os_str() == STDIN_PATH {
            return create_spinner(&msg);
        }

        match fs::metadata(input) {
            Ok(meta) => create_bytes_progress_bar(meta.len(), &msg),
            Err(_) => create_spinner(&msg),
        }
    }
}
