pub mod checkpoint;

use crate::csv_processor::{write_snapshot, Dataset};
use crate::language::{Mode, TextProcessor};
use crate::utils::{LangProcError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

pub const PROCESSED_COLUMN: &str = "processed";
pub const LANGUAGE_COLUMN: &str = "detected_language";

/// Sentinel written to `detected_language` when the transform failed for a
/// row; `processed` stays empty. Distinguishes a failed row from an untouched
/// one (both fields empty) and from a successfully empty result (real code).
pub const FAILURE_LANGUAGE: &str = "error";

/// End-of-run tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub total: usize,
}

/// Checkpointed row processor.
///
/// Runs the dataset through the transform strictly row by row, persisting the
/// whole dataset to `save_path` after every row. The persisted file doubles as
/// the checkpoint: on the next run, rows whose output columns are already
/// populated are skipped. At most one row of work is lost to a crash.
pub struct Processor {
    save_path: PathBuf,
    mode: Mode,
    text_column: String,
    id_column: String,
    retry_failed: bool,
    transform: Arc<dyn TextProcessor>,
}

impl Processor {
    pub fn new(
        save_path: impl Into<PathBuf>,
        mode: Mode,
        transform: Arc<dyn TextProcessor>,
    ) -> Self {
        Self {
            save_path: save_path.into(),
            mode,
            text_column: "text".to_string(),
            id_column: "file".to_string(),
            retry_failed: true,
            transform,
        }
    }

    pub fn with_columns(
        mut self,
        text_column: impl Into<String>,
        id_column: impl Into<String>,
    ) -> Self {
        self.text_column = text_column.into();
        self.id_column = id_column.into();
        self
    }

    /// Whether rows carrying the failure sentinel are re-attempted on resume.
    /// Defaults to true.
    pub fn with_retry_failed(mut self, retry_failed: bool) -> Self {
        self.retry_failed = retry_failed;
        self
    }

    pub async fn run(&self, dataset: Dataset) -> Result<(Dataset, ProcessReport)> {
        let mut working = dataset;

        let text_col = working.column_index(&self.text_column).ok_or_else(|| {
            LangProcError::MissingColumn(format!(
                "'{}' (available: {})",
                self.text_column,
                working.headers().join(", ")
            ))
        })?;

        let id_col = match working.column_index(&self.id_column) {
            Some(idx) => idx,
            None => {
                warn!(
                    column = %self.id_column,
                    "Identity column not found, using row index"
                );
                let idx = working.ensure_column(&self.id_column);
                for i in 0..working.len() {
                    working.set(i, idx, i.to_string());
                }
                idx
            }
        };

        let processed_col = working.ensure_column(PROCESSED_COLUMN);
        let language_col = working.ensure_column(LANGUAGE_COLUMN);

        match checkpoint::load_checkpoint(&self.save_path) {
            Some(ckpt) => {
                info!(path = %self.save_path.display(), rows = ckpt.len(), "Loaded checkpoint");
                checkpoint::merge_outputs(
                    &mut working,
                    &ckpt,
                    &self.id_column,
                    &[PROCESSED_COLUMN, LANGUAGE_COLUMN],
                );
            }
            None => info!("No usable checkpoint found, starting fresh"),
        }

        // Initial snapshot: an empty input still persists a headers-only file,
        // and an unwritable output path fails before any row is processed.
        write_snapshot(&working, &self.save_path)?;

        let mut report = ProcessReport {
            total: working.len(),
            ..ProcessReport::default()
        };

        info!(rows = working.len(), mode = %self.mode, "Processing dataset");
        let bar = ProgressBar::new(working.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {human_pos}/{human_len} ({per_sec}) {msg}")
                .unwrap()
                .progress_chars("█▓▒░-"),
        );

        for i in 0..working.len() {
            let processed_val = working.get(i, processed_col);
            let language_val = working.get(i, language_col);

            let failed_previously = processed_val.is_empty() && language_val == FAILURE_LANGUAGE;
            let done = (!processed_val.is_empty() && !language_val.is_empty())
                || (failed_previously && !self.retry_failed);
            if done {
                report.skipped += 1;
                bar.inc(1);
                continue;
            }

            let text = working.get(i, text_col).to_string();
            if text.trim().is_empty() {
                working.set(i, processed_col, "");
                working.set(i, language_col, "");
                report.skipped += 1;
                write_snapshot(&working, &self.save_path)?;
                bar.inc(1);
                continue;
            }

            match self.transform.process(&text, self.mode).await {
                Ok(output) => {
                    working.set(i, processed_col, output.text.unwrap_or_default());
                    working.set(i, language_col, output.language);
                    report.processed += 1;
                }
                Err(e) => {
                    let row_id = working.get(i, id_col).to_string();
                    warn!(row = %row_id, error = %e, "Row processing failed");
                    working.set(i, processed_col, "");
                    working.set(i, language_col, FAILURE_LANGUAGE);
                    report.errors += 1;
                }
            }

            write_snapshot(&working, &self.save_path)?;
            bar.inc(1);
        }

        bar.finish_and_clear();
        info!(
            processed = report.processed,
            skipped = report.skipped,
            errors = report.errors,
            total = report.total,
            "Processing complete"
        );

        Ok((working, report))
    }
}
