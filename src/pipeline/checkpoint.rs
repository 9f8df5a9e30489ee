use crate::csv_processor::{file_exists, file_is_empty, read_dataset, Dataset};
use std::collections::HashMap;
use std::path::Path;
use tracing::warn;

/// Loads the checkpoint dataset from a previous run's output file.
///
/// Missing, empty or unparseable files all mean "start fresh"; a bad
/// checkpoint is never fatal.
pub fn load_checkpoint(path: &Path) -> Option<Dataset> {
    if !file_exists(path) || file_is_empty(path) {
        return None;
    }

    match read_dataset(path) {
        Ok(dataset) => Some(dataset),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not load checkpoint, starting fresh");
            None
        }
    }
}

/// Copies completed work from `checkpoint` into `working`, matching rows on
/// the identity column.
///
/// The named `output_columns` are always carried over; checkpoint columns the
/// fresh input does not have are carried over too (appended on the right), so
/// columns added by earlier runs survive. Columns the fresh input already has
/// are never overwritten; the input is the source of truth for them. Rows
/// only present in the checkpoint are ignored; rows only present in the input
/// are new work.
pub fn merge_outputs(
    working: &mut Dataset,
    checkpoint: &Dataset,
    id_column: &str,
    output_columns: &[&str],
) {
    let Some(ckpt_id) = checkpoint.column_index(id_column) else {
        warn!(column = id_column, "Checkpoint has no identity column, ignoring it");
        return;
    };
    let Some(work_id) = working.column_index(id_column) else {
        return;
    };

    for header in checkpoint.headers().to_vec() {
        let is_output = output_columns.iter().any(|c| *c == header);
        if !is_output && working.column_index(&header).is_some() {
            continue;
        }

        let ckpt_col = match checkpoint.column_index(&header) {
            Some(idx) => idx,
            None => continue,
        };

        let by_id: HashMap<&str, &str> = checkpoint
            .rows()
            .map(|row| (row[ckpt_id].as_str(), row[ckpt_col].as_str()))
            .collect();

        let work_col = working.ensure_column(&header);
        for i in 0..working.len() {
            let id = working.get(i, work_id).to_string();
            if let Some(value) = by_id.get(id.as_str()) {
                working.set(i, work_col, *value);
            }
        }
    }
}
