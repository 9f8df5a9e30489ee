use crate::csv_processor::Dataset;
use crate::utils::{sanitize_cell, Result};
use std::fs::File;
use std::path::Path;

/// Persists the entire dataset to `path` atomically.
///
/// Writes to a sibling `.tmp` file and renames over the target, so a crash
/// mid-write leaves the previous snapshot intact.
pub fn write_snapshot(dataset: &Dataset, path: &Path) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    {
        let file = File::create(&temp_path)?;
        let mut writer = csv::Writer::from_writer(file);

        writer.write_record(dataset.headers())?;
        for row in dataset.rows() {
            let sanitized: Vec<String> = row.iter().map(|s| sanitize_cell(s)).collect();
            writer.write_record(&sanitized)?;
        }
        writer.flush()?;
    }

    std::fs::rename(&temp_path, path)?;
    Ok(())
}
