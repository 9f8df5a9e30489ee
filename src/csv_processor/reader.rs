use crate::csv_processor::Dataset;
use crate::utils::Result;
use std::fs::File;
use std::path::Path;

/// Loads a whole CSV file into a [`Dataset`].
///
/// Short rows are padded to the header width; the header row is required.
pub fn read_dataset(path: &Path) -> Result<Dataset> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
    let mut dataset = Dataset::new(headers);

    for record in reader.records() {
        let record = record?;
        dataset.push_row(record.iter().map(|s| s.to_string()).collect());
    }

    Ok(dataset)
}

pub fn file_exists(path: &Path) -> bool {
    path.exists()
}

pub fn file_is_empty(path: &Path) -> bool {
    std::fs::metadata(path).map(|m| m.len() == 0).unwrap_or(true)
}
