pub mod dataset;
pub mod reader;
pub mod writer;

pub use dataset::Dataset;
pub use reader::{file_exists, file_is_empty, read_dataset};
pub use writer::write_snapshot;
