pub mod csv_processor;
pub mod language;
pub mod pipeline;
pub mod utils;

pub use csv_processor::{read_dataset, write_snapshot, Dataset};
pub use language::{LanguageProcessor, Mode, Processed, TextProcessor, TranslationClient};
pub use pipeline::{ProcessReport, Processor};
pub use utils::{AppConfig, LangProcError, Result};
