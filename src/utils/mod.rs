pub mod config;
pub mod errors;

pub use config::{ApiConfig, AppConfig, ProcessingConfig};
pub use errors::{LangProcError, Result};

pub fn sanitize_cell(value: &str) -> String {
    if value.starts_with('=')
        || value.starts_with('+')
        || value.starts_with('-')
        || value.starts_with('@')
    {
        format!("'{}", value)
    } else {
        value.to_string()
    }
}
