use clap::Parser;
use csv_langproc::csv_processor::file_exists;
use csv_langproc::pipeline::LANGUAGE_COLUMN;
use csv_langproc::{
    read_dataset, AppConfig, Dataset, LangProcError, LanguageProcessor, Mode, ProcessReport,
    Processor, TranslationClient,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "csv-langproc")]
#[command(version, about = "Process CSV text data with per-row checkpointing", long_about = None)]
struct Cli {
    /// Input CSV file (must have a text column)
    #[arg(short, long)]
    input: PathBuf,

    /// Output CSV file, also used as the resume checkpoint
    #[arg(short, long)]
    output: PathBuf,

    /// Processing mode
    #[arg(short, long, value_enum, default_value_t = Mode::Auto)]
    mode: Mode,

    /// Name of the text column
    #[arg(long, default_value = "text")]
    text_column: String,

    /// Name of the identity column used for checkpoint matching
    #[arg(long, default_value = "file")]
    id_column: String,

    /// TOML config file (default: ./config.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat rows that previously failed as done instead of retrying them
    #[arg(long)]
    no_retry_failed: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // An explicitly-passed config must parse; the implicit ./config.toml is
    // optional and falls back to defaults.
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default(Some(Path::new("config.toml"))),
    };
    config.resolve_api_key();

    let directive = if cli.verbose {
        "csv_langproc=debug".to_string()
    } else {
        format!("csv_langproc={}", config.logging.level)
    };
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(directive.parse()?))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if !file_exists(&cli.input) {
        return Err(LangProcError::FileNotFound(cli.input.display().to_string()).into());
    }

    tracing::info!(input = %cli.input.display(), "Loading input");
    let dataset = read_dataset(&cli.input)?;
    tracing::info!(rows = dataset.len(), "Loaded input");

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let translator = if config.api.api_key.is_some() {
        Some(TranslationClient::new(
            &config.api,
            config.processing.max_chars_per_request,
        )?)
    } else {
        None
    };
    let transform = Arc::new(LanguageProcessor::new(config.processing.clone(), translator));

    let retry_failed = config.processing.retry_failed && !cli.no_retry_failed;
    let processor = Processor::new(&cli.output, cli.mode, transform)
        .with_columns(&cli.text_column, &cli.id_column)
        .with_retry_failed(retry_failed);

    let (dataset, report) = processor.run(dataset).await?;

    print_summary(&cli.input, &cli.output, cli.mode, &report, &dataset);
    Ok(())
}

fn print_summary(
    input: &Path,
    output: &Path,
    mode: Mode,
    report: &ProcessReport,
    dataset: &Dataset,
) {
    println!("\n{}", "═".repeat(60));
    println!("Processing Complete");
    println!("{}", "═".repeat(60));
    println!("Input:      {}", input.display());
    println!("Output:     {}", output.display());
    println!("Mode:       {}", mode);
    println!("Processed:  {}", report.processed);
    println!("Skipped:    {}", report.skipped);
    println!("Errors:     {}", report.errors);
    println!("Total rows: {}", report.total);

    if let Some(lang_col) = dataset.column_index(LANGUAGE_COLUMN) {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for i in 0..dataset.len() {
            let lang = dataset.get(i, lang_col);
            if !lang.is_empty() {
                *counts.entry(lang).or_insert(0) += 1;
            }
        }
        if !counts.is_empty() {
            let mut sorted: Vec<_> = counts.into_iter().collect();
            sorted.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
            println!("\nLanguage distribution:");
            for (lang, count) in sorted {
                println!("  {}: {}", lang, count);
            }
        }
    }
    println!("{}", "═".repeat(60));
}
