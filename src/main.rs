//! keygram CLI.
//!
//! Loads a JSON configuration, runs the extraction pipeline over every
//! `.txt` document in the input folder, and writes the keywords report and
//! analysis log into the output folder.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use keygram::{report, BatchRunner, Error, ExtractorConfig, PlainTextReader};

/// Which output files to produce.
#[derive(Debug, Clone, Default, Deserialize)]
struct OutputToggles {
    #[serde(default)]
    txt_file: bool,
    #[serde(default)]
    analysis_log: bool,
}

/// Full CLI configuration: core extractor settings plus I/O locations.
#[derive(Debug, Clone, Deserialize)]
struct AppConfig {
    input_folder: PathBuf,
    output_folder: PathBuf,
    #[serde(default)]
    generate_outputs: OutputToggles,
    #[serde(flatten)]
    extractor: ExtractorConfig,
}

fn load_config(path: &Path) -> Result<AppConfig, Error> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| Error::Config(e.to_string()))
}

/// Collect `.txt` documents from the input folder, sorted by name so runs
/// are reproducible regardless of directory enumeration order.
fn collect_documents(folder: &Path) -> Result<Vec<PathBuf>, Error> {
    let mut docs: Vec<PathBuf> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "txt"))
        .collect();
    docs.sort();
    Ok(docs)
}

fn run() -> Result<(), Error> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.json".to_string());
    let config = load_config(Path::new(&config_path))?;

    let documents = collect_documents(&config.input_folder)?;
    info!(
        documents = documents.len(),
        input = %config.input_folder.display(),
        "starting corpus analysis"
    );

    let runner = BatchRunner::new(config.extractor)?;
    let summary = runner.run_parallel(&PlainTextReader, &documents);

    fs::create_dir_all(&config.output_folder)?;
    if config.generate_outputs.txt_file {
        let path = config.output_folder.join("10_keywords.txt");
        fs::write(&path, report::render_keywords(&summary))?;
        info!(path = %path.display(), "wrote keywords report");
    }
    if config.generate_outputs.analysis_log {
        let path = config.output_folder.join("00_analysis_log.txt");
        fs::write(&path, report::render_analysis_log(&summary.log))?;
        info!(path = %path.display(), "wrote analysis log");
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("keygram=info")),
        )
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
