//! Run orchestration
//!
//! Drives the fetch → parse → prompt → select → persist pipeline for
//! one run.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use thiserror::Error;

use crate::catalog::fetch::{fetch_catalog, FetchError};
use crate::catalog::parse::parse_table;
use crate::identifier::format_identifier;
use crate::selection::{format_size, select_best};
use crate::system::resources;
use crate::types::config::RunConfig;
use crate::types::model::ResourceLimits;

/// Run-fatal conditions. Each display string is the user-facing message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error fetching the file: {0}")]
    Fetch(#[from] FetchError),
    #[error("No models found.")]
    EmptyCatalog,
    #[error("{0}")]
    InvalidInput(&'static str),
    #[error("No model found with the given specifications.")]
    NoEligibleModel,
}

/// Execute one selection run.
///
/// A failure to persist the identifier is reported but not fatal; the
/// identifier has already been printed by then.
pub async fn run(config: &RunConfig) -> Result<(), AppError> {
    let table_text = fetch_catalog(&config.url).await?;

    let models = parse_table(&table_text);
    if models.is_empty() {
        return Err(AppError::EmptyCatalog);
    }
    tracing::info!("Parsed {} catalog rows", models.len());

    print_hardware_hint();

    let max_ram_gb = match config.ram_gb {
        Some(value) => value,
        None => prompt_number("Enter available RAM (in GB): ")
            .ok_or(AppError::InvalidInput("RAM must be a number."))?,
    };
    let cpu_cores = match config.cpu_cores {
        Some(value) => value,
        None => prompt_number("Enter number of CPU cores: ")
            .ok_or(AppError::InvalidInput("CPU cores must be a number."))?,
    };
    let limits = ResourceLimits {
        max_ram_gb,
        cpu_cores,
    };

    let best = select_best(&models, limits).ok_or(AppError::NoEligibleModel)?;
    if let Ok(bytes) = best.size_raw.parse::<u64>() {
        tracing::info!("Selected {} ({})", best.filename, format_size(bytes));
    }

    let final_str = format_identifier(best);
    println!();
    println!("Final model identifier:");
    println!("{}", final_str);

    // Hand-off file for the downstream runner.
    match persist_identifier(&config.output, &final_str) {
        Ok(()) => {
            println!();
            println!("Model identifier saved to {}", config.output.display());
        }
        Err(e) => println!("Error saving the model identifier: {}", e),
    }

    Ok(())
}

/// Overwrite `path` with exactly the identifier string.
fn persist_identifier(path: &Path, identifier: &str) -> io::Result<()> {
    fs::write(path, identifier)
}

/// Print a line with the detected hardware, when anything was detected.
fn print_hardware_hint() {
    let specs = resources::detect();
    if specs.ram_total_mb == 0 && specs.cpu_cores == 0 {
        return;
    }
    println!(
        "Detected: {:.1} GB RAM, {} CPU cores",
        specs.ram_total_mb as f64 / 1024.0,
        specs.cpu_cores
    );
}

/// Prompt on stdout and read one line from stdin as a number.
fn prompt_number(prompt: &str) -> Option<f64> {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut input = String::new();
    io::stdin().read_line(&mut input).ok()?;
    input.trim().parse::<f64>().ok()
}
