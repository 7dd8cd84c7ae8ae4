//! Configuration types
//!
//! Command-line configuration for a single selection run.

use clap::Parser;
use std::path::PathBuf;

/// Default catalog location, overridable with `--url`.
pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/mohammadhlm/models/main/models.txt";

/// Default hand-off file, overridable with `--output`.
pub const DEFAULT_OUTPUT_FILE: &str = "chosen_model.txt";

/// Configuration for one run
#[derive(Debug, Clone, Parser)]
#[command(name = "modelpick", about = "Pick the best model file this machine can run")]
pub struct RunConfig {
    /// Catalog URL to fetch
    #[arg(long, default_value = DEFAULT_CATALOG_URL)]
    pub url: String,
    /// File the chosen identifier is written to
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,
    /// Available RAM in GB (skips the prompt)
    #[arg(long)]
    pub ram_gb: Option<f64>,
    /// CPU core count (skips the prompt)
    #[arg(long)]
    pub cpu_cores: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RunConfig::parse_from(["modelpick"]);
        assert_eq!(config.url, DEFAULT_CATALOG_URL);
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert!(config.ram_gb.is_none());
        assert!(config.cpu_cores.is_none());
    }

    #[test]
    fn test_config_overrides() {
        let config = RunConfig::parse_from([
            "modelpick",
            "--url",
            "http://localhost:8080/models.txt",
            "--output",
            "picked.txt",
            "--ram-gb",
            "16",
            "--cpu-cores",
            "8",
        ]);
        assert_eq!(config.url, "http://localhost:8080/models.txt");
        assert_eq!(config.output, PathBuf::from("picked.txt"));
        assert_eq!(config.ram_gb, Some(16.0));
        assert_eq!(config.cpu_cores, Some(8.0));
    }
}
