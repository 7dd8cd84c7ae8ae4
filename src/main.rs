//! modelpick entry point

use clap::Parser;
use tracing_subscriber::EnvFilter;

use modelpick::app;
use modelpick::types::config::RunConfig;

#[tokio::main]
async fn main() {
    // Diagnostics go to stderr; stdout is reserved for the output contract.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = RunConfig::parse();
    if let Err(e) = app::run(&config).await {
        println!("{}", e);
        std::process::exit(1);
    }
}
