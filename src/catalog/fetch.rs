//! Catalog download
//!
//! Retrieves the raw catalog table from its remote location.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while retrieving the catalog
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Fetch the raw catalog text from `url`.
///
/// One attempt, no retry. Any transport error or non-2xx status aborts
/// the run; there is no catalog to select from without it.
pub async fn fetch_catalog(url: &str) -> Result<String, FetchError> {
    tracing::info!("Fetching catalog from: {}", url);
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let response = client
        .get(url)
        .header("User-Agent", "modelpick/0.1.0")
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    Ok(response.text().await?)
}
