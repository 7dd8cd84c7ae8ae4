//! Catalog record types
//!
//! Defines the parsed catalog row and operator resource limit structures.

use serde::{Deserialize, Serialize};

/// One parsed catalog row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRecord {
    /// Source repository identifier (e.g. "TheBloke/Llama-2-7B-GGUF")
    pub repo: String,
    /// File name including extension(s)
    pub filename: String,
    /// Parameter count as published, e.g. "8B"
    pub params_raw: String,
    /// Size in bytes, as text
    pub size_raw: String,
}

/// Resource limits supplied by the operator for one run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceLimits {
    /// Available RAM in GB
    pub max_ram_gb: f64,
    /// CPU core count
    pub cpu_cores: f64,
}
