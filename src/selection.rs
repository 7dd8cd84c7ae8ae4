//! Eligibility and ranking
//!
//! Filters catalog records by machine resources and picks the largest
//! parameter count that fits.

use crate::types::model::{ModelRecord, ResourceLimits};

const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Parse a byte-count string into GB. Unparseable sizes yield `None`.
pub fn parse_size(size_raw: &str) -> Option<f64> {
    size_raw.parse::<f64>().ok().map(|bytes| bytes / BYTES_PER_GB)
}

/// Parse a parameter count like "8B" or "1.5B" into billions.
///
/// A bare number ("3") is read as already being in billions. Empty or
/// non-numeric input yields `None`.
pub fn parse_params(params_raw: &str) -> Option<f64> {
    if params_raw.is_empty() {
        return None;
    }
    let number = params_raw
        .strip_suffix('B')
        .or_else(|| params_raw.strip_suffix('b'))
        .unwrap_or(params_raw);
    number.parse::<f64>().ok()
}

/// Maximum permitted parameter count (billions) for a CPU core count.
pub fn cpu_param_limit(cpu_cores: f64) -> f64 {
    if cpu_cores < 4.0 {
        2.0
    } else if cpu_cores < 8.0 {
        8.0
    } else {
        f64::INFINITY
    }
}

/// Pick the eligible record with the strictly highest parameter count.
///
/// A record is eligible when its size parses and fits in RAM and its
/// parameter count parses and fits under the CPU ceiling. Ties keep the
/// earliest record. Returns `None` when nothing fits.
pub fn select_best(records: &[ModelRecord], limits: ResourceLimits) -> Option<&ModelRecord> {
    let ceiling = cpu_param_limit(limits.cpu_cores);
    let mut best: Option<&ModelRecord> = None;
    let mut best_params = -1.0_f64;
    for record in records {
        let Some(size_gb) = parse_size(&record.size_raw) else {
            continue;
        };
        if size_gb > limits.max_ram_gb {
            continue;
        }
        let Some(params) = parse_params(&record.params_raw) else {
            continue;
        };
        if params > ceiling {
            continue;
        }
        if params > best_params {
            best_params = params;
            best = Some(record);
        }
    }
    best
}

/// Get a human-readable size string
pub fn format_size(bytes: u64) -> String {
    let bytes = bytes as f64;
    if bytes < 1024.0 {
        format!("{} B", bytes as u64)
    } else if bytes < 1024.0 * 1024.0 {
        format!("{:.2} KB", bytes / 1024.0)
    } else if bytes < 1024.0 * 1024.0 * 1024.0 {
        format!("{:.2} MB", bytes / (1024.0 * 1024.0))
    } else {
        format!("{:.2} GB", bytes / (1024.0 * 1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(params: &str, size: &str) -> ModelRecord {
        ModelRecord {
            repo: "test/repo".to_string(),
            filename: "model.gguf".to_string(),
            params_raw: params.to_string(),
            size_raw: size.to_string(),
        }
    }

    #[test]
    fn test_parse_params() {
        assert_eq!(parse_params("8B"), Some(8.0));
        assert_eq!(parse_params("1.5B"), Some(1.5));
        assert_eq!(parse_params("4b"), Some(4.0));
        assert_eq!(parse_params("3"), Some(3.0));
        assert_eq!(parse_params(""), None);
        assert_eq!(parse_params("abc"), None);
        assert_eq!(parse_params("B"), None);
    }

    #[test]
    fn test_parse_size() {
        let one_gb = parse_size("1073741824").unwrap();
        assert!((one_gb - 1.0).abs() < 1e-9);
        assert_eq!(parse_size("bad"), None);
        assert_eq!(parse_size(""), None);
    }

    #[test]
    fn test_cpu_param_limit() {
        assert_eq!(cpu_param_limit(0.0), 2.0);
        assert_eq!(cpu_param_limit(2.0), 2.0);
        assert_eq!(cpu_param_limit(4.0), 8.0);
        assert_eq!(cpu_param_limit(7.9), 8.0);
        assert_eq!(cpu_param_limit(8.0), f64::INFINITY);
    }

    #[test]
    fn test_select_best_highest_params_wins() {
        // 1 GB and 2 GB files, all under an 8 GB RAM budget
        let records = vec![
            record("2B", "1073741824"),
            record("4B", "2147483648"),
            record("1.5B", "1073741824"),
        ];
        let limits = ResourceLimits {
            max_ram_gb: 8.0,
            cpu_cores: 4.0,
        };
        let best = select_best(&records, limits).unwrap();
        assert_eq!(best.params_raw, "4B");
    }

    #[test]
    fn test_select_best_excludes_oversized() {
        // 100 GB file exceeds RAM even though its params fit the ceiling
        let records = vec![
            record("4B", "2147483648"),
            record("8B", "107374182400"),
        ];
        let limits = ResourceLimits {
            max_ram_gb: 8.0,
            cpu_cores: 4.0,
        };
        let best = select_best(&records, limits).unwrap();
        assert_eq!(best.params_raw, "4B");
    }

    #[test]
    fn test_select_best_respects_cpu_ceiling() {
        // 2 cores caps params at 2B regardless of RAM headroom
        let records = vec![
            record("8B", "1073741824"),
            record("2B", "1073741824"),
        ];
        let limits = ResourceLimits {
            max_ram_gb: 64.0,
            cpu_cores: 2.0,
        };
        let best = select_best(&records, limits).unwrap();
        assert_eq!(best.params_raw, "2B");
    }

    #[test]
    fn test_select_best_tie_keeps_first_seen() {
        let mut first = record("4B", "1073741824");
        first.filename = "first.gguf".to_string();
        let mut second = record("4B", "1073741824");
        second.filename = "second.gguf".to_string();
        let limits = ResourceLimits {
            max_ram_gb: 8.0,
            cpu_cores: 4.0,
        };
        let records = [first, second];
        let best = select_best(&records, limits).unwrap();
        assert_eq!(best.filename, "first.gguf");
    }

    #[test]
    fn test_select_best_skips_unparseable() {
        let records = vec![
            record("abc", "1073741824"),
            record("4B", "not a size"),
            record("", "1073741824"),
        ];
        let limits = ResourceLimits {
            max_ram_gb: 8.0,
            cpu_cores: 8.0,
        };
        assert!(select_best(&records, limits).is_none());
    }

    #[test]
    fn test_select_best_empty() {
        let limits = ResourceLimits {
            max_ram_gb: 8.0,
            cpu_cores: 4.0,
        };
        assert!(select_best(&[], limits).is_none());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
        assert_eq!(format_size(4081004224), "3.80 GB");
    }
}
