//! System resource detection
//!
//! Detects total RAM and CPU core count (best effort) so the prompts
//! can show what this machine actually has.

#[cfg(any(target_os = "windows", target_os = "macos"))]
use std::process::Command;

/// Detected machine hardware
#[derive(Debug, Clone, Default)]
pub struct MachineSpecs {
    pub ram_total_mb: u64,
    pub cpu_cores: usize,
}

/// Probe the local machine (best effort)
pub fn detect() -> MachineSpecs {
    MachineSpecs {
        ram_total_mb: total_ram_mb().unwrap_or(0),
        cpu_cores: std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(0),
    }
}

/// Read total RAM from /proc/meminfo ("MemTotal:  16384000 kB")
#[cfg(target_os = "linux")]
fn total_ram_mb() -> Option<u64> {
    let meminfo = std::fs::read_to_string("/proc/meminfo").ok()?;
    for line in meminfo.lines() {
        if let Some(rest) = line.strip_prefix("MemTotal:") {
            let kb = rest.split_whitespace().next()?.parse::<u64>().ok()?;
            return Some(kb / 1024);
        }
    }
    None
}

/// Get total RAM via sysctl hw.memsize (returns bytes, we convert to MB)
#[cfg(target_os = "macos")]
fn total_ram_mb() -> Option<u64> {
    let output = Command::new("sysctl")
        .args(["-n", "hw.memsize"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let bytes_str = String::from_utf8_lossy(&output.stdout).trim().to_string();
    let bytes = bytes_str.parse::<u64>().ok()?;
    Some(bytes / 1024 / 1024)
}

/// Get total RAM via wmic (reported in KB)
#[cfg(target_os = "windows")]
fn total_ram_mb() -> Option<u64> {
    let output = Command::new("wmic")
        .args(["OS", "get", "TotalVisibleMemorySize", "/Value"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    for line in stdout.lines() {
        let line = line.trim();
        if let Some(value) = line.strip_prefix("TotalVisibleMemorySize=") {
            if let Ok(kb) = value.trim().parse::<u64>() {
                return Some(kb / 1024);
            }
        }
    }
    None
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn total_ram_mb() -> Option<u64> {
    None
}
