use serde::{Deserialize, Serialize};

use super::printer::PrinterStatus;

/// How often the shell fires `SystemEvent::StatsTick`.
pub const STATS_POLL_INTERVAL_SECONDS: u64 = 5;

/// System statistics polled from the device.
///
/// The display fields arrive pre-formatted (units included); the raw
/// percentages come along for gauges.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SystemStats {
    pub temperature: String,
    pub cpu_percent: String,
    pub ram_used: String,
    pub ram_percent: String,
    #[serde(default)]
    pub raw_cpu_percent: f64,
    #[serde(default)]
    pub raw_ram_percent: f64,
    #[serde(default)]
    pub printers: Vec<PrinterStatus>,
}

/// Form payload for the hostname endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HostnameRequest {
    pub hostname: String,
}

/// Client-side hostname validation, mirroring what the device accepts.
///
/// Returns the trimmed hostname, or the alert text for the violation.
pub fn validate_hostname(hostname: &str) -> Result<String, &'static str> {
    let trimmed = hostname.trim();
    if trimmed.is_empty() {
        return Err("Please enter a hostname");
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err("The hostname may only contain letters, digits and hyphens");
    }
    Ok(trimmed.to_string())
}
