/// Name substituted when the OS will not tell us what a process is called.
pub const UNKNOWN_NAME: &str = "unknown";

/// One OS process as captured by the startup snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    /// Point-in-time CPU reading, `0.0` when it could not be read.
    pub cpu_percent: f64,
}

impl ProcessRecord {
    /// Builds a record from possibly-missing readings.
    ///
    /// A missing or empty name becomes [`UNKNOWN_NAME`]; a missing or
    /// non-finite CPU reading becomes `0.0`.
    #[must_use]
    pub fn from_readings(pid: u32, name: Option<String>, cpu_percent: Option<f64>) -> Self {
        let name = name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let cpu_percent = cpu_percent.filter(|c| c.is_finite()).unwrap_or(0.0);
        Self {
            pid,
            name,
            cpu_percent,
        }
    }
}
