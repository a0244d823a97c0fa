use std::sync::Mutex;

use sysinfo::{System, ThreadKind};

use crate::domain::entities::process::ProcessRecord;
use crate::domain::ports::collector::{CollectionError, ProcessSnapshotProvider};

/// Lists processes using the `sysinfo` crate.
///
/// Uses `Mutex<System>` for interior mutability since the provider trait
/// takes `&self` but `sysinfo::System` needs `&mut self` for refresh.
///
/// CPU usage is a delta between two refreshes: [`SysinfoCollector::new`]
/// takes the first one, so callers should wait at least
/// [`sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`] before calling
/// [`ProcessSnapshotProvider::list_processes`].
pub struct SysinfoCollector {
    sys: Mutex<System>,
}

impl SysinfoCollector {
    /// Creates a collector with a first process refresh already taken.
    #[must_use]
    pub fn new() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();
        Self {
            sys: Mutex::new(sys),
        }
    }
}

impl Default for SysinfoCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessSnapshotProvider for SysinfoCollector {
    fn list_processes(&self) -> Result<Vec<ProcessRecord>, CollectionError> {
        if !sysinfo::IS_SUPPORTED_SYSTEM {
            return Err(CollectionError::Unsupported);
        }

        let mut sys = self.sys.lock().map_err(|e| {
            CollectionError::MetricsUnavailable(format!("system lock poisoned: {e}"))
        })?;
        sys.refresh_all();

        let records = collect_records(&sys);
        drop(sys);

        if records.is_empty() {
            tracing::warn!("Process table is empty");
        } else {
            tracing::debug!("Captured {} processes", records.len());
        }
        Ok(records)
    }
}

/// Userland threads show up in sysinfo's table next to their process;
/// only processes (and kernel threads, which own a /proc PID) are kept.
fn collect_records(sys: &System) -> Vec<ProcessRecord> {
    let mut records: Vec<ProcessRecord> = sys
        .processes()
        .values()
        .filter(|proc_info| proc_info.thread_kind() != Some(ThreadKind::Userland))
        .map(|proc_info| {
            let name = proc_info.name().to_string_lossy().to_string();
            ProcessRecord::from_readings(
                proc_info.pid().as_u32(),
                Some(name),
                Some(f64::from(proc_info.cpu_usage())),
            )
        })
        .collect();
    records.sort_by_key(|r| r.pid);
    records
}
