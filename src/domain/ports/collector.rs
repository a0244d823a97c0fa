use thiserror::Error;

use crate::domain::entities::process::ProcessRecord;

#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("process listing is not supported on this platform")]
    Unsupported,
    #[error("failed to list processes: {0}")]
    MetricsUnavailable(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
}

pub trait ProcessSnapshotProvider: Send + Sync {
    /// List every visible process, sorted by ascending PID.
    ///
    /// Per-process read failures are absorbed into the record (see
    /// [`ProcessRecord::from_readings`]) and never fail the whole call.
    ///
    /// # Errors
    ///
    /// Returns `CollectionError` if the process table itself cannot be read.
    fn list_processes(&self) -> Result<Vec<ProcessRecord>, CollectionError>;
}
