pub mod ghost;
pub mod process;

pub use ghost::{GhostProcess, MAX_OFFSET, SPOOKY_NAMES};
pub use process::ProcessRecord;
