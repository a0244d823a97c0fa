pub mod collector;
pub mod random;

pub use collector::{CollectionError, ProcessSnapshotProvider};
pub use random::RandomSource;
