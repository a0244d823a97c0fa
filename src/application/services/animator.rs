use crate::domain::entities::ghost::{GhostProcess, INITIAL_SPREAD};
use crate::domain::entities::process::ProcessRecord;
use crate::domain::ports::collector::{CollectionError, ProcessSnapshotProvider};
use crate::domain::ports::random::RandomSource;

/// Takes the one and only snapshot and turns it into animation rows.
///
/// # Errors
///
/// Returns the provider's `CollectionError` untouched; nothing is built.
pub fn haunt_snapshot(
    provider: &dyn ProcessSnapshotProvider,
    rng: &mut dyn RandomSource,
) -> Result<Vec<GhostProcess>, CollectionError> {
    let records = provider.list_processes()?;
    Ok(summon(records, rng))
}

/// Turns a snapshot into animation rows, each starting at a random offset
/// in `[0, INITIAL_SPREAD)`.
///
/// Snapshot order is kept: it is the top-to-bottom row order for the rest
/// of the run.
#[must_use]
pub fn summon(records: Vec<ProcessRecord>, rng: &mut dyn RandomSource) -> Vec<GhostProcess> {
    records
        .into_iter()
        .map(|record| {
            let offset = rng.next_index(INITIAL_SPREAD);
            GhostProcess::new(record, offset)
        })
        .collect()
}

/// Advances every row by one tick: drift one column, then flip the
/// possession coin.
///
/// Rows are neither added, removed nor reordered.
#[must_use]
pub fn advance(ghosts: Vec<GhostProcess>, rng: &mut dyn RandomSource) -> Vec<GhostProcess> {
    ghosts
        .into_iter()
        .map(|mut ghost| {
            ghost.drift();
            ghost.haunt(rng);
            ghost
        })
        .collect()
}
