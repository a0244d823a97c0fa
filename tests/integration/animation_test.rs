#![allow(clippy::expect_used)]

use ghostproc::application::services::animator::{advance, haunt_snapshot, summon};
use ghostproc::domain::entities::ghost::{GhostProcess, MAX_OFFSET, SPOOKY_NAMES};
use ghostproc::domain::entities::process::ProcessRecord;
use ghostproc::domain::ports::collector::{CollectionError, ProcessSnapshotProvider};
use ghostproc::domain::ports::random::RandomSource;
use ghostproc::infrastructure::random::std_random::StdRandomSource;
use ghostproc::presentation::tui::widgets::haunted_list::GhostFrame;

// ---------------------------------------------------------------------------
// Test doubles
// ---------------------------------------------------------------------------

struct FixedRandom(f64);

impl RandomSource for FixedRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }

    fn next_index(&mut self, len: usize) -> usize {
        len - 1
    }
}

struct MockProvider {
    records: Vec<ProcessRecord>,
}

impl ProcessSnapshotProvider for MockProvider {
    fn list_processes(&self) -> Result<Vec<ProcessRecord>, CollectionError> {
        Ok(self.records.clone())
    }
}

struct FailingProvider;

impl ProcessSnapshotProvider for FailingProvider {
    fn list_processes(&self) -> Result<Vec<ProcessRecord>, CollectionError> {
        Err(CollectionError::PermissionDenied("/proc".to_string()))
    }
}

fn snapshot() -> Vec<ProcessRecord> {
    vec![
        ProcessRecord::from_readings(1, Some("systemd".to_string()), Some(0.1)),
        ProcessRecord::from_readings(42, None, Some(3.0)),
        ProcessRecord::from_readings(100, Some("bash".to_string()), None),
        ProcessRecord::from_readings(731, Some("firefox".to_string()), Some(64.0)),
    ]
}

fn is_possessed(ghost: &GhostProcess) -> bool {
    SPOOKY_NAMES.contains(&ghost.name.as_str())
}

fn pids(ghosts: &[GhostProcess]) -> Vec<u32> {
    ghosts.iter().map(|g| g.pid).collect()
}

// ---------------------------------------------------------------------------
// Transition properties
// ---------------------------------------------------------------------------

#[test]
fn seeded_run_keeps_offsets_in_range_and_order_stable() {
    let mut rng = StdRandomSource::with_seed(2024);
    let mut ghosts = summon(snapshot(), &mut rng);
    let order = pids(&ghosts);

    for _ in 0..500 {
        let before: Vec<usize> = ghosts.iter().map(|g| g.offset).collect();
        ghosts = advance(ghosts, &mut rng);

        assert_eq!(pids(&ghosts), order, "rows must never move");
        for (prev, ghost) in before.iter().zip(&ghosts) {
            assert!(ghost.offset <= MAX_OFFSET);
            assert_eq!(ghost.offset, (prev + 1) % (MAX_OFFSET + 1));
        }
    }
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = |seed| {
        let mut rng = StdRandomSource::with_seed(seed);
        let mut ghosts = summon(snapshot(), &mut rng);
        for _ in 0..100 {
            ghosts = advance(ghosts, &mut rng);
        }
        GhostFrame::compose(&ghosts).to_string()
    };
    assert_eq!(run(7), run(7));
}

#[test]
fn always_low_draw_possesses_everything() {
    let mut rng = FixedRandom(0.0);
    let ghosts = advance(summon(snapshot(), &mut rng), &mut rng);

    for ghost in &ghosts {
        assert!(ghost.is_highlighted);
        assert!(is_possessed(ghost));
        assert_eq!(ghost.name, SPOOKY_NAMES[SPOOKY_NAMES.len() - 1]);
    }
}

#[test]
fn always_high_draw_leaves_names_alone() {
    let mut rng = FixedRandom(0.5);
    let ghosts = advance(summon(snapshot(), &mut rng), &mut rng);

    let names: Vec<&str> = ghosts.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["systemd", "unknown", "bash", "firefox"]);
    assert!(ghosts.iter().all(|g| !g.is_highlighted));
}

#[test]
fn possession_outlives_the_highlight() {
    let mut ghosts = summon(snapshot(), &mut FixedRandom(0.5));
    ghosts = advance(ghosts, &mut FixedRandom(0.0));
    ghosts = advance(ghosts, &mut FixedRandom(0.5));

    assert!(ghosts.iter().all(|g| !g.is_highlighted));
    assert!(ghosts.iter().all(is_possessed));
}

// ---------------------------------------------------------------------------
// Snapshot → first frame
// ---------------------------------------------------------------------------

#[test]
fn snapshot_renders_one_line_per_process_plus_hint() {
    let provider = MockProvider {
        records: snapshot(),
    };
    let ghosts = haunt_snapshot(&provider, &mut FixedRandom(0.5)).expect("snapshot");
    let text = GhostFrame::compose(&ghosts).to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), snapshot().len() + 2);
    assert_eq!(lines[lines.len() - 2], "");
    assert_eq!(lines[lines.len() - 1], "Press q to quit.");
    // Busy process is wrapped in emphasis, quiet ones are not.
    assert!(lines[3].ends_with("731: \x1b[31mfirefox\x1b[0m"));
    assert!(lines[2].ends_with("100: bash"));
}

#[test]
fn snapshot_failure_yields_no_rows() {
    let err = haunt_snapshot(&FailingProvider, &mut FixedRandom(0.5))
        .expect_err("snapshot should fail");
    assert!(matches!(err, CollectionError::PermissionDenied(_)));
    assert_eq!(err.to_string(), "permission denied: /proc");
}

#[test]
fn empty_snapshot_is_not_a_failure() {
    let provider = MockProvider {
        records: Vec::new(),
    };
    let ghosts = haunt_snapshot(&provider, &mut FixedRandom(0.5)).expect("empty snapshot");
    assert!(ghosts.is_empty());
    assert_eq!(GhostFrame::compose(&ghosts).to_string(), "\nPress q to quit.");
}
