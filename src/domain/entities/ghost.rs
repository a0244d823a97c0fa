use super::process::ProcessRecord;
use crate::domain::ports::random::RandomSource;

/// Rightmost drift position; one step past it wraps back to column 0.
pub const MAX_OFFSET: usize = 50;

/// Starting offsets are drawn from `[0, INITIAL_SPREAD)`.
pub const INITIAL_SPREAD: usize = 20;

/// Per-tick probability that a row gets possessed.
pub const SPOOKY_CHANCE: f64 = 0.05;

/// Labels a possessed row can take.
pub const SPOOKY_NAMES: [&str; 6] = [
    "🧟 Zombie",
    "👻 Phantom",
    "💀 Skull",
    "🕷 Spider",
    "🦇 Bat",
    "🔥 Cursed",
];

/// Visual state of one process row.
///
/// `name` starts as the captured process name. Once a possession renames
/// it, the captured name is gone for good; later possessions only swap in
/// another label.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostProcess {
    pub pid: u32,
    pub name: String,
    pub cpu_percent: f64,
    /// Always within `0..=MAX_OFFSET`.
    pub offset: usize,
    /// Result of this tick's coin flip only.
    pub is_highlighted: bool,
}

impl GhostProcess {
    /// Wraps a captured record at the given starting offset.
    #[must_use]
    pub fn new(record: ProcessRecord, offset: usize) -> Self {
        Self {
            pid: record.pid,
            name: record.name,
            cpu_percent: record.cpu_percent,
            offset: offset % (MAX_OFFSET + 1),
            is_highlighted: false,
        }
    }

    /// Moves one column right, wrapping past [`MAX_OFFSET`].
    pub fn drift(&mut self) {
        self.offset += 1;
        if self.offset > MAX_OFFSET {
            self.offset = 0;
        }
    }

    /// Flips this tick's coin. On success the row is highlighted and
    /// renamed; otherwise it is un-highlighted and keeps its current name.
    pub fn haunt(&mut self, rng: &mut dyn RandomSource) {
        if rng.next_unit() < SPOOKY_CHANCE {
            let idx = rng.next_index(SPOOKY_NAMES.len());
            self.name = SPOOKY_NAMES[idx % SPOOKY_NAMES.len()].to_string();
            self.is_highlighted = true;
        } else {
            self.is_highlighted = false;
        }
    }
}
