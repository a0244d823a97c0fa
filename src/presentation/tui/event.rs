use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events handled by the TUI application loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Periodic animation tick.
    Tick,
    /// Keyboard input.
    Key(KeyEvent),
}

/// Lifecycle of the display loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Running,
    Terminating,
}

impl RunState {
    /// State after receiving `key`. Only `q` and Ctrl+C end the run; once
    /// terminating, nothing brings the loop back.
    #[must_use]
    pub fn on_key(self, key: KeyEvent) -> Self {
        match self {
            Self::Running if is_quit_key(key) => Self::Terminating,
            other => other,
        }
    }
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Terminating => write!(f, "terminating"),
        }
    }
}

fn is_quit_key(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
