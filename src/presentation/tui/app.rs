use std::fmt;
use std::io;
use std::time::Duration;

use anyhow::Context;
use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use futures::StreamExt;
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::application::services::animator::advance;
use crate::domain::entities::ghost::GhostProcess;
use crate::domain::ports::random::RandomSource;
use crate::presentation::tui::event::{AppEvent, RunState};
use crate::presentation::tui::widgets::haunted_list::{render_haunted_list, GhostFrame};

/// Sending half of the loop's event queue. An `Err` means terminal input
/// broke and the loop must stop.
pub type EventSender = mpsc::UnboundedSender<io::Result<AppEvent>>;
pub type EventReceiver = mpsc::UnboundedReceiver<io::Result<AppEvent>>;

/// Display state machine: the rows, the randomness that drives them and
/// whether the loop is still running.
pub struct App {
    ghosts: Vec<GhostProcess>,
    error: Option<String>,
    rng: Box<dyn RandomSource>,
    state: RunState,
}

impl App {
    #[must_use]
    pub fn new(ghosts: Vec<GhostProcess>, rng: Box<dyn RandomSource>) -> Self {
        Self {
            ghosts,
            error: None,
            rng,
            state: RunState::Running,
        }
    }

    /// Shows `message` in place of the rows for as long as the loop runs.
    #[must_use]
    pub fn with_error(mut self, message: impl fmt::Display) -> Self {
        self.error = Some(message.to_string());
        self
    }

    #[must_use]
    pub fn ghosts(&self) -> &[GhostProcess] {
        &self.ghosts
    }

    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    #[must_use]
    pub fn frame(&self) -> GhostFrame {
        match self.error {
            Some(ref message) => GhostFrame::error(message),
            None => GhostFrame::compose(&self.ghosts),
        }
    }

    /// Applies one event. Returns the frame to draw when the screen changed.
    pub fn handle_event(&mut self, event: AppEvent) -> Option<GhostFrame> {
        if self.state == RunState::Terminating {
            return None;
        }
        match event {
            AppEvent::Tick => {
                let ghosts = std::mem::take(&mut self.ghosts);
                self.ghosts = advance(ghosts, self.rng.as_mut());
                Some(self.frame())
            }
            AppEvent::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return None;
                }
                self.state = self.state.on_key(key);
                if self.state == RunState::Terminating {
                    tracing::info!("Quit requested");
                }
                None
            }
        }
    }
}

/// Emits [`AppEvent::Tick`] every `period`, each tick arming the next.
///
/// Stops on [`TickScheduler::stop`] or once the receiving side is gone.
pub struct TickScheduler {
    handle: JoinHandle<()>,
}

impl TickScheduler {
    #[must_use]
    pub fn spawn(period: Duration, events: EventSender) -> Self {
        let handle = tokio::spawn(async move {
            loop {
                tokio::time::sleep(period).await;
                if events.send(Ok(AppEvent::Tick)).is_err() {
                    break;
                }
            }
        });
        Self { handle }
    }

    pub fn stop(self) {
        self.handle.abort();
    }
}

/// Forwards key presses from the terminal into the event queue. A read
/// error is forwarded once and ends the reader.
fn spawn_key_reader(events: EventSender) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut stream = EventStream::new();
        while let Some(next) = stream.next().await {
            let forwarded = match next {
                Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                    Ok(AppEvent::Key(key))
                }
                Ok(_) => continue,
                Err(e) => Err(e),
            };
            let failed = forwarded.is_err();
            if events.send(forwarded).is_err() || failed {
                break;
            }
        }
    })
}

/// Restore the terminal to its normal state.
fn restore_terminal() {
    if let Err(e) = disable_raw_mode() {
        eprintln!("Failed to disable raw mode: {e}");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen) {
        eprintln!("Failed to leave alternate screen: {e}");
    }
}

/// Launch the haunted process display and run it until the user quits.
///
/// # Errors
///
/// Returns an error if terminal setup, drawing, or reading input fails.
pub async fn run_tui(
    ghosts: Vec<GhostProcess>,
    rng: Box<dyn RandomSource>,
    tick_interval: Duration,
) -> anyhow::Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        // Raw mode is on but the alternate screen is not; undo raw mode first
        let _ = disable_raw_mode();
        return Err(e).context("Failed to enter alternate screen");
    }

    // Install panic hook so terminal is restored even on panic
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal();
        default_hook(info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = match Terminal::new(backend) {
        Ok(terminal) => terminal,
        Err(e) => {
            restore_terminal();
            let _ = std::panic::take_hook();
            return Err(e).context("Failed to create terminal");
        }
    };

    tracing::info!(
        "Haunting {} processes, tick every {}ms",
        ghosts.len(),
        tick_interval.as_millis()
    );

    let (tx, mut rx) = mpsc::unbounded_channel();
    let scheduler = TickScheduler::spawn(tick_interval, tx.clone());
    let key_reader = spawn_key_reader(tx);

    let mut app = App::new(ghosts, rng);
    let result = run_app_loop(&mut terminal, &mut app, &mut rx).await;

    scheduler.stop();
    key_reader.abort();

    // Restore terminal on normal exit
    restore_terminal();
    let _ = terminal.show_cursor();

    // Restore the default panic hook
    let _ = std::panic::take_hook();

    if let Err(ref e) = result {
        tracing::error!("Display loop failed: {e:#}");
    }
    result
}

/// Draws the current frame, then serves events one at a time until the
/// app is terminating or every event source is gone.
///
/// # Errors
///
/// Returns an error if drawing fails or an input error arrives on the queue.
pub async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &mut EventReceiver,
) -> anyhow::Result<()> {
    draw(terminal, &app.frame())?;

    while app.state() == RunState::Running {
        let Some(event) = events.recv().await else {
            tracing::warn!("All event sources closed, stopping");
            break;
        };
        let event = event.context("Failed to read terminal input")?;
        tracing::trace!(?event, "event");
        if let Some(frame) = app.handle_event(event) {
            draw(terminal, &frame)?;
        }
    }
    Ok(())
}

fn draw<B: Backend>(terminal: &mut Terminal<B>, ghost_frame: &GhostFrame) -> anyhow::Result<()> {
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_haunted_list(frame, ghost_frame, area);
        })
        .context("Failed to draw frame")?;
    Ok(())
}
