use std::fmt;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::Paragraph,
    Frame,
};

use crate::domain::entities::ghost::GhostProcess;

/// Names of processes above this CPU reading are always emphasised.
pub const CPU_HIGHLIGHT_PERCENT: f64 = 20.0;

pub const QUIT_HINT: &str = "Press q to quit.";

/// Terminal sequence that turns emphasis on (red foreground).
pub const EMPHASIS: &str = "\x1b[31m";
/// Terminal sequence that clears all attributes.
pub const RESET: &str = "\x1b[0m";

/// One composed row: indentation, pid label and (maybe emphasised) name.
#[derive(Debug, Clone, PartialEq)]
pub struct GhostLine {
    pub indent: usize,
    pub pid: u32,
    pub name: String,
    pub emphasized: bool,
}

/// A whole screen, composed once and encoded either as plain terminal
/// text (`Display`) or as ratatui text (`to_text`).
#[derive(Debug, Clone, PartialEq)]
pub enum GhostFrame {
    /// Rows in display order; index is the screen row.
    Rows(Vec<GhostLine>),
    Error(String),
}

impl GhostFrame {
    /// Lays out `ghosts` top to bottom in the order given.
    #[must_use]
    pub fn compose(ghosts: &[GhostProcess]) -> Self {
        Self::Rows(ghosts.iter().map(compose_line).collect())
    }

    /// Frame shown instead of the rows when there is nothing to animate
    /// because an upstream step failed.
    #[must_use]
    pub fn error(message: impl fmt::Display) -> Self {
        Self::Error(message.to_string())
    }

    #[must_use]
    pub fn to_text(&self) -> Text<'static> {
        let hint = Line::from(QUIT_HINT);
        match self {
            Self::Rows(lines) => {
                let emphasis = Style::default().fg(Color::Red);
                let mut out: Vec<Line<'static>> = lines
                    .iter()
                    .map(|l| {
                        let name = if l.emphasized {
                            Span::styled(l.name.clone(), emphasis)
                        } else {
                            Span::raw(l.name.clone())
                        };
                        Line::from(vec![
                            Span::raw(format!("{:indent$}{}: ", "", l.pid, indent = l.indent)),
                            name,
                        ])
                    })
                    .collect();
                out.push(Line::default());
                out.push(hint);
                Text::from(out)
            }
            Self::Error(message) => Text::from(vec![Line::from(format!("Error: {message}")), hint]),
        }
    }
}

impl fmt::Display for GhostFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rows(lines) => {
                for l in lines {
                    write!(f, "{:indent$}{}: ", "", l.pid, indent = l.indent)?;
                    if l.emphasized {
                        writeln!(f, "{EMPHASIS}{}{RESET}", l.name)?;
                    } else {
                        writeln!(f, "{}", l.name)?;
                    }
                }
                write!(f, "\n{QUIT_HINT}")
            }
            Self::Error(message) => write!(f, "Error: {message}\n{QUIT_HINT}"),
        }
    }
}

fn compose_line(ghost: &GhostProcess) -> GhostLine {
    GhostLine {
        indent: ghost.offset,
        pid: ghost.pid,
        name: ghost.name.clone(),
        emphasized: ghost.cpu_percent > CPU_HIGHLIGHT_PERCENT || ghost.is_highlighted,
    }
}

/// Draw the frame into `area`, starting at the top-left corner.
pub fn render_haunted_list(frame: &mut Frame, ghost_frame: &GhostFrame, area: Rect) {
    frame.render_widget(Paragraph::new(ghost_frame.to_text()), area);
}
