//! Boundary calls into the terminal: TTY detection and column count

use std::io::stdout;

use crossterm::tty::IsTty;

/// Width used when the terminal size cannot be determined
pub const DEFAULT_WIDTH: usize = 80;

/// Queries the environment about standard output
pub trait TerminalProbe: Send + Sync {
    /// Whether stdout is attached to an interactive terminal
    fn is_tty(&self) -> bool;

    /// Current column count, if stdout is a terminal and the size is known
    fn columns(&self) -> Option<u16>;
}

/// Probe backed by the real process stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutProbe;

impl TerminalProbe for StdoutProbe {
    fn is_tty(&self) -> bool {
        stdout().is_tty()
    }

    fn columns(&self) -> Option<u16> {
        if let Some(cols) = columns_from_env() {
            return Some(cols);
        }
        if !self.is_tty() {
            return None;
        }
        match crossterm::terminal::size() {
            Ok((cols, _)) if cols > 0 => Some(cols),
            Ok(_) => None,
            Err(err) => {
                tracing::debug!(%err, "terminal size probe failed");
                None
            }
        }
    }
}

/// A positive `COLUMNS` value takes precedence over the platform query
fn columns_from_env() -> Option<u16> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.trim().parse::<u16>().ok())
        .filter(|cols| *cols > 0)
}

/// Probe with fixed answers, for scripted output and tests
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedProbe {
    pub tty: bool,
    pub columns: Option<u16>,
}

impl FixedProbe {
    pub fn new(tty: bool, columns: Option<u16>) -> Self {
        Self { tty, columns }
    }

    /// Redirected output: not a terminal, no size
    pub fn piped() -> Self {
        Self::new(false, None)
    }
}

impl TerminalProbe for FixedProbe {
    fn is_tty(&self) -> bool {
        self.tty
    }

    fn columns(&self) -> Option<u16> {
        self.columns
    }
}

/// Resolve a usable width from a probe, falling back to [`DEFAULT_WIDTH`]
pub fn detect_width(probe: &dyn TerminalProbe) -> usize {
    probe
        .columns()
        .map(usize::from)
        .unwrap_or(DEFAULT_WIDTH)
}
