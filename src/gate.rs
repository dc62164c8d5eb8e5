//! Process-level decision on whether ANSI output is permitted
//!
//! The gate probes the terminal lazily on first use and caches the answer.
//! An explicit [`ColorGate::set_enabled`] call overrides the probe for the
//! rest of the gate's lifetime.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use serde::Deserialize;

use crate::terminal::TerminalProbe;

/// User-facing color policy (`--color` flag / `color` config key)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Follow the TTY probe
    #[default]
    Auto,
    Always,
    Never,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("unknown color mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GateState {
    Unprobed,
    Detected(bool),
    Forced(bool),
}

/// Capability gate: answers "may I emit escape codes right now?"
pub struct ColorGate {
    probe: Arc<dyn TerminalProbe>,
    state: RwLock<GateState>,
}

impl ColorGate {
    pub fn new(probe: Arc<dyn TerminalProbe>) -> Self {
        Self {
            probe,
            state: RwLock::new(GateState::Unprobed),
        }
    }

    /// Current flag, probing the terminal on first call
    pub fn enabled(&self) -> bool {
        let state = *self.state.read().unwrap_or_else(PoisonError::into_inner);
        match state {
            GateState::Detected(on) | GateState::Forced(on) => on,
            GateState::Unprobed => self.detect(),
        }
    }

    fn detect(&self) -> bool {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        match *state {
            GateState::Detected(on) | GateState::Forced(on) => on,
            GateState::Unprobed => {
                let on = self.probe.is_tty();
                tracing::debug!(enabled = on, "probed stdout for color support");
                *state = GateState::Detected(on);
                on
            }
        }
    }

    /// Force the flag; auto-detection is off from here on
    pub fn set_enabled(&self, on: bool) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        if *state != GateState::Forced(on) {
            tracing::debug!(enabled = on, "color output forced");
        }
        *state = GateState::Forced(on);
    }

    /// Whether the flag came from an explicit override rather than the probe
    pub fn is_forced(&self) -> bool {
        matches!(
            *self.state.read().unwrap_or_else(PoisonError::into_inner),
            GateState::Forced(_)
        )
    }

    /// Apply a [`ColorMode`]; `Auto` leaves the current state alone
    pub fn apply_mode(&self, mode: ColorMode) {
        match mode {
            ColorMode::Auto => {}
            ColorMode::Always => self.set_enabled(true),
            ColorMode::Never => self.set_enabled(false),
        }
    }
}

impl fmt::Debug for ColorGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = *self.state.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("ColorGate").field("state", &state).finish()
    }
}
