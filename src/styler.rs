//! Styling context and the process-wide default instance
//!
//! A [`Styler`] bundles the capability gate, the theme registry and the
//! terminal probe. Every method takes `&self`, so one instance can be shared
//! freely; tests build their own instead of touching the global one.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::ansi::{compose, Directive, DirectiveKind};
use crate::config::Config;
use crate::error::Result;
use crate::gate::ColorGate;
use crate::layout::Banner;
use crate::terminal::{detect_width, StdoutProbe, TerminalProbe};
use crate::theme::{Role, Theme, ThemeRegistry};

pub struct Styler {
    probe: Arc<dyn TerminalProbe>,
    gate: ColorGate,
    themes: ThemeRegistry,
}

impl Default for Styler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Styler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Styler")
            .field("gate", &self.gate)
            .field("themes", &self.themes)
            .finish_non_exhaustive()
    }
}

impl Styler {
    /// Styler probing the real stdout
    pub fn new() -> Self {
        Self::with_probe(StdoutProbe)
    }

    pub fn with_probe(probe: impl TerminalProbe + 'static) -> Self {
        let probe: Arc<dyn TerminalProbe> = Arc::new(probe);
        Self {
            gate: ColorGate::new(Arc::clone(&probe)),
            probe,
            themes: ThemeRegistry::default(),
        }
    }

    /// Apply color mode and theme settings from a loaded config
    pub fn configure(&self, config: &Config) {
        self.gate.apply_mode(config.color_mode());
        self.themes
            .apply_theme(Theme::from_config(config.theme.as_deref(), Some(&config.colors)));
    }

    pub fn gate(&self) -> &ColorGate {
        &self.gate
    }

    pub fn themes(&self) -> &ThemeRegistry {
        &self.themes
    }

    pub fn colors_enabled(&self) -> bool {
        self.gate.enabled()
    }

    pub fn set_colors_enabled(&self, on: bool) {
        self.gate.set_enabled(on);
    }

    /// Compose `text` with the given directives, or return it untouched when
    /// colors are disabled
    pub fn style_text(
        &self,
        text: &str,
        fg: Option<&Directive>,
        bg: Option<&Directive>,
        style: Option<&Directive>,
    ) -> String {
        if !self.colors_enabled() {
            return text.to_string();
        }
        compose(text, fg, bg, style)
    }

    /// Style `text` with one directive, placed in the slot its kind implies
    pub fn apply(&self, text: &str, directive: &Directive) -> String {
        match directive.kind() {
            DirectiveKind::Foreground => self.style_text(text, Some(directive), None, None),
            DirectiveKind::Background => self.style_text(text, None, Some(directive), None),
            DirectiveKind::Style => self.style_text(text, None, None, Some(directive)),
        }
    }

    /// Style `text` with the active theme's directive for `role`
    pub fn paint(&self, text: &str, role: Role) -> String {
        self.apply(text, &self.themes.color(role))
    }

    pub fn apply_theme(&self, theme: Theme) {
        self.themes.apply_theme(theme);
    }

    pub fn theme_color(&self, role: &str) -> Result<Directive> {
        self.themes.theme_color(role)
    }

    pub fn current_theme(&self) -> Theme {
        self.themes.current_theme()
    }

    pub fn list_themes(&self) -> &'static [&'static str] {
        self.themes.list_themes()
    }

    /// Terminal width, or the fallback when stdout is not a terminal
    pub fn terminal_width(&self) -> usize {
        detect_width(self.probe.as_ref())
    }
}

static GLOBAL: OnceLock<Styler> = OnceLock::new();

/// The process-wide styler, created on first use
pub fn global() -> &'static Styler {
    GLOBAL.get_or_init(Styler::new)
}

pub fn colors_enabled() -> bool {
    global().colors_enabled()
}

pub fn set_colors_enabled(on: bool) {
    global().set_colors_enabled(on);
}

pub fn style_text(
    text: &str,
    fg: Option<&Directive>,
    bg: Option<&Directive>,
    style: Option<&Directive>,
) -> String {
    global().style_text(text, fg, bg, style)
}

pub fn apply_theme(theme: Theme) {
    global().apply_theme(theme);
}

pub fn theme_color(role: &str) -> Result<Directive> {
    global().theme_color(role)
}

pub fn current_theme() -> Theme {
    global().current_theme()
}

pub fn list_themes() -> &'static [&'static str] {
    global().list_themes()
}

/// Print a banner with the default styling through the global styler
pub fn banner(text: &str) {
    Banner::new(text).print(global());
}
