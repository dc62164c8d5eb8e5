use std::borrow::Cow;

use super::Theme;
use crate::ansi::palette::{
    BLUE, BOLD, BRIGHT_BLACK, BRIGHT_BLUE, BRIGHT_CYAN, BRIGHT_GREEN, BRIGHT_MAGENTA,
    BRIGHT_WHITE, BRIGHT_YELLOW, CYAN, DIM, GREEN, MAGENTA, RED, WHITE, YELLOW,
};

pub const DEFAULT: Theme = Theme {
    name: Cow::Borrowed("default"),
    primary: CYAN,
    secondary: MAGENTA,
    success: GREEN,
    warning: YELLOW,
    error: RED,
    info: BRIGHT_CYAN,
    highlight: BRIGHT_YELLOW,
    muted: DIM,
};

pub const OCEAN: Theme = Theme {
    name: Cow::Borrowed("ocean"),
    primary: BLUE,
    secondary: CYAN,
    success: GREEN,
    warning: YELLOW,
    error: RED,
    info: BRIGHT_BLUE,
    highlight: BRIGHT_CYAN,
    muted: BRIGHT_BLACK,
};

pub const FOREST: Theme = Theme {
    name: Cow::Borrowed("forest"),
    primary: GREEN,
    secondary: CYAN,
    success: BRIGHT_GREEN,
    warning: YELLOW,
    error: RED,
    info: BRIGHT_CYAN,
    highlight: BRIGHT_GREEN,
    muted: DIM,
};

pub const SUNSET: Theme = Theme {
    name: Cow::Borrowed("sunset"),
    primary: MAGENTA,
    secondary: YELLOW,
    success: GREEN,
    warning: BRIGHT_YELLOW,
    error: RED,
    info: BRIGHT_MAGENTA,
    highlight: BRIGHT_YELLOW,
    muted: DIM,
};

pub const MONO: Theme = Theme {
    name: Cow::Borrowed("mono"),
    primary: WHITE,
    secondary: BRIGHT_BLACK,
    success: WHITE,
    warning: WHITE,
    error: WHITE,
    info: BRIGHT_WHITE,
    highlight: BOLD,
    muted: DIM,
};

pub static BUILTIN_THEMES: [Theme; 5] = [DEFAULT, OCEAN, FOREST, SUNSET, MONO];

/// Built-in theme names, in listing order
pub const THEME_NAMES: [&str; 5] = ["default", "ocean", "forest", "sunset", "mono"];
