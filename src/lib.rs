//! ANSI terminal styling with TTY-aware auto-disable and named themes.
//!
//! ```
//! use cb9_style::{palette, FixedProbe, Styler};
//!
//! let styler = Styler::with_probe(FixedProbe::piped());
//! assert_eq!(styler.style_text("hi", Some(&palette::RED), None, None), "hi");
//!
//! styler.set_colors_enabled(true);
//! assert_eq!(
//!     styler.style_text("hi", Some(&palette::RED), None, None),
//!     "\x1b[31mhi\x1b[0m"
//! );
//! ```

pub mod ansi;
pub mod config;
pub mod error;
pub mod gate;
pub mod layout;
pub mod logging;
pub mod styler;
pub mod terminal;
pub mod theme;

pub use ansi::{bg256, bg_rgb, color256, palette, rgb, Directive, DirectiveKind};
pub use config::Config;
pub use error::{Error, Result};
pub use gate::{ColorGate, ColorMode};
pub use layout::{Banner, Footer, Header};
pub use styler::{
    apply_theme, banner, colors_enabled, current_theme, list_themes, set_colors_enabled,
    style_text, theme_color, Styler,
};
pub use terminal::{FixedProbe, StdoutProbe, TerminalProbe};
pub use theme::{Role, Theme, ThemeRegistry};
