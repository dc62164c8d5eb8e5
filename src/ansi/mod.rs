//! ANSI escape directives and their composition

mod compose;
mod directive;
pub mod palette;

pub use compose::compose;
pub use directive::{bg256, bg_rgb, color256, rgb, Directive, DirectiveKind, CSI};
pub use palette::{parse_background, parse_color, parse_style};
