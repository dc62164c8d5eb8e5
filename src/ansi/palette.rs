//! Predefined directives and name-based color parsing
//!
//! | Group              | SGR range | Example          |
//! |--------------------|-----------|------------------|
//! | Foreground         | 30-37     | `ESC[31m` red    |
//! | Background         | 40-47     | `ESC[44m` blue   |
//! | Bright foreground  | 90-97     | `ESC[93m`        |
//! | Bright background  | 100-107   | `ESC[103m`       |
//! | Extended           | 0-255     | `ESC[38;5;123m`  |
//! | True color         | RGB       | `ESC[38;2;R;G;Bm`|

use std::str::FromStr;

use super::directive::{bg256, bg_rgb, color256, rgb, Directive, DirectiveKind};

const fn fg(code: &'static str) -> Directive {
    Directive::from_static(DirectiveKind::Foreground, code)
}

const fn bg(code: &'static str) -> Directive {
    Directive::from_static(DirectiveKind::Background, code)
}

const fn style(code: &'static str) -> Directive {
    Directive::from_static(DirectiveKind::Style, code)
}

// Styles
pub const RESET: Directive = style("\x1b[0m");
pub const BOLD: Directive = style("\x1b[1m");
pub const DIM: Directive = style("\x1b[2m");
pub const ITALIC: Directive = style("\x1b[3m");
pub const UNDERLINE: Directive = style("\x1b[4m");
pub const BLINK: Directive = style("\x1b[5m");
pub const INVERSE: Directive = style("\x1b[7m");
pub const HIDDEN: Directive = style("\x1b[8m");
pub const STRIKE: Directive = style("\x1b[9m");

// Standard colors
pub const BLACK: Directive = fg("\x1b[30m");
pub const RED: Directive = fg("\x1b[31m");
pub const GREEN: Directive = fg("\x1b[32m");
pub const YELLOW: Directive = fg("\x1b[33m");
pub const BLUE: Directive = fg("\x1b[34m");
pub const MAGENTA: Directive = fg("\x1b[35m");
pub const CYAN: Directive = fg("\x1b[36m");
pub const WHITE: Directive = fg("\x1b[37m");

// Bright colors
pub const BRIGHT_BLACK: Directive = fg("\x1b[90m");
pub const BRIGHT_RED: Directive = fg("\x1b[91m");
pub const BRIGHT_GREEN: Directive = fg("\x1b[92m");
pub const BRIGHT_YELLOW: Directive = fg("\x1b[93m");
pub const BRIGHT_BLUE: Directive = fg("\x1b[94m");
pub const BRIGHT_MAGENTA: Directive = fg("\x1b[95m");
pub const BRIGHT_CYAN: Directive = fg("\x1b[96m");
pub const BRIGHT_WHITE: Directive = fg("\x1b[97m");

// Background colors
pub const BG_BLACK: Directive = bg("\x1b[40m");
pub const BG_RED: Directive = bg("\x1b[41m");
pub const BG_GREEN: Directive = bg("\x1b[42m");
pub const BG_YELLOW: Directive = bg("\x1b[43m");
pub const BG_BLUE: Directive = bg("\x1b[44m");
pub const BG_MAGENTA: Directive = bg("\x1b[45m");
pub const BG_CYAN: Directive = bg("\x1b[46m");
pub const BG_WHITE: Directive = bg("\x1b[47m");

// Bright background colors
pub const BG_BRIGHT_BLACK: Directive = bg("\x1b[100m");
pub const BG_BRIGHT_RED: Directive = bg("\x1b[101m");
pub const BG_BRIGHT_GREEN: Directive = bg("\x1b[102m");
pub const BG_BRIGHT_YELLOW: Directive = bg("\x1b[103m");
pub const BG_BRIGHT_BLUE: Directive = bg("\x1b[104m");
pub const BG_BRIGHT_MAGENTA: Directive = bg("\x1b[105m");
pub const BG_BRIGHT_CYAN: Directive = bg("\x1b[106m");
pub const BG_BRIGHT_WHITE: Directive = bg("\x1b[107m");

pub static STYLES: [(&str, Directive); 8] = [
    ("bold", BOLD),
    ("dim", DIM),
    ("italic", ITALIC),
    ("underline", UNDERLINE),
    ("blink", BLINK),
    ("inverse", INVERSE),
    ("hidden", HIDDEN),
    ("strike", STRIKE),
];

pub static STANDARD: [(&str, Directive); 8] = [
    ("black", BLACK),
    ("red", RED),
    ("green", GREEN),
    ("yellow", YELLOW),
    ("blue", BLUE),
    ("magenta", MAGENTA),
    ("cyan", CYAN),
    ("white", WHITE),
];

pub static BRIGHT: [(&str, Directive); 8] = [
    ("bright_black", BRIGHT_BLACK),
    ("bright_red", BRIGHT_RED),
    ("bright_green", BRIGHT_GREEN),
    ("bright_yellow", BRIGHT_YELLOW),
    ("bright_blue", BRIGHT_BLUE),
    ("bright_magenta", BRIGHT_MAGENTA),
    ("bright_cyan", BRIGHT_CYAN),
    ("bright_white", BRIGHT_WHITE),
];

pub static BACKGROUND: [(&str, Directive); 8] = [
    ("bg_black", BG_BLACK),
    ("bg_red", BG_RED),
    ("bg_green", BG_GREEN),
    ("bg_yellow", BG_YELLOW),
    ("bg_blue", BG_BLUE),
    ("bg_magenta", BG_MAGENTA),
    ("bg_cyan", BG_CYAN),
    ("bg_white", BG_WHITE),
];

pub static BRIGHT_BACKGROUND: [(&str, Directive); 8] = [
    ("bg_bright_black", BG_BRIGHT_BLACK),
    ("bg_bright_red", BG_BRIGHT_RED),
    ("bg_bright_green", BG_BRIGHT_GREEN),
    ("bg_bright_yellow", BG_BRIGHT_YELLOW),
    ("bg_bright_blue", BG_BRIGHT_BLUE),
    ("bg_bright_magenta", BG_BRIGHT_MAGENTA),
    ("bg_bright_cyan", BG_BRIGHT_CYAN),
    ("bg_bright_white", BG_BRIGHT_WHITE),
];

/// Lowercase and drop `_`, `-` and spaces so "Bright_Red" and "bright-red" agree
fn normalize(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

fn find(table: &[(&str, Directive)], key: &str) -> Option<Directive> {
    table
        .iter()
        .find(|(name, _)| normalize(name) == key)
        .map(|(_, d)| d.clone())
}

/// Parse a foreground color or style modifier
///
/// Supports:
/// - Hex colors: "#RRGGBB" or "#RGB"
/// - 256-color index: "0" to "255"
/// - Named colors and styles: "red", "Bright_Cyan", "grey", "bold"
pub fn parse_color(s: &str) -> Option<Directive> {
    let s = s.trim();

    if s.starts_with('#') {
        let (r, g, b) = parse_hex(s)?;
        return rgb(r.into(), g.into(), b.into()).ok();
    }

    if let Ok(index) = u32::from_str(s) {
        return color256(index).ok();
    }

    let key = normalize(s);
    match key.as_str() {
        "gray" | "grey" | "darkgray" | "darkgrey" => Some(BRIGHT_BLACK),
        "reset" => Some(RESET),
        "reverse" => Some(INVERSE),
        "strikethrough" => Some(STRIKE),
        _ => find(&STANDARD, &key)
            .or_else(|| find(&BRIGHT, &key))
            .or_else(|| find(&STYLES, &key)),
    }
}

/// Parse a background color; names are accepted with or without the `bg_` prefix
pub fn parse_background(s: &str) -> Option<Directive> {
    let s = s.trim();

    if s.starts_with('#') {
        let (r, g, b) = parse_hex(s)?;
        return bg_rgb(r.into(), g.into(), b.into()).ok();
    }

    if let Ok(index) = u32::from_str(s) {
        return bg256(index).ok();
    }

    let key = normalize(s);
    let key = if key.starts_with("bg") {
        key
    } else {
        format!("bg{key}")
    };
    match key.as_str() {
        "bggray" | "bggrey" => Some(BG_BRIGHT_BLACK),
        _ => find(&BACKGROUND, &key).or_else(|| find(&BRIGHT_BACKGROUND, &key)),
    }
}

/// Parse a style modifier name ("bold", "underline", ...)
pub fn parse_style(s: &str) -> Option<Directive> {
    let key = normalize(s);
    match key.as_str() {
        "reverse" => Some(INVERSE),
        "strikethrough" => Some(STRIKE),
        _ => find(&STYLES, &key),
    }
}

/// Parse a hex color string (#RRGGBB or #RGB)
fn parse_hex(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // #RGB -> #RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some((r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_have_expected_kinds() {
        assert_eq!(RED.kind(), DirectiveKind::Foreground);
        assert_eq!(BG_BRIGHT_BLACK.kind(), DirectiveKind::Background);
        assert_eq!(BOLD.kind(), DirectiveKind::Style);
        assert_eq!(RESET.as_str(), "\x1b[0m");
        assert_eq!(BRIGHT_CYAN.as_str(), "\x1b[96m");
    }

    #[test]
    fn test_parse_hex_color_6_digits() {
        assert_eq!(parse_color("#FF5733"), rgb(255, 87, 51).ok());
    }

    #[test]
    fn test_parse_hex_color_3_digits() {
        assert_eq!(parse_color("#F53"), rgb(255, 85, 51).ok());
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert_eq!(parse_color("#GG0000"), None);
        assert_eq!(parse_color("#FF"), None);
        assert_eq!(parse_color("#FFFFFFF"), None);
        assert_eq!(parse_color("#ééé"), None);
    }

    #[test]
    fn test_parse_named_color() {
        assert_eq!(parse_color("red"), Some(RED));
        assert_eq!(parse_color("GREEN"), Some(GREEN));
        assert_eq!(parse_color("Bright_Cyan"), Some(BRIGHT_CYAN));
        assert_eq!(parse_color("bright-magenta"), Some(BRIGHT_MAGENTA));
        assert_eq!(parse_color("grey"), Some(BRIGHT_BLACK));
    }

    #[test]
    fn test_parse_color_accepts_styles() {
        assert_eq!(parse_color("dim"), Some(DIM));
        assert_eq!(parse_color("Bold"), Some(BOLD));
    }

    #[test]
    fn test_parse_256_color_index() {
        assert_eq!(parse_color("0"), color256(0).ok());
        assert_eq!(parse_color("255"), color256(255).ok());
        assert_eq!(parse_color("256"), None);
    }

    #[test]
    fn test_parse_invalid_color() {
        assert_eq!(parse_color("invalid"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn test_parse_background() {
        assert_eq!(parse_background("blue"), Some(BG_BLUE));
        assert_eq!(parse_background("bg_blue"), Some(BG_BLUE));
        assert_eq!(parse_background("bright_black"), Some(BG_BRIGHT_BLACK));
        assert_eq!(parse_background("#000"), bg_rgb(0, 0, 0).ok());
        assert_eq!(parse_background("17"), bg256(17).ok());
        assert_eq!(parse_background("bold"), None);
    }

    #[test]
    fn test_parse_style() {
        assert_eq!(parse_style("underline"), Some(UNDERLINE));
        assert_eq!(parse_style("reverse"), Some(INVERSE));
        assert_eq!(parse_style("red"), None);
    }
}
