//! Command-line interface for the `cb9` binary.

use clap::{Parser, Subcommand};

use cb9_style::ansi::{parse_background, parse_color, parse_style};
use cb9_style::config::Config;
use cb9_style::layout::{preview, Banner, Header};
use cb9_style::{bg256, color256, ColorMode, Directive, Error, Result, Styler};

/// cb9 - preview and apply ANSI colors and themes.
#[derive(Parser, Debug)]
#[command(name = "cb9")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Colorize output: auto, always or never.
    #[arg(long, global = true, value_name = "WHEN")]
    pub color: Option<ColorMode>,

    /// Built-in theme to activate.
    #[arg(short, long, global = true, value_name = "NAME")]
    pub theme: Option<String>,

    /// Log debug diagnostics to stderr.
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show swatches for every color group and the active theme.
    Preview,

    /// List the built-in themes, marking the active one.
    Themes,

    /// Print text centered between two rules.
    Banner {
        /// Banner text.
        text: String,

        /// Width in columns (terminal width when omitted).
        #[arg(short, long)]
        width: Option<usize>,

        /// Foreground color (name, #hex or 0-255).
        #[arg(long)]
        fg: Option<String>,

        /// Style modifier (bold, underline, ...).
        #[arg(long)]
        style: Option<String>,

        /// Border character.
        #[arg(long)]
        rule: Option<char>,
    },

    /// Print text with explicit colors.
    Style {
        /// Text to style.
        text: String,

        /// Foreground color (name, #hex or 0-255).
        #[arg(long)]
        fg: Option<String>,

        /// Background color (name, #hex or 0-255).
        #[arg(long)]
        bg: Option<String>,

        /// Style modifier (bold, underline, ...).
        #[arg(long)]
        style: Option<String>,
    },

    /// Print a script header with title, version and subtitle.
    Header {
        /// Script title.
        title: String,

        /// Version label.
        #[arg(default_value = "v1.0")]
        release: String,

        /// Subtitle shown in brackets.
        #[arg(short, long)]
        subtitle: Option<String>,

        /// Width in columns (terminal width when omitted).
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Print text in a theme role's color.
    Role {
        /// Role name: primary, secondary, success, warning, error, info, highlight or muted.
        role: String,

        /// Text to style.
        text: String,
    },
}

/// Foreground color or style; numeric input goes through the range-checked encoder
fn resolve_fg(value: &str) -> Result<Directive> {
    if let Ok(index) = value.trim().parse::<u32>() {
        return color256(index);
    }
    parse_color(value).ok_or_else(|| Error::InvalidColor(value.to_string()))
}

fn resolve_bg(value: &str) -> Result<Directive> {
    if let Ok(index) = value.trim().parse::<u32>() {
        return bg256(index);
    }
    parse_background(value).ok_or_else(|| Error::InvalidColor(value.to_string()))
}

fn resolve_style(value: &str) -> Result<Directive> {
    parse_style(value).ok_or_else(|| Error::InvalidColor(value.to_string()))
}

fn resolve(value: Option<&str>, f: fn(&str) -> Result<Directive>) -> Result<Option<Directive>> {
    value.map(f).transpose()
}

/// Execute a subcommand, returning what it prints
pub fn run(command: Commands, styler: &Styler, config: &Config) -> Result<String> {
    let output = match command {
        Commands::Preview => preview(styler),
        Commands::Themes => {
            let active = styler.themes().current_name();
            styler
                .list_themes()
                .iter()
                .map(|name| {
                    if *name == active {
                        format!("* {}", styler.apply(name, &styler.current_theme().primary))
                    } else {
                        format!("  {name}")
                    }
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        Commands::Banner {
            text,
            width,
            fg,
            style,
            rule,
        } => {
            let mut banner = Banner::new(text).with_rule(rule.unwrap_or(config.banner_rule()));
            if let Some(width) = width.or(config.banner.width) {
                banner = banner.with_width(width);
            }
            if let Some(fg) = resolve(fg.as_deref(), resolve_fg)? {
                banner = banner.with_fg(fg);
            }
            if let Some(style) = resolve(style.as_deref(), resolve_style)? {
                banner = banner.with_style(style);
            }
            banner.render(styler)
        }
        Commands::Style {
            text,
            fg,
            bg,
            style,
        } => {
            let fg = resolve(fg.as_deref(), resolve_fg)?;
            let bg = resolve(bg.as_deref(), resolve_bg)?;
            let style = resolve(style.as_deref(), resolve_style)?;
            styler.style_text(&text, fg.as_ref(), bg.as_ref(), style.as_ref())
        }
        Commands::Header {
            title,
            release,
            subtitle,
            width,
        } => {
            let mut header = Header::new(title)
                .with_version(release)
                .with_rule(config.banner_rule());
            if let Some(subtitle) = subtitle {
                header = header.with_subtitle(subtitle);
            }
            if let Some(width) = width.or(config.banner.width) {
                header = header.with_width(width);
            }
            header.render(styler)
        }
        Commands::Role { role, text } => {
            let directive = styler.theme_color(&role)?;
            styler.apply(&text, &directive)
        }
    };
    Ok(output)
}
