//! Banner, header, footer and palette preview rendering
//!
//! Each block renders to a `String` through a [`Styler`], so the capability
//! gate and active theme apply. The `print` helpers just `println!` it.

use unicode_width::UnicodeWidthStr;

use crate::ansi::palette::{BACKGROUND, BOLD, BRIGHT, STANDARD, STYLES};
use crate::ansi::Directive;
use crate::styler::Styler;
use crate::theme::Role;

/// Default rule character for borders
pub const DEFAULT_RULE: char = '-';

/// Center `text` in `width` columns by display width.
///
/// When the margin and the width are both odd the extra space goes on the
/// left, otherwise on the right. Text at least `width` wide is returned as is.
pub fn center(text: &str, width: usize) -> String {
    let len = text.width();
    if len >= width {
        return text.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    let right = margin - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// A horizontal rule `width` characters long
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

/// Centered text between two rules, styled as one block
#[derive(Debug, Clone)]
pub struct Banner {
    pub text: String,
    pub fg: Option<Directive>,
    pub style: Option<Directive>,
    pub width: Option<usize>,
    pub rule: char,
}

impl Banner {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            style: None,
            width: None,
            rule: DEFAULT_RULE,
        }
    }

    pub fn with_fg(mut self, fg: Directive) -> Self {
        self.fg = Some(fg);
        self
    }

    pub fn with_style(mut self, style: Directive) -> Self {
        self.style = Some(style);
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_rule(mut self, rule: char) -> Self {
        self.rule = rule;
        self
    }

    /// Render with the active theme's primary color and bold unless overridden
    pub fn render(&self, styler: &Styler) -> String {
        let width = self.width.unwrap_or_else(|| styler.terminal_width());
        let line = rule(self.rule, width);
        let body = format!("{line}\n{}\n{line}", center(&self.text, width));

        let fg = self
            .fg
            .clone()
            .unwrap_or_else(|| styler.themes().color(Role::Primary));
        let style = self.style.clone().unwrap_or(BOLD);
        styler.style_text(&body, Some(&fg), None, Some(&style))
    }

    pub fn print(&self, styler: &Styler) {
        println!("{}", self.render(styler));
    }
}

/// Script header: rule, `title version [subtitle]`, rule
#[derive(Debug, Clone)]
pub struct Header {
    pub title: String,
    pub version: Option<String>,
    pub subtitle: Option<String>,
    pub width: Option<usize>,
    pub rule: char,
}

impl Header {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            version: None,
            subtitle: None,
            width: None,
            rule: DEFAULT_RULE,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_rule(mut self, rule: char) -> Self {
        self.rule = rule;
        self
    }

    pub fn render(&self, styler: &Styler) -> String {
        let width = self.width.unwrap_or_else(|| styler.terminal_width());
        let line = rule(self.rule, width);
        let themes = styler.themes();

        let mut title = format!(
            "  {}",
            styler.style_text(
                &self.title,
                Some(&themes.color(Role::Primary)),
                None,
                Some(&BOLD)
            )
        );
        if let Some(version) = self.version.as_deref().filter(|v| !v.is_empty()) {
            title.push(' ');
            title.push_str(&styler.paint(version, Role::Secondary));
        }
        if let Some(subtitle) = self.subtitle.as_deref().filter(|s| !s.is_empty()) {
            title.push(' ');
            title.push_str(&styler.paint(&format!("[{subtitle}]"), Role::Success));
        }

        format!("{line}\n{title}\n{line}")
    }

    pub fn print(&self, styler: &Styler) {
        println!("{}", self.render(styler));
    }
}

/// Footer: rule, optional legend in the highlight role, rule
#[derive(Debug, Clone)]
pub struct Footer {
    pub legend: Option<String>,
    pub width: Option<usize>,
    pub rule: char,
}

impl Default for Footer {
    fn default() -> Self {
        Self {
            legend: None,
            width: None,
            rule: DEFAULT_RULE,
        }
    }
}

impl Footer {
    pub fn new(legend: impl Into<String>) -> Self {
        Self {
            legend: Some(legend.into()),
            ..Default::default()
        }
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    pub fn render(&self, styler: &Styler) -> String {
        let width = self.width.unwrap_or_else(|| styler.terminal_width());
        let line = rule(self.rule, width);
        match self.legend.as_deref().filter(|l| !l.is_empty()) {
            Some(legend) => format!("{line}\n{}\n{line}", styler.paint(legend, Role::Highlight)),
            None => format!("{line}\n{line}"),
        }
    }

    pub fn print(&self, styler: &Styler) {
        println!("{}", self.render(styler));
    }
}

/// Swatches for every palette group plus the active theme's roles
pub fn preview(styler: &Styler) -> String {
    let groups: [(&str, &[(&str, Directive)]); 4] = [
        ("Standard Colors", &STANDARD),
        ("Bright Colors", &BRIGHT),
        ("Background Colors", &BACKGROUND),
        ("Styles", &STYLES),
    ];

    let mut sections: Vec<String> = groups
        .iter()
        .map(|(title, table)| {
            let swatches: Vec<String> = table
                .iter()
                .map(|(name, directive)| styler.apply(name, directive))
                .collect();
            format!("{}\n{}\n", Banner::new(*title).render(styler), swatches.join(" "))
        })
        .collect();

    let theme = styler.current_theme();
    let roles: Vec<String> = theme
        .roles()
        .map(|(role, directive)| styler.apply(role.as_str(), directive))
        .collect();
    sections.push(format!(
        "{}\n{}\n",
        Banner::new(format!("Theme: {}", theme.name)).render(styler),
        roles.join(" ")
    ));

    sections.join("\n")
}
