//! Color theme system
//!
//! A theme maps the eight semantic roles to concrete directives. Themes are
//! plain records, so every built-in preset is complete by construction;
//! themes assembled at runtime go through [`Theme::from_roles`], which
//! rejects a missing role up front.
//!
//! # Preset Themes
//!
//! - `default`: cyan / magenta accents
//! - `ocean`: blues and cyans
//! - `forest`: greens
//! - `sunset`: magenta / yellow
//! - `mono`: white, bold and dim only

mod overrides;
mod presets;
mod registry;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::ansi::Directive;
use crate::error::{Error, Result};

pub use overrides::ThemeColorsConfig;
pub use presets::{BUILTIN_THEMES, DEFAULT, FOREST, MONO, OCEAN, SUNSET, THEME_NAMES};
pub use registry::ThemeRegistry;

/// Semantic color role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Info,
    Highlight,
    Muted,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Primary,
        Role::Secondary,
        Role::Success,
        Role::Warning,
        Role::Error,
        Role::Info,
        Role::Highlight,
        Role::Muted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Primary => "primary",
            Role::Secondary => "secondary",
            Role::Success => "success",
            Role::Warning => "warning",
            Role::Error => "error",
            Role::Info => "info",
            Role::Highlight => "highlight",
            Role::Muted => "muted",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    /// Exact, lowercase role names only; anything else is a caller typo
    fn from_str(s: &str) -> Result<Self> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| Error::UnknownRole(s.to_string()))
    }
}

/// A complete role-to-directive mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub name: Cow<'static, str>,
    pub primary: Directive,
    pub secondary: Directive,
    pub success: Directive,
    pub warning: Directive,
    pub error: Directive,
    pub info: Directive,
    pub highlight: Directive,
    pub muted: Directive,
}

impl Default for Theme {
    fn default() -> Self {
        DEFAULT
    }
}

impl Theme {
    /// Directive for a role
    pub fn get(&self, role: Role) -> &Directive {
        match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Success => &self.success,
            Role::Warning => &self.warning,
            Role::Error => &self.error,
            Role::Info => &self.info,
            Role::Highlight => &self.highlight,
            Role::Muted => &self.muted,
        }
    }

    /// Replace the directive for a role on this value
    pub fn set(&mut self, role: Role, directive: Directive) {
        let slot = match role {
            Role::Primary => &mut self.primary,
            Role::Secondary => &mut self.secondary,
            Role::Success => &mut self.success,
            Role::Warning => &mut self.warning,
            Role::Error => &mut self.error,
            Role::Info => &mut self.info,
            Role::Highlight => &mut self.highlight,
            Role::Muted => &mut self.muted,
        };
        *slot = directive;
    }

    /// Iterate roles in canonical order
    pub fn roles(&self) -> impl Iterator<Item = (Role, &Directive)> {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    /// Build a theme from role assignments; every role must be present
    pub fn from_roles<I>(name: impl Into<String>, roles: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Role, Directive)>,
    {
        let name = name.into();
        let mut slots: [Option<Directive>; 8] = Default::default();
        for (role, directive) in roles {
            if let Some(slot) = slots.get_mut(role.index()) {
                *slot = Some(directive);
            }
        }

        let mut take = |role: Role| {
            slots
                .get_mut(role.index())
                .and_then(Option::take)
                .ok_or_else(|| Error::IncompleteTheme {
                    theme: name.clone(),
                    role,
                })
        };

        let primary = take(Role::Primary)?;
        let secondary = take(Role::Secondary)?;
        let success = take(Role::Success)?;
        let warning = take(Role::Warning)?;
        let error = take(Role::Error)?;
        let info = take(Role::Info)?;
        let highlight = take(Role::Highlight)?;
        let muted = take(Role::Muted)?;

        Ok(Self {
            name: Cow::Owned(name),
            primary,
            secondary,
            success,
            warning,
            error,
            info,
            highlight,
            muted,
        })
    }

    /// Like [`Theme::from_roles`] but keyed by role name
    pub fn from_named<'a, I>(name: impl Into<String>, roles: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, Directive)>,
    {
        let roles = roles
            .into_iter()
            .map(|(key, directive)| key.parse::<Role>().map(|role| (role, directive)))
            .collect::<Result<Vec<_>>>()?;
        Self::from_roles(name, roles)
    }

    /// Look up a built-in theme by name (case-insensitive)
    pub fn preset(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        BUILTIN_THEMES
            .iter()
            .find(|theme| theme.name == name.as_str())
            .cloned()
    }

    /// Build a theme from a preset name plus per-role overrides.
    ///
    /// An unknown preset falls back to `default`.
    pub fn from_config(theme_name: Option<&str>, colors: Option<&ThemeColorsConfig>) -> Self {
        let preset_name = theme_name.unwrap_or("default");
        let mut theme = Self::preset(preset_name).unwrap_or_else(|| {
            tracing::warn!(theme = preset_name, "unknown theme, using default");
            DEFAULT
        });

        if let Some(config) = colors {
            config.apply_to(&mut theme);
        }

        theme
    }
}
