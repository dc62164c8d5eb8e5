use serde::Deserialize;

use super::{Role, Theme};
use crate::ansi::parse_color;

/// Per-role color overrides, as read from the `[colors]` config table
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ThemeColorsConfig {
    pub primary: Option<String>,
    pub secondary: Option<String>,
    pub success: Option<String>,
    pub warning: Option<String>,
    pub error: Option<String>,
    pub info: Option<String>,
    pub highlight: Option<String>,
    pub muted: Option<String>,
}

impl ThemeColorsConfig {
    fn entry(&self, role: Role) -> Option<&str> {
        let value = match role {
            Role::Primary => &self.primary,
            Role::Secondary => &self.secondary,
            Role::Success => &self.success,
            Role::Warning => &self.warning,
            Role::Error => &self.error,
            Role::Info => &self.info,
            Role::Highlight => &self.highlight,
            Role::Muted => &self.muted,
        };
        value.as_deref()
    }

    /// Apply color overrides to a theme; unparseable values are skipped
    pub fn apply_to(&self, base: &mut Theme) {
        for role in Role::ALL {
            let Some(value) = self.entry(role) else {
                continue;
            };
            match parse_color(value) {
                Some(directive) => base.set(role, directive),
                None => tracing::warn!(%role, value, "ignoring invalid theme color"),
            }
        }
    }

    /// Merge two override sets, with `other` taking precedence
    pub fn merge(self, other: ThemeColorsConfig) -> ThemeColorsConfig {
        ThemeColorsConfig {
            primary: other.primary.or(self.primary),
            secondary: other.secondary.or(self.secondary),
            success: other.success.or(self.success),
            warning: other.warning.or(self.warning),
            error: other.error.or(self.error),
            info: other.info.or(self.info),
            highlight: other.highlight.or(self.highlight),
            muted: other.muted.or(self.muted),
        }
    }

    pub fn is_empty(&self) -> bool {
        Role::ALL.into_iter().all(|role| self.entry(role).is_none())
    }
}
