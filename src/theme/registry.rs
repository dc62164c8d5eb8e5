use std::sync::{PoisonError, RwLock};

use super::{Role, Theme, THEME_NAMES};
use crate::ansi::Directive;
use crate::error::{Error, Result};

/// Holds the single active theme; role lookups resolve through it
#[derive(Debug)]
pub struct ThemeRegistry {
    active: RwLock<Theme>,
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl ThemeRegistry {
    pub fn new(theme: Theme) -> Self {
        Self {
            active: RwLock::new(theme),
        }
    }

    /// Replace the active theme wholesale
    pub fn apply_theme(&self, theme: Theme) {
        tracing::debug!(theme = %theme.name, "applying theme");
        *self.active.write().unwrap_or_else(PoisonError::into_inner) = theme;
    }

    /// Activate a built-in theme by name
    pub fn apply_preset(&self, name: &str) -> Result<()> {
        let theme = Theme::preset(name).ok_or_else(|| Error::UnknownTheme(name.to_string()))?;
        self.apply_theme(theme);
        Ok(())
    }

    /// Directive for a role in the active theme
    pub fn color(&self, role: Role) -> Directive {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(role)
            .clone()
    }

    /// Directive for a role given by name; unknown names are an error
    pub fn theme_color(&self, role: &str) -> Result<Directive> {
        let role = role.parse::<Role>()?;
        Ok(self.color(role))
    }

    /// Snapshot of the active theme
    pub fn current_theme(&self) -> Theme {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Name of the active theme
    pub fn current_name(&self) -> String {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .name
            .to_string()
    }

    /// Built-in theme names, independent of the active theme
    pub fn list_themes(&self) -> &'static [&'static str] {
        &THEME_NAMES
    }
}
