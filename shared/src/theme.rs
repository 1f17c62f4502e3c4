use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown theme '{0}'")]
pub struct UnknownTheme(pub String);

impl Theme {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Startup choice: a valid stored value wins, then the platform's
    /// ambient preference, then light.
    #[must_use]
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored
            .and_then(|s| s.parse().ok())
            .unwrap_or(if prefers_dark { Self::Dark } else { Self::Light })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub theme: Theme,
    initialized: bool,
}

impl ThemeState {
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Applies the startup resolution. Returns the theme to write back when
    /// storage held no valid value.
    pub fn initialize(&mut self, stored: Option<&str>, prefers_dark: bool) -> Option<Theme> {
        self.theme = Theme::resolve(stored, prefers_dark);
        self.initialized = true;
        let stored_is_valid = stored.is_some_and(|s| s.parse::<Theme>().is_ok());
        (!stored_is_valid).then_some(self.theme)
    }

    /// Flips the theme and returns the new value, which the caller persists.
    /// A toggle counts as initialization, so a later storage read does not
    /// override the user's choice.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.initialized = true;
        self.theme
    }
}
