#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::str::FromStr;

use crate::net::types::UnknownId;

/// User-selected color theme. `System` follows `prefers-color-scheme`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Self::Light, Self::Dark, Self::System];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }
}

impl FromStr for Theme {
    type Err = UnknownId;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == raw)
            .ok_or_else(|| UnknownId(raw.to_owned()))
    }
}

/// Theme context: the stored preference plus the browser's scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeState {
    pub preference: Theme,
    pub system_dark: bool,
}

impl ThemeState {
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self.preference {
            Theme::Light => false,
            Theme::Dark => true,
            Theme::System => self.system_dark,
        }
    }

    /// Flip the resolved appearance, pinning an explicit preference.
    #[must_use]
    pub fn toggled(self) -> Self {
        let preference = if self.is_dark() { Theme::Light } else { Theme::Dark };
        Self { preference, ..self }
    }
}
