use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Colour scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colours resolved for a theme, consumed by chart rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeTokens {
    pub text: &'static str,
    pub muted: &'static str,
    pub background: &'static str,
}

impl Theme {
    /// Stored preference wins; otherwise follow the OS preference
    pub fn resolve(stored: Option<Theme>, prefers_dark: bool) -> Theme {
        match stored {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn tokens(self) -> ThemeTokens {
        match self {
            Theme::Light => ThemeTokens {
                text: "#111827",
                muted: "#6b7280",
                background: "#ffffff",
            },
            Theme::Dark => ThemeTokens {
                text: "#e5e7eb",
                muted: "#9ca3af",
                background: "#0f172a",
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme '{0}', expected 'light' or 'dark'")]
pub struct UnknownTheme(String);

impl std::str::FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(UnknownTheme(s.to_string())),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_preference_wins() {
        assert_eq!(Theme::resolve(Some(Theme::Light), true), Theme::Light);
        assert_eq!(Theme::resolve(Some(Theme::Dark), false), Theme::Dark);
    }

    #[test]
    fn falls_back_to_os_preference() {
        assert_eq!(Theme::resolve(None, true), Theme::Dark);
        assert_eq!(Theme::resolve(None, false), Theme::Light);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn only_literal_values_parse() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark".parse::<Theme>().is_err());
        assert!("auto".parse::<Theme>().is_err());
        assert!("\"dark\"".parse::<Theme>().is_err());
    }
}
