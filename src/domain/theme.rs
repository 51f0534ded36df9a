use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

use crate::domain::errors::StorageResult;

/// Local storage key holding the persisted theme
pub const THEME_STORAGE_KEY: &str = "theme";

/// Value Object - display theme
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    StrumDisplay,
    EnumIter,
    EnumString,
    AsRefStr,
    Serialize,
    Deserialize,
)]
pub enum Theme {
    #[default]
    #[strum(serialize = "light")]
    #[serde(rename = "light")]
    Light,

    #[strum(serialize = "dark")]
    #[serde(rename = "dark")]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Body class reflecting this theme
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Light => "theme-light",
            Self::Dark => "theme-dark",
        }
    }

    /// Persisted value wins when valid, then the system preference, then light.
    pub fn resolve_initial(persisted: Option<&str>, prefers_dark: bool) -> Self {
        match persisted.and_then(|value| value.parse::<Theme>().ok()) {
            Some(theme) => theme,
            None if prefers_dark => Self::Dark,
            None => Self::Light,
        }
    }
}

/// Small persistence interface (browser local storage or in-memory)
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// Somewhere a theme can be shown, e.g. the document body's class list
pub trait ThemeSurface {
    fn apply_theme(&self, theme: Theme);
}
