use strum::{AsRefStr, EnumIter, IntoEnumIterator};

pub const TITLE_SUFFIX: &str = "Business Dashboard";
pub const FALLBACK_TITLE: &str = "Analytics";

/// The three pages of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum AppRoute {
    Dashboard,
    Reports,
    Settings,
}

impl AppRoute {
    pub fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::Reports => "/reports",
            Self::Settings => "/settings",
        }
    }

    pub fn title(self) -> Option<&'static str> {
        match self {
            Self::Dashboard => Some("Dashboard"),
            Self::Reports => Some("Reports"),
            Self::Settings => Some("Settings"),
        }
    }

    /// Exact path match, ignoring one trailing slash
    pub fn from_path(path: &str) -> Option<Self> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(stripped) => stripped,
        };
        AppRoute::iter().find(|route| route.path() == normalized)
    }

    pub fn all() -> Vec<AppRoute> {
        AppRoute::iter().collect()
    }
}

/// `"<route title> | Business Dashboard"`, `Analytics` when there is no title
pub fn document_title(route_title: Option<&str>) -> String {
    format!("{} | {}", route_title.unwrap_or(FALLBACK_TITLE), TITLE_SUFFIX)
}

/// Title for whatever path the router just landed on
pub fn document_title_for_path(path: &str) -> String {
    document_title(AppRoute::from_path(path).and_then(AppRoute::title))
}
