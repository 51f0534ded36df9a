pub mod analytics_store;
pub mod theme_store;

pub use analytics_store::AnalyticsStore;
pub use theme_store::ThemeStore;
