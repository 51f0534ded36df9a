use leptos::*;
use std::rc::Rc;

use crate::application::{AnalyticsStore, ThemeStore};
use crate::context_accessors;
use crate::domain::config::DashboardConfig;
use crate::domain::sales::MockSalesSource;
use crate::infrastructure::{
    document::{BodyClassSurface, prefers_dark_color_scheme},
    storage::browser_storage,
};

/// Session-wide stores, created once at startup and handed to the component
/// tree through Leptos context.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub analytics: AnalyticsStore,
    pub theme: ThemeStore,
}

impl AppContext {
    pub fn new(analytics: AnalyticsStore, theme: ThemeStore) -> Self {
        Self { analytics, theme }
    }

    /// Wires the stores to the browser: generated data, local storage, body classes
    pub fn for_browser(config: DashboardConfig) -> Self {
        let source = MockSalesSource::new(config.record_count, config.lookback_days);
        let analytics = AnalyticsStore::new(Rc::new(source), config);
        let theme = ThemeStore::new(
            Rc::from(browser_storage()),
            Rc::new(BodyClassSurface),
            prefers_dark_color_scheme(),
        );
        Self::new(analytics, theme)
    }

    pub fn provide(self) {
        provide_context(self);
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

context_accessors! {
    pub use_analytics => analytics: AnalyticsStore,
    pub use_theme => theme: ThemeStore,
}
