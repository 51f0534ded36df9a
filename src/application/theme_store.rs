use leptos::*;
use std::rc::Rc;

use crate::domain::logging::LogComponent;
use crate::domain::theme::{KeyValueStore, THEME_STORAGE_KEY, Theme, ThemeSurface};
use crate::{log_debug, log_warn};

/// Light/dark preference. Every change is persisted and reflected on the surface.
#[derive(Clone, Copy)]
pub struct ThemeStore {
    theme: RwSignal<Theme>,
    storage: StoredValue<Rc<dyn KeyValueStore>>,
    surface: StoredValue<Rc<dyn ThemeSurface>>,
}

impl ThemeStore {
    /// Persisted value first, then `prefers_dark`, then light. The initial
    /// theme is shown on the surface but not written back to storage.
    pub fn new(storage: Rc<dyn KeyValueStore>, surface: Rc<dyn ThemeSurface>, prefers_dark: bool) -> Self {
        let persisted = storage.get(THEME_STORAGE_KEY).unwrap_or_else(|e| {
            log_warn!(LogComponent::Application("Theme"), "Ignoring unreadable theme: {}", e);
            None
        });
        let initial = Theme::resolve_initial(persisted.as_deref(), prefers_dark);
        surface.apply_theme(initial);
        log_debug!(LogComponent::Application("Theme"), "Initial theme: {}", initial);

        Self { theme: create_rw_signal(initial), storage: store_value(storage), surface: store_value(surface) }
    }

    pub fn theme(&self) -> Signal<Theme> {
        self.theme.into()
    }

    pub fn current(&self) -> Theme {
        self.theme.get_untracked()
    }

    pub fn is_dark(&self) -> Signal<bool> {
        let theme = self.theme;
        Signal::derive(move || theme.get() == Theme::Dark)
    }

    pub fn toggle(&self) {
        self.set(self.current().toggled());
    }

    pub fn set(&self, theme: Theme) {
        self.theme.set(theme);
        if let Err(e) = self.storage.with_value(|storage| storage.set(THEME_STORAGE_KEY, theme.as_ref())) {
            log_warn!(LogComponent::Application("Theme"), "Could not persist theme {}: {}", theme, e);
        }
        self.surface.with_value(|surface| surface.apply_theme(theme));
    }
}
