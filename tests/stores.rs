use futures::executor::block_on;
use leptos::*;
use sales_dashboard_wasm::application::{AnalyticsStore, ThemeStore};
use sales_dashboard_wasm::domain::analytics::{DateRange, FilterUpdate};
use sales_dashboard_wasm::domain::config::DashboardConfig;
use sales_dashboard_wasm::domain::errors::AppError;
use sales_dashboard_wasm::domain::sales::{
    Category, Department, MockSalesSource, Quantity, Revenue, SalesDataSource, SalesRecord,
};
use sales_dashboard_wasm::domain::theme::{KeyValueStore, THEME_STORAGE_KEY, Theme, ThemeSurface};
use sales_dashboard_wasm::infrastructure::storage::MemoryStorage;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct RecordingSurface {
    applied: RefCell<Vec<Theme>>,
}

impl ThemeSurface for RecordingSurface {
    fn apply_theme(&self, theme: Theme) {
        self.applied.borrow_mut().push(theme);
    }
}

/// Serves a fixed dataset, failing on the calls listed in `fail_on`
struct ScriptedSource {
    records: Vec<SalesRecord>,
    calls: Cell<usize>,
    fail_on: Vec<usize>,
}

impl ScriptedSource {
    fn new(fail_on: Vec<usize>) -> Self {
        let records = vec![
            SalesRecord::new(
                "2024-01-15T10:30:00Z".parse().unwrap(),
                Revenue::from(100.0),
                Category::Electronics,
                Department::NorthAmerica,
                Quantity::new(4).unwrap(),
            ),
            SalesRecord::new(
                "2024-02-10T09:00:00Z".parse().unwrap(),
                Revenue::from(50.0),
                Category::Clothing,
                Department::Europe,
                Quantity::new(2).unwrap(),
            ),
        ];
        Self { records, calls: Cell::new(0), fail_on }
    }
}

impl SalesDataSource for ScriptedSource {
    fn load(&self) -> Result<Vec<SalesRecord>, AppError> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if self.fail_on.contains(&call) {
            Err(AppError::GenerationError(format!("call {} refused", call)))
        } else {
            Ok(self.records.clone())
        }
    }
}

fn store_with(source: ScriptedSource) -> AnalyticsStore {
    let store = AnalyticsStore::new(Rc::new(source), DashboardConfig::default().without_delay());
    store.update_filters(FilterUpdate::new().date_range(DateRange::unbounded()));
    store
}

#[test]
fn theme_follows_system_preference_then_persists_toggle() {
    let runtime = create_runtime();
    let storage = Rc::new(MemoryStorage::new());
    let surface = Rc::new(RecordingSurface::default());

    let theme = ThemeStore::new(storage.clone(), surface.clone(), true);
    assert_eq!(theme.current(), Theme::Dark);
    assert_eq!(storage.get(THEME_STORAGE_KEY).unwrap(), None);

    theme.toggle();
    assert_eq!(theme.current(), Theme::Light);
    assert_eq!(storage.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("light"));
    assert_eq!(*surface.applied.borrow(), vec![Theme::Dark, Theme::Light]);

    runtime.dispose();
}

#[test]
fn persisted_theme_beats_system_preference() {
    let runtime = create_runtime();
    let storage = Rc::new(MemoryStorage::with_entry(THEME_STORAGE_KEY, "light"));
    let surface = Rc::new(RecordingSurface::default());

    let theme = ThemeStore::new(storage, surface.clone(), true);
    assert_eq!(theme.current(), Theme::Light);
    assert!(!theme.is_dark().get_untracked());

    theme.set(Theme::Dark);
    assert_eq!(surface.applied.borrow().last(), Some(&Theme::Dark));

    runtime.dispose();
}

#[test]
fn invalid_persisted_theme_is_ignored() {
    let runtime = create_runtime();
    let storage = Rc::new(MemoryStorage::with_entry(THEME_STORAGE_KEY, "sepia"));
    let theme = ThemeStore::new(storage, Rc::new(RecordingSurface::default()), false);
    assert_eq!(theme.current(), Theme::Light);
    runtime.dispose();
}

#[test]
fn store_exposes_filtered_views() {
    let runtime = create_runtime();
    let store = store_with(ScriptedSource::new(vec![]));

    assert_eq!(store.total_revenue().get_untracked(), 150.0);
    assert_eq!(store.record_count().get_untracked(), 2);
    assert_eq!(store.average_order_value().get_untracked(), 75.0);

    store.update_filters(FilterUpdate::new().departments([Department::Europe]));
    assert_eq!(store.total_revenue().get_untracked(), 50.0);
    assert_eq!(store.unique_departments().get_untracked().len(), 2);
    assert_eq!(store.revenue_by_month().get_untracked().get("Feb"), Some(50.0));

    runtime.dispose();
}

#[test]
fn failed_reload_keeps_records_and_reports_error() {
    let runtime = create_runtime();
    let store = store_with(ScriptedSource::new(vec![1]));

    block_on(store.reload());
    assert!(!store.is_loading().get_untracked());
    assert_eq!(store.error().get_untracked().as_deref(), Some("Data Generation Error: call 1 refused"));
    assert_eq!(store.raw_records().get_untracked().len(), 2);

    block_on(store.refresh());
    assert_eq!(store.error().get_untracked(), None);

    runtime.dispose();
}

#[test]
fn csv_export_uses_filtered_records() {
    let runtime = create_runtime();
    let store = store_with(ScriptedSource::new(vec![]));
    store.update_filters(FilterUpdate::new().categories([Category::Clothing]));

    let (file_name, content) = store.csv_export().unwrap();
    assert!(file_name.starts_with("sales_report_") && file_name.ends_with(".csv"));
    assert_eq!(content.lines().count(), 2);
    assert!(content.contains("Clothing,Europe,2"));

    runtime.dispose();
}

#[test]
fn reload_with_unrepresentable_window_reports_error() {
    let runtime = create_runtime();
    let config = DashboardConfig { lookback_days: i64::MAX, ..DashboardConfig::default() }.without_delay();
    let source = MockSalesSource::new(config.record_count, config.lookback_days);
    let store = AnalyticsStore::new(Rc::new(source), config);

    block_on(store.reload());
    assert!(!store.is_loading().get_untracked());
    let error = store.error().get_untracked().unwrap_or_default();
    assert!(error.starts_with("Data Generation Error:"), "unexpected error: {}", error);
    assert!(store.raw_records().get_untracked().is_empty());

    runtime.dispose();
}
