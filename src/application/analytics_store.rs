use leptos::*;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::sync::Arc;

use crate::domain::{
    analytics::{
        AnalyticsState, CSV_MIME_TYPE, DateRange, FilterCriteria, FilterUpdate, MonthlyRevenue,
        report_file_name, sales_to_csv,
    },
    config::DashboardConfig,
    errors::{AppError, ExportResult},
    logging::{LogComponent, get_time_provider},
    sales::{Category, Department, SalesDataSource, SalesRecord},
};
use crate::infrastructure::download::trigger_text_download;
use crate::{log_error, log_info, log_warn};

/// Reactive analytics store.
///
/// Wraps [`AnalyticsState`] in a signal and exposes each derived view as a
/// memo, so components only re-render when the view they read changes.
#[derive(Clone, Copy)]
pub struct AnalyticsStore {
    state: RwSignal<AnalyticsState>,
    source: StoredValue<Rc<dyn SalesDataSource>>,
    config: StoredValue<DashboardConfig>,
    filtered_records: Memo<Arc<Vec<SalesRecord>>>,
    total_revenue: Memo<f64>,
    revenue_by_category: Memo<BTreeMap<Category, f64>>,
    revenue_by_month: Memo<MonthlyRevenue>,
    unique_categories: Memo<Arc<Vec<Category>>>,
    unique_departments: Memo<Arc<Vec<Department>>>,
}

impl AnalyticsStore {
    /// Loads the initial dataset synchronously and applies the default
    /// filters (current year to date).
    pub fn new(source: Rc<dyn SalesDataSource>, config: DashboardConfig) -> Self {
        let filters = FilterCriteria::default_for(get_time_provider().now());
        let mut initial = AnalyticsState::new(Vec::new(), filters);
        initial.complete_reload(source.load());
        if let Some(e) = initial.error() {
            log_error!(LogComponent::Application("Analytics"), "Initial load failed: {}", e);
        }

        let state = create_rw_signal(initial);
        Self {
            state,
            source: store_value(source),
            config: store_value(config),
            filtered_records: create_memo(move |_| state.with(|s| s.views().filtered_records.clone())),
            total_revenue: create_memo(move |_| state.with(|s| s.views().total_revenue)),
            revenue_by_category: create_memo(move |_| {
                state.with(|s| s.views().revenue_by_category.clone())
            }),
            revenue_by_month: create_memo(move |_| state.with(|s| s.views().revenue_by_month)),
            unique_categories: create_memo(move |_| state.with(|s| s.unique_categories().clone())),
            unique_departments: create_memo(move |_| state.with(|s| s.unique_departments().clone())),
        }
    }

    pub fn filtered_records(&self) -> Memo<Arc<Vec<SalesRecord>>> {
        self.filtered_records
    }

    pub fn total_revenue(&self) -> Memo<f64> {
        self.total_revenue
    }

    pub fn revenue_by_category(&self) -> Memo<BTreeMap<Category, f64>> {
        self.revenue_by_category
    }

    pub fn revenue_by_month(&self) -> Memo<MonthlyRevenue> {
        self.revenue_by_month
    }

    pub fn unique_categories(&self) -> Memo<Arc<Vec<Category>>> {
        self.unique_categories
    }

    pub fn unique_departments(&self) -> Memo<Arc<Vec<Department>>> {
        self.unique_departments
    }

    pub fn record_count(&self) -> Signal<usize> {
        let filtered = self.filtered_records;
        Signal::derive(move || filtered.with(|records| records.len()))
    }

    pub fn average_order_value(&self) -> Signal<f64> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.views().average_order_value()))
    }

    pub fn raw_records(&self) -> Signal<Arc<Vec<SalesRecord>>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.records().clone()))
    }

    pub fn filters(&self) -> Signal<FilterCriteria> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.filters().clone()))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.is_loading()))
    }

    pub fn error(&self) -> Signal<Option<String>> {
        let state = self.state;
        Signal::derive(move || state.with(|s| s.error().map(str::to_string)))
    }

    /// Shallow-merges `update` into the criteria. Identical criteria leave
    /// the store untouched.
    pub fn update_filters(&self, update: FilterUpdate) {
        let unchanged =
            self.state.with_untracked(|s| s.filters().merged(update.clone()) == *s.filters());
        if unchanged {
            return;
        }
        self.state.update(|s| {
            s.update_filters(update);
        });
    }

    pub fn set_date_range(&self, range: DateRange) {
        self.update_filters(FilterUpdate::new().date_range(range));
    }

    /// Back to current year to date, no category or department restriction
    pub fn reset_filters(&self) {
        let defaults = FilterCriteria::default_for(get_time_provider().now());
        self.state.update(|s| {
            s.replace_filters(defaults);
        });
    }

    /// Regenerates the dataset after the configured delay. A reload issued
    /// while another is in flight is ignored.
    pub async fn reload(self) {
        let started = self.state.try_update(|s| s.begin_reload()).unwrap_or(false);
        if !started {
            log_warn!(LogComponent::Application("Analytics"), "Reload already in progress, ignoring");
            return;
        }
        log_info!(LogComponent::Application("Analytics"), "Reloading dashboard data");

        let delay = self.config.with_value(|config| config.reload_delay);
        if !delay.is_zero() {
            gloo_timers::future::sleep(delay).await;
        }

        let outcome = self.source.with_value(|source| source.load());
        match &outcome {
            Ok(records) => {
                log_info!(LogComponent::Application("Analytics"), "Loaded {} records", records.len());
            }
            Err(e) => {
                log_error!(LogComponent::Application("Analytics"), "Reload failed: {}", e);
            }
        }
        if self.state.try_update(|s| s.complete_reload(outcome)).is_none() {
            log_warn!(LogComponent::Application("Analytics"), "Store disposed before reload finished");
        }
    }

    /// Same as [`reload`](Self::reload); bound to the refresh button
    pub async fn refresh(self) {
        self.reload().await
    }

    /// File name and CSV body for the currently filtered records
    pub fn csv_export(&self) -> ExportResult<(String, String)> {
        let records = self.filtered_records.get_untracked();
        let content = sales_to_csv(&records)?;
        Ok((report_file_name(get_time_provider().now()), content))
    }

    /// Builds the CSV and hands it to the browser as a download
    pub fn export_to_csv(&self) -> Result<(), AppError> {
        let (file_name, content) = self.csv_export()?;
        trigger_text_download(&file_name, &content, CSV_MIME_TYPE)?;
        log_info!(LogComponent::Application("Analytics"), "Exported {}", file_name);
        Ok(())
    }
}
