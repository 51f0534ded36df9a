use std::sync::Arc;

use super::filters::{DateRange, FilterCriteria, FilterUpdate};
use super::services::{self, DerivedViews};
use crate::domain::errors::AppError;
use crate::domain::sales::{Category, Department, SalesRecord};

/// Framework-free analytics state.
///
/// Derived views are recomputed on every write to the records or the criteria
/// and cached until the next write, so readers always see values consistent
/// with the current inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyticsState {
    records: Arc<Vec<SalesRecord>>,
    filters: FilterCriteria,
    categories: Arc<Vec<Category>>,
    departments: Arc<Vec<Department>>,
    views: Arc<DerivedViews>,
    is_loading: bool,
    error: Option<String>,
}

impl AnalyticsState {
    pub fn new(records: Vec<SalesRecord>, filters: FilterCriteria) -> Self {
        let records = Arc::new(records);
        Self {
            categories: Arc::new(services::unique_categories(&records)),
            departments: Arc::new(services::unique_departments(&records)),
            views: Arc::new(DerivedViews::compute(&records, &filters)),
            records,
            filters,
            is_loading: false,
            error: None,
        }
    }

    pub fn records(&self) -> &Arc<Vec<SalesRecord>> {
        &self.records
    }

    pub fn filters(&self) -> &FilterCriteria {
        &self.filters
    }

    pub fn views(&self) -> &Arc<DerivedViews> {
        &self.views
    }

    pub fn unique_categories(&self) -> &Arc<Vec<Category>> {
        &self.categories
    }

    pub fn unique_departments(&self) -> &Arc<Vec<Department>> {
        &self.departments
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Shallow-merges `update`. Returns whether the criteria changed; when
    /// they did not, the cached views are kept as they are.
    pub fn update_filters(&mut self, update: FilterUpdate) -> bool {
        let merged = self.filters.merged(update);
        self.replace_filters(merged)
    }

    pub fn set_date_range(&mut self, range: DateRange) -> bool {
        self.update_filters(FilterUpdate::new().date_range(range))
    }

    pub fn replace_filters(&mut self, filters: FilterCriteria) -> bool {
        if filters == self.filters {
            return false;
        }
        self.filters = filters;
        self.recompute_views();
        true
    }

    pub fn replace_records(&mut self, records: Vec<SalesRecord>) {
        self.records = Arc::new(records);
        self.categories = Arc::new(services::unique_categories(&self.records));
        self.departments = Arc::new(services::unique_departments(&self.records));
        self.recompute_views();
    }

    /// Marks a reload as in flight. Returns `false` (and changes nothing)
    /// when one already is.
    pub fn begin_reload(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.is_loading = true;
        self.error = None;
        true
    }

    /// Applies the outcome of a reload. Loading is cleared either way.
    pub fn complete_reload(&mut self, outcome: Result<Vec<SalesRecord>, AppError>) {
        match outcome {
            Ok(records) => self.replace_records(records),
            Err(e) => self.error = Some(e.to_string()),
        }
        self.is_loading = false;
    }

    fn recompute_views(&mut self) {
        self.views = Arc::new(DerivedViews::compute(&self.records, &self.filters));
    }
}
