use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::errors::AppError;
use crate::domain::sales::{Category, Department, SalesRecord};
use crate::time_utils::{parse_range_end, parse_range_start};

/// Optional inclusive bounds on record timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    pub fn unbounded() -> Self {
        Self::default()
    }

    /// 1 January of `now`'s year (00:00 UTC) up to `now`
    pub fn year_to_date(now: DateTime<Utc>) -> Self {
        let start = Utc.with_ymd_and_hms(now.year(), 1, 1, 0, 0, 0).single();
        Self { start, end: Some(now) }
    }

    /// Builds a range from user-supplied text. Empty strings mean "no bound";
    /// both full ISO timestamps and `YYYY-MM-DD` date-input values are accepted.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, AppError> {
        let start = match start.map(str::trim).filter(|s| !s.is_empty()) {
            Some(text) => Some(parse_range_start(text)?),
            None => None,
        };
        let end = match end.map(str::trim).filter(|s| !s.is_empty()) {
            Some(text) => Some(parse_range_end(text)?),
            None => None,
        };
        Ok(Self { start, end })
    }

    pub fn contains(&self, timestamp: DateTime<Utc>) -> bool {
        self.start.is_none_or(|start| timestamp >= start)
            && self.end.is_none_or(|end| timestamp <= end)
    }
}

/// Active restriction applied before aggregation
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub date_range: DateRange,
    /// Empty means every category passes
    pub categories: BTreeSet<Category>,
    /// Empty means every department passes
    pub departments: BTreeSet<Department>,
}

impl FilterCriteria {
    /// Current calendar year to `now`, no category or department restriction
    pub fn default_for(now: DateTime<Utc>) -> Self {
        Self { date_range: DateRange::year_to_date(now), ..Self::default() }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        self.date_range.contains(record.timestamp)
            && (self.categories.is_empty() || self.categories.contains(&record.category))
            && (self.departments.is_empty() || self.departments.contains(&record.department))
    }

    /// Shallow merge: every field present in `update` replaces ours wholesale
    pub fn merged(&self, update: FilterUpdate) -> Self {
        Self {
            date_range: update.date_range.unwrap_or(self.date_range),
            categories: update.categories.unwrap_or_else(|| self.categories.clone()),
            departments: update.departments.unwrap_or_else(|| self.departments.clone()),
        }
    }
}

/// Partial criteria for `AnalyticsState::update_filters`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterUpdate {
    pub date_range: Option<DateRange>,
    pub categories: Option<BTreeSet<Category>>,
    pub departments: Option<BTreeSet<Department>>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn categories(mut self, categories: impl IntoIterator<Item = Category>) -> Self {
        self.categories = Some(categories.into_iter().collect());
        self
    }

    pub fn departments(mut self, departments: impl IntoIterator<Item = Department>) -> Self {
        self.departments = Some(departments.into_iter().collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_to_date_starts_on_first_of_january() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap();
        let range = DateRange::year_to_date(now);
        assert_eq!(range.start, Some(Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap()));
        assert_eq!(range.end, Some(now));
    }

    #[test]
    fn bounds_are_inclusive() {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let range = DateRange::new(Some(at), Some(at));
        assert!(range.contains(at));
        assert!(!range.contains(at + chrono::Duration::milliseconds(1)));
        assert!(DateRange::unbounded().contains(at));
    }

    #[test]
    fn merge_replaces_only_given_fields() {
        let base = FilterCriteria {
            date_range: DateRange::unbounded(),
            categories: [Category::Beauty].into_iter().collect(),
            departments: [Department::Europe].into_iter().collect(),
        };
        let merged = base.merged(FilterUpdate::new().categories([Category::Sports]));
        assert_eq!(merged.categories, [Category::Sports].into_iter().collect());
        assert_eq!(merged.departments, base.departments);
        assert_eq!(merged.date_range, base.date_range);
    }

    #[test]
    fn parse_accepts_date_inputs_and_blanks() {
        let range = DateRange::parse(Some("2024-01-01"), Some("")).unwrap();
        assert_eq!(range.start, Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()));
        assert_eq!(range.end, None);
        assert!(DateRange::parse(Some("yesterday"), None).is_err());
    }
}
