use serde::{Serialize, Serializer, ser::SerializeMap};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use super::filters::FilterCriteria;
use crate::domain::sales::{Category, Department, SalesRecord};
use crate::time_utils::MONTH_ABBREVIATIONS;

/// Revenue per calendar month, all twelve buckets always present
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyRevenue([f64; 12]);

impl MonthlyRevenue {
    pub fn from_records(records: &[SalesRecord]) -> Self {
        let mut buckets = [0.0; 12];
        for record in records {
            buckets[record.month_index()] += record.revenue.value();
        }
        Self(buckets)
    }

    /// Lookup by abbreviation (`"Jan"`..`"Dec"`)
    pub fn get(&self, month: &str) -> Option<f64> {
        MONTH_ABBREVIATIONS.iter().position(|m| *m == month).map(|index| self.0[index])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        MONTH_ABBREVIATIONS.iter().copied().zip(self.0.iter().copied())
    }

    pub fn total(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Serialize for MonthlyRevenue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(MONTH_ABBREVIATIONS.len()))?;
        for (month, revenue) in self.iter() {
            map.serialize_entry(month, &revenue)?;
        }
        map.end()
    }
}

/// Order-preserving filter pass
pub fn filter_records(records: &[SalesRecord], criteria: &FilterCriteria) -> Vec<SalesRecord> {
    records.iter().filter(|record| criteria.matches(record)).cloned().collect()
}

pub fn total_revenue(records: &[SalesRecord]) -> f64 {
    records.iter().map(|record| record.revenue.value()).sum()
}

/// Only categories that occur get a key
pub fn revenue_by_category(records: &[SalesRecord]) -> BTreeMap<Category, f64> {
    records.iter().fold(BTreeMap::new(), |mut acc, record| {
        *acc.entry(record.category).or_insert(0.0) += record.revenue.value();
        acc
    })
}

pub fn unique_categories(records: &[SalesRecord]) -> Vec<Category> {
    records.iter().map(|record| record.category).collect::<BTreeSet<_>>().into_iter().collect()
}

pub fn unique_departments(records: &[SalesRecord]) -> Vec<Department> {
    records.iter().map(|record| record.department).collect::<BTreeSet<_>>().into_iter().collect()
}

/// Everything the UI reads that depends on (records, criteria)
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedViews {
    pub filtered_records: Arc<Vec<SalesRecord>>,
    pub total_revenue: f64,
    pub revenue_by_category: BTreeMap<Category, f64>,
    pub revenue_by_month: MonthlyRevenue,
}

impl DerivedViews {
    pub fn compute(records: &[SalesRecord], criteria: &FilterCriteria) -> Self {
        let filtered = filter_records(records, criteria);
        Self {
            total_revenue: total_revenue(&filtered),
            revenue_by_category: revenue_by_category(&filtered),
            revenue_by_month: MonthlyRevenue::from_records(&filtered),
            filtered_records: Arc::new(filtered),
        }
    }

    pub fn record_count(&self) -> usize {
        self.filtered_records.len()
    }

    /// Total divided by order count; zero when nothing passes the filters
    pub fn average_order_value(&self) -> f64 {
        match self.record_count() {
            0 => 0.0,
            n => self.total_revenue / n as f64,
        }
    }
}
