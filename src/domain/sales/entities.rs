pub use super::value_objects::{Category, Department, Quantity, Revenue};
use chrono::{DateTime, Datelike, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Domain entity - one sales transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub timestamp: DateTime<Utc>,
    pub revenue: Revenue,
    pub category: Category,
    pub department: Department,
    pub quantity: Quantity,
}

impl SalesRecord {
    pub fn new(
        timestamp: DateTime<Utc>,
        revenue: Revenue,
        category: Category,
        department: Department,
        quantity: Quantity,
    ) -> Self {
        Self { timestamp, revenue, category, department, quantity }
    }

    /// ISO-8601 with millisecond precision, e.g. `2024-01-15T10:30:00.000Z`
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Zero-based calendar month (UTC)
    pub fn month_index(&self) -> usize {
        self.timestamp.month0() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamp_renders_with_millis_and_z_suffix() {
        let record = SalesRecord::new(
            Utc.with_ymd_and_hms(2024, 3, 5, 8, 0, 0).unwrap(),
            Revenue::from_amount(10.0),
            Category::Sports,
            Department::Europe,
            Quantity::new(1).unwrap(),
        );
        assert_eq!(record.timestamp_iso(), "2024-03-05T08:00:00.000Z");
        assert_eq!(record.month_index(), 2);
    }
}
