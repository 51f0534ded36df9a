use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use strum::IntoEnumIterator;

use super::entities::SalesRecord;
use super::value_objects::{Category, Department, Quantity, Revenue};
use crate::domain::errors::AppError;
use crate::domain::logging::{LogComponent, get_time_provider};
use crate::log_debug;

pub const DEFAULT_RECORD_COUNT: usize = 500;
pub const DEFAULT_LOOKBACK_DAYS: i64 = 365;

/// Produces `count` synthetic sales in `[now - lookback_days, now]`,
/// sorted ascending by timestamp. Fails when the window is negative or does
/// not fit in the calendar.
pub fn generate_sales_records<R: Rng + ?Sized>(
    rng: &mut R,
    now: DateTime<Utc>,
    count: usize,
    lookback_days: i64,
) -> Result<Vec<SalesRecord>, AppError> {
    let start = lookback_start(now, lookback_days)?;
    let window_ms = (now - start).num_milliseconds();
    let categories: Vec<Category> = Category::iter().collect();
    let departments: Vec<Department> = Department::iter().collect();

    let mut records = (0..count)
        .map(|_| {
            let timestamp = start + Duration::milliseconds(rng.gen_range(0..=window_ms));
            let category = categories[rng.gen_range(0..categories.len())];
            let department = departments[rng.gen_range(0..departments.len())];
            let quantity = Quantity::new(rng.gen_range(Quantity::MIN..=Quantity::MAX))?;
            let unit_price = category.price_range().lerp(rng.r#gen::<f64>());

            Ok(SalesRecord::new(
                timestamp,
                Revenue::from_sale(quantity, unit_price),
                category,
                department,
                quantity,
            ))
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    records.sort_by_key(|record| record.timestamp);
    Ok(records)
}

fn lookback_start(now: DateTime<Utc>, lookback_days: i64) -> Result<DateTime<Utc>, AppError> {
    if lookback_days < 0 {
        return Err(AppError::GenerationError(format!(
            "lookback window must not be negative, got {} days",
            lookback_days
        )));
    }
    Duration::try_days(lookback_days)
        .and_then(|window| now.checked_sub_signed(window))
        .ok_or_else(|| {
            AppError::GenerationError(format!("lookback window of {} days is out of range", lookback_days))
        })
}

/// Where the dashboard gets a fresh dataset from
pub trait SalesDataSource {
    fn load(&self) -> Result<Vec<SalesRecord>, AppError>;
}

/// Generator-backed source using the thread RNG and the global clock
#[derive(Debug, Clone)]
pub struct MockSalesSource {
    count: usize,
    lookback_days: i64,
}

impl MockSalesSource {
    pub fn new(count: usize, lookback_days: i64) -> Self {
        Self { count, lookback_days }
    }
}

impl Default for MockSalesSource {
    fn default() -> Self {
        Self::new(DEFAULT_RECORD_COUNT, DEFAULT_LOOKBACK_DAYS)
    }
}

impl SalesDataSource for MockSalesSource {
    fn load(&self) -> Result<Vec<SalesRecord>, AppError> {
        let records = generate_sales_records(
            &mut rand::thread_rng(),
            get_time_provider().now(),
            self.count,
            self.lookback_days,
        )?;
        log_debug!(
            LogComponent::Domain("Generator"),
            "Generated {} sales records over {} days",
            records.len(),
            self.lookback_days
        );
        Ok(records)
    }
}
