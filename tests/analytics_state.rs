use chrono::{DateTime, Duration, TimeZone, Utc};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sales_dashboard_wasm::domain::analytics::{
    AnalyticsState, DateRange, FilterCriteria, FilterUpdate,
};
use sales_dashboard_wasm::domain::errors::AppError;
use sales_dashboard_wasm::domain::sales::{
    Category, Department, Quantity, Revenue, SalesRecord, generate_sales_records,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use strum::IntoEnumIterator;

fn record(
    at: DateTime<Utc>,
    category: Category,
    department: Department,
    revenue: f64,
    quantity: u32,
) -> SalesRecord {
    SalesRecord::new(at, Revenue::from(revenue), category, department, Quantity::new(quantity).unwrap())
}

/// Jan 2023 Electronics/NA 200, Jan 2024 Electronics/NA 100, Feb 2024 Clothing/EU 50
fn three_records() -> Vec<SalesRecord> {
    vec![
        record(Utc.with_ymd_and_hms(2023, 1, 20, 12, 0, 0).unwrap(), Category::Electronics, Department::NorthAmerica, 200.0, 5),
        record(Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap(), Category::Electronics, Department::NorthAmerica, 100.0, 4),
        record(Utc.with_ymd_and_hms(2024, 2, 10, 9, 0, 0).unwrap(), Category::Clothing, Department::Europe, 50.0, 2),
    ]
}

fn year_2024() -> DateRange {
    DateRange::parse(Some("2024-01-01"), Some("2024-12-31")).unwrap()
}

#[test]
fn electronics_in_2024_scenario() {
    let mut state = AnalyticsState::new(three_records(), FilterCriteria::default());
    state.update_filters(FilterUpdate::new().categories([Category::Electronics]).date_range(year_2024()));

    let views = state.views();
    assert_eq!(views.filtered_records.as_slice(), &three_records()[1..2]);
    assert_eq!(views.total_revenue, 100.0);
    assert_eq!(views.revenue_by_category.len(), 1);
    assert_eq!(views.revenue_by_category[&Category::Electronics], 100.0);
    assert_eq!(views.revenue_by_month.get("Jan"), Some(100.0));
    for (month, revenue) in views.revenue_by_month.iter().filter(|(m, _)| *m != "Jan") {
        assert_eq!(revenue, 0.0, "{} should be empty", month);
    }
}

#[test]
fn months_bucket_across_years() {
    let state = AnalyticsState::new(three_records(), FilterCriteria::default());
    let by_month = state.views().revenue_by_month;
    assert_eq!(by_month.iter().count(), 12);
    assert_eq!(by_month.get("Jan"), Some(300.0));
    assert_eq!(by_month.get("Feb"), Some(50.0));
    assert_eq!(by_month.get("Dec"), Some(0.0));
    assert_eq!(by_month.get("January"), None);
}

#[test]
fn unique_values_come_from_raw_records() {
    let mut state = AnalyticsState::new(three_records(), FilterCriteria::default());
    state.update_filters(FilterUpdate::new().categories([Category::Clothing]));

    assert_eq!(state.views().record_count(), 1);
    assert_eq!(state.unique_categories().as_slice(), &[Category::Electronics, Category::Clothing]);
    assert_eq!(state.unique_departments().as_slice(), &[Department::NorthAmerica, Department::Europe]);
}

#[test]
fn identical_criteria_keep_cached_views() {
    let mut state = AnalyticsState::new(three_records(), FilterCriteria::default());
    let update = FilterUpdate::new().categories([Category::Electronics]);

    assert!(state.update_filters(update.clone()));
    let first = Arc::clone(&state.views().filtered_records);
    assert!(!state.update_filters(update));
    assert!(Arc::ptr_eq(&first, &state.views().filtered_records));
}

#[test]
fn set_date_range_leaves_other_criteria_alone() {
    let mut state = AnalyticsState::new(three_records(), FilterCriteria::default());
    state.update_filters(FilterUpdate::new().departments([Department::NorthAmerica]));
    state.set_date_range(year_2024());

    assert_eq!(state.filters().date_range, year_2024());
    assert_eq!(state.filters().departments, BTreeSet::from([Department::NorthAmerica]));
    assert_eq!(state.views().total_revenue, 100.0);
}

#[test]
fn empty_result_has_zero_aggregates() {
    let mut state = AnalyticsState::new(three_records(), FilterCriteria::default());
    state.update_filters(FilterUpdate::new().categories([Category::Beauty]));

    assert_eq!(state.views().total_revenue, 0.0);
    assert!(state.views().revenue_by_category.is_empty());
    assert_eq!(state.views().revenue_by_month.total(), 0.0);
    assert_eq!(state.views().average_order_value(), 0.0);
}

#[test]
fn reload_failure_sets_error_and_clears_loading() {
    let mut state = AnalyticsState::new(three_records(), FilterCriteria::default());
    assert!(state.begin_reload());
    assert!(state.is_loading());

    state.complete_reload(Err(AppError::GenerationError("source offline".to_string())));
    assert!(!state.is_loading());
    assert_eq!(state.error(), Some("Data Generation Error: source offline"));
    assert_eq!(state.records().len(), 3);
}

#[test]
fn reload_while_loading_is_refused_and_next_reload_clears_error() {
    let mut state = AnalyticsState::new(Vec::new(), FilterCriteria::default());
    assert!(state.begin_reload());
    assert!(!state.begin_reload());
    state.complete_reload(Err(AppError::GenerationError("first".to_string())));

    assert!(state.begin_reload());
    assert_eq!(state.error(), None);
    state.complete_reload(Ok(three_records()));
    assert!(!state.is_loading());
    assert_eq!(state.records().len(), 3);
    assert_eq!(state.views().total_revenue, 350.0);
}

fn pick<T: Copy>(all: impl Iterator<Item = T>, mask: u8) -> BTreeSet<T>
where
    T: Ord,
{
    all.enumerate().filter(|(i, _)| mask & (1 << i) != 0).map(|(_, v)| v).collect()
}

#[quickcheck]
fn filtered_records_match_membership_rule(seed: u64, cat_mask: u8, dept_mask: u8, from_day: u16, span_days: u16) -> bool {
    let now = Utc.with_ymd_and_hms(2026, 6, 30, 0, 0, 0).unwrap();
    let records = generate_sales_records(&mut StdRng::seed_from_u64(seed), now, 120, 365).unwrap();
    let start = now - Duration::days(400) + Duration::days((from_day % 400) as i64);
    let end = start + Duration::days((span_days % 200) as i64);
    let categories = pick(Category::iter(), cat_mask);
    let departments = pick(Department::iter(), dept_mask);

    let criteria = FilterCriteria {
        date_range: DateRange::new(Some(start), Some(end)),
        categories: categories.clone(),
        departments: departments.clone(),
    };
    let state = AnalyticsState::new(records.clone(), criteria);
    let views = state.views();

    let expected: Vec<SalesRecord> = records
        .into_iter()
        .filter(|r| r.timestamp >= start && r.timestamp <= end)
        .filter(|r| categories.is_empty() || categories.contains(&r.category))
        .filter(|r| departments.is_empty() || departments.contains(&r.department))
        .collect();

    let month_sum = views.revenue_by_month.total();
    let category_sum: f64 = views.revenue_by_category.values().sum();

    *views.filtered_records == expected
        && views.revenue_by_month.iter().count() == 12
        && (month_sum - views.total_revenue).abs() < 1e-6
        && (category_sum - views.total_revenue).abs() < 1e-6
}
