use chrono::{Duration, TimeZone, Utc};
use quickcheck_macros::quickcheck;
use rand::SeedableRng;
use rand::rngs::StdRng;
use sales_dashboard_wasm::domain::config::DashboardConfig;
use sales_dashboard_wasm::domain::errors::AppError;
use sales_dashboard_wasm::domain::sales::{
    Category, Department, MockSalesSource, PriceRange, SalesDataSource, generate_sales_records,
};

fn fixed_now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[quickcheck]
fn generated_records_stay_in_trailing_year_and_sorted(seed: u64, count: u8) -> bool {
    let now = fixed_now();
    let records = generate_sales_records(&mut StdRng::seed_from_u64(seed), now, count as usize, 365).unwrap();
    let window_start = now - Duration::days(365);

    records.len() == count as usize
        && records.iter().all(|r| r.timestamp >= window_start && r.timestamp <= now)
        && records.windows(2).all(|pair| pair[0].timestamp <= pair[1].timestamp)
}

#[quickcheck]
fn revenue_is_quantity_times_category_price(seed: u64) -> bool {
    let records = generate_sales_records(&mut StdRng::seed_from_u64(seed), fixed_now(), 100, 365).unwrap();

    records.iter().all(|record| {
        let range = record.category.price_range();
        let quantity = record.quantity.value() as f64;
        let revenue = record.revenue.value();
        let cents = revenue * 100.0;

        (1..=100).contains(&record.quantity.value())
            && revenue >= round2(quantity * range.min) - 1e-9
            && revenue <= round2(quantity * range.max) + 1e-9
            && (cents - cents.round()).abs() < 1e-6
    })
}

#[test]
fn same_seed_gives_same_dataset() {
    let a = generate_sales_records(&mut StdRng::seed_from_u64(7), fixed_now(), 50, 365).unwrap();
    let b = generate_sales_records(&mut StdRng::seed_from_u64(7), fixed_now(), 50, 365).unwrap();
    assert_eq!(a, b);
}

#[test]
fn default_dataset_covers_every_category_and_department() {
    let records = generate_sales_records(&mut StdRng::seed_from_u64(42), fixed_now(), 500, 365).unwrap();
    assert_eq!(records.len(), 500);
    for category in Category::all() {
        assert!(records.iter().any(|r| r.category == category), "missing {}", category);
    }
    for department in Department::all() {
        assert!(records.iter().any(|r| r.department == department), "missing {}", department);
    }
}

#[test]
fn category_price_ranges_match_catalogue() {
    assert_eq!(Category::Electronics.price_range(), PriceRange::new(200.0, 1000.0));
    assert_eq!(Category::Clothing.price_range(), PriceRange::new(30.0, 100.0));
    assert_eq!(Category::HomeAndGarden.price_range(), PriceRange::new(50.0, 250.0));
    assert_eq!(Category::Sports.price_range(), PriceRange::new(40.0, 200.0));
    assert_eq!(Category::Beauty.price_range(), PriceRange::new(20.0, 100.0));
    assert_eq!(PriceRange::for_category_name("Garden Gnomes"), PriceRange::new(50.0, 200.0));
}

#[test]
fn mock_source_produces_configured_count() {
    let records = MockSalesSource::new(25, 30).load().unwrap();
    assert_eq!(records.len(), 25);
    assert!(records.windows(2).all(|pair| pair[0].timestamp <= pair[1].timestamp));
}

#[test]
fn mock_source_rejects_negative_window() {
    assert!(MockSalesSource::new(10, -1).load().is_err());
}

#[test]
fn negative_window_is_a_generation_error() {
    let outcome = generate_sales_records(&mut StdRng::seed_from_u64(1), fixed_now(), 10, -1);
    assert!(matches!(outcome, Err(AppError::GenerationError(_))));
}

#[test]
fn oversized_window_from_config_is_a_generation_error() {
    let config: DashboardConfig = serde_json::from_str(r#"{"lookback_days": 9223372036854775807}"#).unwrap();
    let outcome = MockSalesSource::new(3, config.lookback_days).load();
    assert!(matches!(outcome, Err(AppError::GenerationError(_))));

    let just_too_far = generate_sales_records(&mut StdRng::seed_from_u64(1), fixed_now(), 3, 400_000_000);
    assert!(just_too_far.is_err());
}
