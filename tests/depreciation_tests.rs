mod common;

use common::date;
use statement_core::company::{DepreciationMethod, FixedAsset};
use statement_core::engine::{depreciation, WarningKind, DECLINING_BALANCE_RATE};

fn asset(method: DepreciationMethod, price: f64, life: u32, purchased: &str) -> FixedAsset {
    FixedAsset::new("Test asset", purchased, price, life, method)
}

#[test]
fn straight_line_halfway_through_its_life() {
    let asset = asset(DepreciationMethod::StraightLine, 10_000.0, 10, "2020-01-01");

    let result = depreciation(&asset, date(2025, 1, 1));

    assert_eq!(result.years_owned, 5.0);
    assert_eq!(result.accumulated, 5_000.0);
    assert_eq!(result.current_value, 5_000.0);
    assert!(result.warnings.is_empty());
}

#[test]
fn declining_balance_follows_the_fixed_rate() {
    let asset = asset(
        DepreciationMethod::DecliningBalance,
        10_000.0,
        8,
        "2024-01-01",
    );

    let result = depreciation(&asset, date(2025, 1, 1));

    let expected = 10_000.0 * (1.0 - (1.0 - DECLINING_BALANCE_RATE).powf(1.0));
    assert!((result.accumulated - expected).abs() < 1e-9);
    assert!((result.accumulated - 2_000.0).abs() < 1e-6);
}

#[test]
fn sum_of_years_front_loads_the_schedule() {
    let asset = asset(DepreciationMethod::SumOfYears, 9_000.0, 3, "2024-01-01");

    // Year one carries 3/6 of the cost.
    let result = depreciation(&asset, date(2025, 1, 1));
    assert!((result.accumulated - 4_500.0).abs() < 1e-9);

    // The full schedule consumes the whole cost.
    let exhausted = depreciation(&asset, date(2030, 1, 1));
    assert!((exhausted.accumulated - 9_000.0).abs() < 1e-9);
    assert!(exhausted.current_value.abs() < 1e-9);
}

#[test]
fn value_stays_within_bounds_for_any_date() {
    for method in [
        DepreciationMethod::StraightLine,
        DepreciationMethod::DecliningBalance,
        DepreciationMethod::SumOfYears,
    ] {
        let asset = asset(method, 12_000.0, 5, "2021-03-15");
        for year in 2019..2035 {
            let result = depreciation(&asset, date(year, 7, 1));
            assert!(
                result.current_value >= 0.0,
                "{method:?} went negative in {year}"
            );
            assert!(
                result.current_value <= 12_000.0,
                "{method:?} exceeded cost in {year}"
            );
            assert!(result.accumulated <= 12_000.0);
        }
    }
}

#[test]
fn dates_before_purchase_leave_the_asset_untouched() {
    let asset = asset(DepreciationMethod::StraightLine, 8_000.0, 4, "2025-06-01");

    let result = depreciation(&asset, date(2024, 1, 1));

    assert_eq!(result.years_owned, 0.0);
    assert_eq!(result.accumulated, 0.0);
    assert_eq!(result.current_value, 8_000.0);
}

#[test]
fn zero_useful_life_is_reported_not_divided() {
    let asset = asset(DepreciationMethod::StraightLine, 8_000.0, 0, "2020-01-01");

    let result = depreciation(&asset, date(2025, 1, 1));

    assert_eq!(result.accumulated, 0.0);
    assert!(result
        .warnings
        .iter()
        .any(|warning| matches!(warning.kind, WarningKind::ZeroDenominator)));
}

#[test]
fn unreadable_purchase_fields_zero_the_result_with_warnings() {
    let bad_date = asset(DepreciationMethod::StraightLine, 8_000.0, 4, "someday");

    let result = depreciation(&bad_date, date(2025, 1, 1));

    assert_eq!(result.accumulated, 0.0);
    assert_eq!(result.current_value, 0.0);
    assert!(result
        .warnings
        .iter()
        .any(|warning| matches!(warning.kind, WarningKind::UnparsableDate { .. })));
}
