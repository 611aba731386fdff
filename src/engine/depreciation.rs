use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use super::normalize;
use super::warnings::{RecordSource, RecordWarning};
use crate::company::{DepreciationMethod, FixedAsset};

/// Annual rate used by the declining-balance method.
pub const DECLINING_BALANCE_RATE: f64 = 0.20;

/// Depreciation position of a single asset as of a date.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DepreciationResult {
    pub asset_id: Uuid,
    pub method: DepreciationMethod,
    /// Calendar years between purchase and `as_of`, clamped to
    /// `[0, useful_life_years]`.
    pub years_owned: f64,
    /// Never exceeds the purchase price.
    pub accumulated: f64,
    /// `purchase_price - accumulated`, never negative.
    pub current_value: f64,
    pub warnings: Vec<RecordWarning>,
}

/// Computes an asset's depreciation schedule position as of `as_of`.
///
/// An unreadable purchase date or price degrades to a zeroed result with the
/// failure reported in `warnings`.
pub fn depreciation(asset: &FixedAsset, as_of: NaiveDate) -> DepreciationResult {
    let mut warnings = Vec::new();

    let price = normalize::magnitude_field(
        RecordSource::FixedAsset,
        asset.id,
        "purchase_price",
        &asset.purchase_price,
        &mut warnings,
    );
    let purchased = normalize::date_field(
        RecordSource::FixedAsset,
        asset.id,
        "purchase_date",
        &asset.purchase_date,
        &mut warnings,
    );
    let (Some(price), Some(purchased)) = (price, purchased) else {
        return DepreciationResult {
            asset_id: asset.id,
            method: asset.method,
            years_owned: 0.0,
            accumulated: 0.0,
            current_value: 0.0,
            warnings,
        };
    };

    let life = asset.useful_life_years;
    let years_owned = year_fraction(purchased, as_of).clamp(0.0, life as f64);

    let accumulated = if life == 0 {
        warnings.push(RecordWarning::zero_denominator("useful_life_years"));
        0.0
    } else {
        match asset.method {
            DepreciationMethod::StraightLine => price / life as f64 * years_owned,
            DepreciationMethod::DecliningBalance => {
                price * (1.0 - (1.0 - DECLINING_BALANCE_RATE).powf(years_owned))
            }
            DepreciationMethod::SumOfYears => sum_of_years(price, life, years_owned),
        }
    };
    let accumulated = accumulated.clamp(0.0, price);

    DepreciationResult {
        asset_id: asset.id,
        method: asset.method,
        years_owned,
        accumulated,
        current_value: price - accumulated,
        warnings,
    }
}

/// Calendar-accurate year fraction between two dates.
///
/// Whole ownership years are counted on anniversaries, so round anniversaries
/// produce exact integers; the year in progress contributes its elapsed-day
/// share. Returns `0` when `to` is not after `from`.
fn year_fraction(from: NaiveDate, to: NaiveDate) -> f64 {
    if to <= from {
        return 0.0;
    }
    let mut whole: i32 = 0;
    let mut next = anniversary(from, 1);
    while next <= to {
        whole += 1;
        next = anniversary(from, whole + 1);
    }
    let prev = anniversary(from, whole);
    let span = (next - prev).num_days();
    let elapsed = (to - prev).num_days();
    let fraction = if span > 0 {
        elapsed as f64 / span as f64
    } else {
        0.0
    };
    whole as f64 + fraction
}

/// Purchase-date anniversary `years` years out; Feb 29 falls back to Feb 28
/// in non-leap years.
fn anniversary(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
        .unwrap_or(date)
}

/// Explicit per-year digit-sum schedule: each completed year takes its full
/// weighted slice, the year in progress a prorated one. `years_owned` must
/// already be clamped to the useful life.
fn sum_of_years(price: f64, life: u32, years_owned: f64) -> f64 {
    let digits = (life * (life + 1)) as f64 / 2.0;
    let full_years = years_owned.floor() as u32;
    let mut accumulated = 0.0;
    for year in 1..=life {
        let weight = (life - year + 1) as f64 / digits;
        if year <= full_years {
            accumulated += price * weight;
        } else {
            accumulated += price * weight * (years_owned - full_years as f64);
            break;
        }
    }
    accumulated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn whole_anniversaries_are_exact() {
        assert_eq!(year_fraction(date(2020, 1, 1), date(2025, 1, 1)), 5.0);
        assert_eq!(year_fraction(date(2020, 3, 15), date(2021, 3, 15)), 1.0);
    }

    #[test]
    fn partial_years_are_prorated() {
        let half = year_fraction(date(2023, 1, 1), date(2023, 7, 2));
        assert!((half - 0.5).abs() < 0.01, "got {half}");
    }

    #[test]
    fn before_purchase_is_zero() {
        assert_eq!(year_fraction(date(2025, 1, 1), date(2024, 1, 1)), 0.0);
    }

    #[test]
    fn leap_day_purchases_step_safely() {
        assert_eq!(year_fraction(date(2024, 2, 29), date(2025, 2, 28)), 1.0);
    }

    #[test]
    fn sum_of_years_full_schedule_consumes_the_price() {
        let accumulated = sum_of_years(9000.0, 3, 3.0);
        assert!((accumulated - 9000.0).abs() < 1e-9);
    }

    #[test]
    fn sum_of_years_front_loads() {
        // 3-year life: weights 3/6, 2/6, 1/6.
        let first_year = sum_of_years(6000.0, 3, 1.0);
        assert!((first_year - 3000.0).abs() < 1e-9);
        let half_year = sum_of_years(6000.0, 3, 0.5);
        assert!((half_year - 1500.0).abs() < 1e-9);
    }
}
