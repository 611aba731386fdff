use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::common::RawDate;
use crate::money::RawAmount;

/// A capitalized asset tracked for depreciation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FixedAsset {
    pub id: Uuid,
    pub name: String,
    pub purchase_date: RawDate,
    pub purchase_price: RawAmount,
    pub useful_life_years: u32,
    pub method: DepreciationMethod,
    /// Book figure as maintained by the asset register; the depreciation
    /// engine recomputes schedules independently of it.
    #[serde(default)]
    pub accumulated_depreciation: RawAmount,
    #[serde(default)]
    pub status: AssetStatus,
}

impl FixedAsset {
    pub fn new(
        name: impl Into<String>,
        purchase_date: impl Into<RawDate>,
        purchase_price: impl Into<RawAmount>,
        useful_life_years: u32,
        method: DepreciationMethod,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            purchase_date: purchase_date.into(),
            purchase_price: purchase_price.into(),
            useful_life_years,
            method,
            accumulated_depreciation: RawAmount::Number(0.0),
            status: AssetStatus::Active,
        }
    }
}

/// Allocation method for spreading an asset's cost over its useful life.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DepreciationMethod {
    StraightLine,
    DecliningBalance,
    SumOfYears,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AssetStatus {
    #[default]
    Active,
    Disposed,
}
