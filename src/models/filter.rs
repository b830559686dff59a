//! Listing filters and the column allow-list used for tag dropdowns

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::{IntoParams, ToSchema};

use super::equipment::{ALL_KITS, ALL_OWNERS, ALL_TYPES};
use crate::error::AppError;

/// Tri-state purchased filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PurchasedFilter {
    #[default]
    All,
    Purchased,
    NotPurchased,
}

impl PurchasedFilter {
    /// Required value of the `not_purchased` column, if any
    pub fn not_purchased(&self) -> Option<bool> {
        match self {
            PurchasedFilter::All => None,
            PurchasedFilter::Purchased => Some(false),
            PurchasedFilter::NotPurchased => Some(true),
        }
    }
}

/// Equipment list filters. Missing, blank and "All ..." values do not filter.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct EquipmentFilter {
    /// Kit name, or "All Kits"
    pub kit_name: Option<String>,
    /// Type tag, or "All Types"
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
    /// Owner, or "All Owners"
    pub owner: Option<String>,
    #[serde(default)]
    pub purchased: PurchasedFilter,
}

impl EquipmentFilter {
    pub fn kit(kit_name: impl Into<String>) -> Self {
        Self {
            kit_name: Some(kit_name.into()),
            ..Default::default()
        }
    }

    pub fn active_kit_name(&self) -> Option<&str> {
        active(&self.kit_name, ALL_KITS)
    }

    pub fn active_type(&self) -> Option<&str> {
        active(&self.equipment_type, ALL_TYPES)
    }

    pub fn active_owner(&self) -> Option<&str> {
        active(&self.owner, ALL_OWNERS)
    }
}

fn active<'a>(value: &'a Option<String>, sentinel: &str) -> Option<&'a str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != sentinel)
}

/// Columns whose distinct values may be listed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum DistinctColumn {
    #[serde(rename = "type")]
    Type,
    KitName,
    Owner,
    Brand,
    Status,
    PurchaseCompany,
    Carrier,
    ShippingStatus,
    BoxNumber,
}

impl DistinctColumn {
    pub const ALL: [DistinctColumn; 9] = [
        DistinctColumn::Type,
        DistinctColumn::KitName,
        DistinctColumn::Owner,
        DistinctColumn::Brand,
        DistinctColumn::Status,
        DistinctColumn::PurchaseCompany,
        DistinctColumn::Carrier,
        DistinctColumn::ShippingStatus,
        DistinctColumn::BoxNumber,
    ];

    /// SQL identifier of the column
    pub fn column(&self) -> &'static str {
        match self {
            DistinctColumn::Type => "type",
            DistinctColumn::KitName => "kit_name",
            DistinctColumn::Owner => "owner",
            DistinctColumn::Brand => "brand",
            DistinctColumn::Status => "status",
            DistinctColumn::PurchaseCompany => "purchase_company",
            DistinctColumn::Carrier => "carrier",
            DistinctColumn::ShippingStatus => "shipping_status",
            DistinctColumn::BoxNumber => "box_number",
        }
    }
}

impl FromStr for DistinctColumn {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.column() == s)
            .ok_or_else(|| AppError::Validation(format!("Unknown column: {}", s)))
    }
}
