//! Shipping fields, boxes and kit shipments

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// The ten shipping columns; the only columns a shipping update may touch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ShippingField {
    Carrier,
    TrackingNumber,
    ShippingAddress,
    ShippingCity,
    ShippingState,
    ShippingZip,
    ShippedDate,
    BoxNumber,
    ShippingDestinationName,
    ShippingStatus,
}

impl ShippingField {
    pub fn column(&self) -> &'static str {
        match self {
            ShippingField::Carrier => "carrier",
            ShippingField::TrackingNumber => "tracking_number",
            ShippingField::ShippingAddress => "shipping_address",
            ShippingField::ShippingCity => "shipping_city",
            ShippingField::ShippingState => "shipping_state",
            ShippingField::ShippingZip => "shipping_zip",
            ShippingField::ShippedDate => "shipped_date",
            ShippingField::BoxNumber => "box_number",
            ShippingField::ShippingDestinationName => "shipping_destination_name",
            ShippingField::ShippingStatus => "shipping_status",
        }
    }
}

/// Partial shipping update.
///
/// An absent key leaves the column alone, `null` (or blank text) clears it,
/// a value overwrites it. Keys other than the shipping columns are rejected.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ShippingUpdate {
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub carrier: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub tracking_number: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub shipping_address: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub shipping_city: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub shipping_state: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub shipping_zip: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>, format = Date)]
    pub shipped_date: Option<Option<NaiveDate>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub box_number: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub shipping_destination_name: Option<Option<String>>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub shipping_status: Option<Option<String>>,
}

impl ShippingUpdate {
    pub fn is_empty(&self) -> bool {
        self.assignments().is_empty()
    }

    /// Supplied columns with the value to store (`None` stores NULL)
    pub fn assignments(&self) -> Vec<(ShippingField, Option<String>)> {
        let mut sets = Vec::new();

        macro_rules! add_field {
            ($field:ident, $variant:expr) => {
                if let Some(ref value) = self.$field {
                    sets.push(($variant, super::equipment::clean(value.clone())));
                }
            };
        }

        add_field!(carrier, ShippingField::Carrier);
        add_field!(tracking_number, ShippingField::TrackingNumber);
        add_field!(shipping_address, ShippingField::ShippingAddress);
        add_field!(shipping_city, ShippingField::ShippingCity);
        add_field!(shipping_state, ShippingField::ShippingState);
        add_field!(shipping_zip, ShippingField::ShippingZip);
        if let Some(date) = self.shipped_date {
            sets.push((
                ShippingField::ShippedDate,
                date.map(|d| d.format("%Y-%m-%d").to_string()),
            ));
        }
        add_field!(box_number, ShippingField::BoxNumber);
        add_field!(shipping_destination_name, ShippingField::ShippingDestinationName);
        add_field!(shipping_status, ShippingField::ShippingStatus);

        sets
    }
}

/// One item packed in a box
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BoxItem {
    pub name: Option<String>,
    #[sqlx(try_from = "f64")]
    pub weight: Decimal,
    pub kit_name: Option<String>,
}

/// Contents of a box with its total weight
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BoxSummary {
    pub box_number: String,
    pub items: Vec<BoxItem>,
    pub total_weight: Decimal,
}

impl BoxSummary {
    pub fn new(box_number: impl Into<String>, items: Vec<BoxItem>) -> Self {
        let total_weight = items.iter().map(|item| item.weight).sum();
        Self {
            box_number: box_number.into(),
            items,
            total_weight,
        }
    }
}

/// A kit item whose shipping update failed
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct KitShipmentFailure {
    pub id: i64,
    pub message: String,
}

/// Outcome of shipping every item of a kit.
///
/// Items are updated one statement at a time; a failure leaves the earlier
/// items updated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct KitShipmentReport {
    pub kit_name: String,
    pub updated: Vec<i64>,
    pub failed: Vec<KitShipmentFailure>,
}
