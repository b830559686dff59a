//! Equipment model

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Sqlite};
use std::str::FromStr;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// Value stored in `type` and `kit_name` when nothing was chosen
pub const NONE_TAG: &str = "None";
/// Placeholder meaning "no kit filter"
pub const ALL_KITS: &str = "All Kits";
/// Placeholder meaning "no type filter"
pub const ALL_TYPES: &str = "All Types";
/// Placeholder meaning "no owner filter"
pub const ALL_OWNERS: &str = "All Owners";

/// Where an item currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EquipmentStatus {
    #[serde(rename = "In Office")]
    InOffice,
    #[serde(rename = "Checked Out")]
    CheckedOut,
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,
    #[serde(rename = "Retired")]
    Retired,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 4] = [
        EquipmentStatus::InOffice,
        EquipmentStatus::CheckedOut,
        EquipmentStatus::UnderMaintenance,
        EquipmentStatus::Retired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentStatus::InOffice => "In Office",
            EquipmentStatus::CheckedOut => "Checked Out",
            EquipmentStatus::UnderMaintenance => "Under Maintenance",
            EquipmentStatus::Retired => "Retired",
        }
    }
}

impl std::fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EquipmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid equipment status: {}", s))
    }
}

// SQLx conversion for EquipmentStatus (stored as its display text)
impl sqlx::Type<Sqlite> for EquipmentStatus {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <String as sqlx::Type<Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <String as sqlx::Type<Sqlite>>::compatible(ty)
    }
}

impl<'r> Decode<'r, Sqlite> for EquipmentStatus {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Sqlite>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl<'q> Encode<'q, Sqlite> for EquipmentStatus {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> sqlx::encode::IsNull {
        <&str as Encode<Sqlite>>::encode(self.as_str(), buf)
    }
}

/// Equipment record, decoded by column name
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Equipment {
    pub id: i64,
    pub name: Option<String>,
    /// Free-text type tag, `"None"` when unset
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub equipment_type: Option<String>,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub purchase_company: Option<String>,
    pub date_of_purchase: Option<NaiveDate>,
    #[sqlx(try_from = "f64")]
    pub cost: Decimal,
    /// Set when the item is insured
    pub date_insured: Option<NaiveDate>,
    pub owner: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub not_purchased: bool,
    #[sqlx(try_from = "f64")]
    pub weight: Decimal,
    pub description: Option<String>,
    pub website_url: Option<String>,
    pub model_number: Option<String>,
    /// Free-text kit tag, `"None"` when unset
    pub kit_name: Option<String>,
    pub carrier: Option<String>,
    pub tracking_number: Option<String>,
    pub shipping_address: Option<String>,
    pub shipping_city: Option<String>,
    pub shipping_state: Option<String>,
    pub shipping_zip: Option<String>,
    pub shipped_date: Option<NaiveDate>,
    pub box_number: Option<String>,
    pub shipping_destination_name: Option<String>,
    pub shipping_status: Option<String>,
}

impl Equipment {
    pub fn is_insured(&self) -> bool {
        self.date_insured.is_some()
    }
}

/// Short representation used by the equipment list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct EquipmentShort {
    pub id: i64,
    pub name: Option<String>,
}

/// Equipment form as submitted by a client.
///
/// Cost and weight arrive as raw text, the way they were typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct EquipmentForm {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[validate(length(max = 100, message = "Type must be at most 100 characters"))]
    pub equipment_type: Option<String>,
    #[validate(length(max = 255))]
    pub brand: Option<String>,
    #[validate(length(max = 255))]
    pub model: Option<String>,
    #[validate(length(max = 255))]
    pub model_number: Option<String>,
    pub description: Option<String>,
    #[validate(length(max = 255))]
    pub serial_number: Option<String>,
    #[validate(length(max = 100, message = "Kit name must be at most 100 characters"))]
    pub kit_name: Option<String>,
    #[validate(length(max = 100))]
    pub owner: Option<String>,
    pub status: Option<EquipmentStatus>,
    #[serde(default)]
    pub not_purchased: bool,
    #[validate(length(max = 255))]
    pub purchase_company: Option<String>,
    pub date_of_purchase: Option<NaiveDate>,
    /// Decimal text; blank means 0
    pub cost: Option<String>,
    #[validate(length(max = 2048))]
    pub website_url: Option<String>,
    pub date_insured: Option<NaiveDate>,
    /// Decimal text; blank or unreadable means 0
    pub weight: Option<String>,
}

/// Validated, typed column values written on create and full update
#[derive(Debug, Clone, PartialEq)]
pub struct EquipmentFields {
    pub name: Option<String>,
    pub equipment_type: String,
    pub brand: Option<String>,
    pub model: Option<String>,
    pub model_number: Option<String>,
    pub description: Option<String>,
    pub serial_number: Option<String>,
    pub kit_name: String,
    pub owner: Option<String>,
    pub status: Option<EquipmentStatus>,
    pub not_purchased: bool,
    pub purchase_company: Option<String>,
    pub date_of_purchase: Option<NaiveDate>,
    pub cost: Decimal,
    pub website_url: Option<String>,
    pub date_insured: Option<NaiveDate>,
    pub weight: Decimal,
}

impl EquipmentForm {
    /// Validate the form and coerce it into column values.
    ///
    /// An unreadable cost rejects the whole form; an unreadable weight becomes 0.
    pub fn into_fields(self) -> AppResult<EquipmentFields> {
        self.validate()?;

        let cost = parse_cost(self.cost.as_deref())?;
        let weight = parse_weight(self.weight.as_deref());

        Ok(EquipmentFields {
            name: clean(self.name),
            equipment_type: tag_or_none(self.equipment_type, ALL_TYPES, "type")?,
            brand: clean(self.brand),
            model: clean(self.model),
            model_number: clean(self.model_number),
            description: clean(self.description),
            serial_number: clean(self.serial_number),
            kit_name: tag_or_none(self.kit_name, ALL_KITS, "kit name")?,
            owner: owner_tag(self.owner)?,
            status: self.status,
            not_purchased: self.not_purchased,
            purchase_company: clean(self.purchase_company),
            date_of_purchase: self.date_of_purchase,
            cost,
            website_url: clean(self.website_url),
            date_insured: self.date_insured,
            weight,
        })
    }
}

/// Rename every item sharing a name
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RenameRequest {
    #[validate(length(min = 1, max = 255, message = "Old name must be 1-255 characters"))]
    pub old_name: String,
    #[validate(length(min = 1, max = 255, message = "New name must be 1-255 characters"))]
    pub new_name: String,
}

/// Outcome of a rename by name
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RenameReport {
    pub old_name: String,
    pub new_name: String,
    /// Number of rows renamed; several items may share a name
    pub renamed: u64,
    /// Whether a picture file was moved to the new name
    pub picture_renamed: bool,
}

/// Parse a cost typed by the user. Blank is 0.
pub fn parse_cost(raw: Option<&str>) -> AppResult<Decimal> {
    match raw.map(str::trim) {
        None | Some("") => Ok(Decimal::ZERO),
        Some(text) => Decimal::from_str(text).map_err(|_| {
            AppError::Validation("Invalid cost value. Please enter a valid number.".to_string())
        }),
    }
}

/// Parse a weight typed by the user. Never fails.
pub fn parse_weight(raw: Option<&str>) -> Decimal {
    match raw.map(str::trim) {
        None | Some("") => Decimal::ZERO,
        Some(text) => Decimal::from_str(text).unwrap_or_else(|_| {
            tracing::debug!("Unreadable weight {:?}, storing 0", text);
            Decimal::ZERO
        }),
    }
}

/// Trim a text field; blank becomes NULL
pub(crate) fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn tag_or_none(value: Option<String>, sentinel: &str, label: &str) -> AppResult<String> {
    match clean(value) {
        Some(v) if v == sentinel => Err(sentinel_error(sentinel, label)),
        Some(v) => Ok(v),
        None => Ok(NONE_TAG.to_string()),
    }
}

fn owner_tag(value: Option<String>) -> AppResult<Option<String>> {
    match clean(value) {
        Some(v) if v == ALL_OWNERS => Err(sentinel_error(ALL_OWNERS, "owner")),
        other => Ok(other),
    }
}

fn sentinel_error(sentinel: &str, label: &str) -> AppError {
    AppError::Validation(format!("\"{}\" cannot be used as a {}", sentinel, label))
}
