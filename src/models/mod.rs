//! Data models for the equipment tracker

pub mod equipment;
pub mod filter;
pub mod shipping;

// Re-export commonly used types
pub use equipment::{
    Equipment, EquipmentFields, EquipmentForm, EquipmentShort, EquipmentStatus, RenameReport,
    RenameRequest,
};
pub use filter::{DistinctColumn, EquipmentFilter, PurchasedFilter};
pub use shipping::{BoxItem, BoxSummary, KitShipmentReport, ShippingField, ShippingUpdate};
