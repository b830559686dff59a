//! Equipment service

use validator::Validate;

use super::pictures::{Picture, PictureStore};
use crate::{
    error::{AppError, AppResult},
    models::{
        equipment::{
            Equipment, EquipmentForm, EquipmentShort, RenameReport, RenameRequest, ALL_KITS,
        },
        filter::{DistinctColumn, EquipmentFilter},
        shipping::{BoxSummary, KitShipmentFailure, KitShipmentReport, ShippingUpdate},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct EquipmentService {
    repository: Repository,
    pictures: PictureStore,
}

impl EquipmentService {
    pub fn new(repository: Repository, pictures: PictureStore) -> Self {
        Self {
            repository,
            pictures,
        }
    }

    pub async fn list(&self, filter: &EquipmentFilter) -> AppResult<Vec<EquipmentShort>> {
        self.repository.equipment.list(filter).await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<Equipment> {
        self.repository
            .equipment
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} not found", id)))
    }

    /// Validate and insert a new item. Nothing is written when the cost is unreadable.
    pub async fn create(&self, form: EquipmentForm) -> AppResult<Equipment> {
        let fields = form.into_fields()?;
        let id = self.repository.equipment.create(&fields).await?;
        tracing::info!("Equipment created: id={} name={:?}", id, fields.name);
        self.get_by_id(id).await
    }

    /// Overwrite every non-shipping field of the item being edited.
    ///
    /// A changed name also moves the item's picture once the row is saved.
    pub async fn update(&self, id: i64, form: EquipmentForm) -> AppResult<Equipment> {
        let fields = form.into_fields()?;
        let previous = self.get_by_id(id).await?;
        let affected = self.repository.equipment.update(id, &fields).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        tracing::info!("Equipment updated: id={}", id);

        match (previous.name.as_deref(), fields.name.as_deref()) {
            (Some(old_name), Some(new_name)) if old_name != new_name => {
                self.pictures.rename(old_name, new_name).await?;
            }
            _ => {}
        }
        self.get_by_id(id).await
    }

    /// Delete an item; deleting an unknown id does nothing
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let affected = self.repository.equipment.delete(id).await?;
        if affected == 0 {
            tracing::debug!("Delete of unknown equipment id={} ignored", id);
        } else {
            tracing::info!("Equipment deleted: id={}", id);
        }
        Ok(())
    }

    /// Set the supplied shipping fields, leaving the others untouched
    pub async fn update_shipping(&self, id: i64, update: &ShippingUpdate) -> AppResult<Equipment> {
        if update.is_empty() {
            return Err(AppError::Validation(
                "At least one shipping field must be supplied".to_string(),
            ));
        }
        let affected = self.repository.equipment.update_shipping(id, update).await?;
        if affected == 0 {
            return Err(AppError::NotFound(format!("Equipment {} not found", id)));
        }
        self.get_by_id(id).await
    }

    /// Apply one shipping update to every item of a kit.
    ///
    /// Items are updated one by one; a failing item is logged and reported
    /// while the others keep their update.
    pub async fn ship_kit(
        &self,
        kit_name: &str,
        update: &ShippingUpdate,
    ) -> AppResult<KitShipmentReport> {
        let kit_name = kit_name.trim();
        if kit_name.is_empty() || kit_name == ALL_KITS {
            return Err(AppError::Validation(format!("Invalid kit name: {:?}", kit_name)));
        }
        if update.is_empty() {
            return Err(AppError::Validation(
                "At least one shipping field must be supplied".to_string(),
            ));
        }

        let items = self.list(&EquipmentFilter::kit(kit_name)).await?;
        let mut report = KitShipmentReport {
            kit_name: kit_name.to_string(),
            ..Default::default()
        };

        for item in items {
            match self.repository.equipment.update_shipping(item.id, update).await {
                Ok(_) => report.updated.push(item.id),
                Err(e) => {
                    tracing::error!("Shipping update failed for equipment id={}: {}", item.id, e);
                    report.failed.push(KitShipmentFailure {
                        id: item.id,
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::info!(
            "Kit {:?} shipped: {} updated, {} failed",
            report.kit_name,
            report.updated.len(),
            report.failed.len()
        );
        Ok(report)
    }

    /// Values offered in tag dropdowns
    pub async fn distinct_values(&self, column: DistinctColumn) -> AppResult<Vec<String>> {
        self.repository.equipment.distinct_values(column).await
    }

    pub async fn boxes(&self) -> AppResult<Vec<String>> {
        self.repository.equipment.boxes().await
    }

    pub async fn box_summary(&self, box_number: &str) -> AppResult<BoxSummary> {
        let items = self.repository.equipment.items_in_box(box_number).await?;
        if items.is_empty() {
            return Err(AppError::NotFound(format!("Box {} not found", box_number)));
        }
        Ok(BoxSummary::new(box_number, items))
    }

    /// Rename every item named `old_name`, then its picture file
    pub async fn rename(&self, request: &RenameRequest) -> AppResult<RenameReport> {
        request.validate()?;
        let old_name = request.old_name.trim();
        let new_name = request.new_name.trim();
        if old_name.is_empty() || new_name.is_empty() {
            return Err(AppError::Validation("Names cannot be empty".to_string()));
        }

        let renamed = self
            .repository
            .equipment
            .rename_by_name(old_name, new_name)
            .await?;
        if renamed > 1 {
            tracing::info!("Renamed {} items sharing the name {:?}", renamed, old_name);
        }

        let picture_renamed = if renamed > 0 {
            self.pictures.rename(old_name, new_name).await?.is_some()
        } else {
            false
        };

        Ok(RenameReport {
            old_name: old_name.to_string(),
            new_name: new_name.to_string(),
            renamed,
            picture_renamed,
        })
    }

    /// Picture of an item, looked up by its name
    pub async fn picture(&self, id: i64) -> AppResult<Picture> {
        let equipment = self.get_by_id(id).await?;
        let name = equipment
            .name
            .ok_or_else(|| AppError::NotFound(format!("Equipment {} has no name", id)))?;
        self.pictures
            .read(&name)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No picture for {}", name)))
    }
}
