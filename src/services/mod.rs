//! Business logic services

pub mod equipment;
pub mod pictures;

use crate::{config::StorageConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub equipment: equipment::EquipmentService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, storage: &StorageConfig) -> Self {
        let pictures = pictures::PictureStore::new(storage.pictures_dir.clone());
        Self {
            equipment: equipment::EquipmentService::new(repository.clone(), pictures),
            repository,
        }
    }
}
