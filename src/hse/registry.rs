use std::sync::Arc;

use tracing::info;

use super::domain::{Dimension, DimensionId};
use super::repository::{DimensionPatch, HseRepository, StoreError};

/// Service managing the set of risk dimensions.
///
/// Questions and rules reference dimensions but are never owned by them:
/// deleting a dimension unassigns its questions instead of cascading.
pub struct DimensionRegistry<R> {
    repository: Arc<R>,
}

impl<R> DimensionRegistry<R>
where
    R: HseRepository,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists dimensions in stable ascending-id order.
    pub fn list(&self) -> Result<Vec<Dimension>, StoreError> {
        let mut dimensions = self.repository.dimensions()?;
        dimensions.sort_by_key(|dimension| dimension.id);
        Ok(dimensions)
    }

    /// Creates a dimension with the default positive polarity.
    pub fn create(&self, name: &str) -> Result<Dimension, StoreError> {
        let dimension = self.repository.insert_dimension(name, true)?;
        info!(id = dimension.id.0, name = %dimension.name, "dimension created");
        Ok(dimension)
    }

    pub fn update(
        &self,
        id: DimensionId,
        patch: DimensionPatch,
    ) -> Result<Dimension, StoreError> {
        self.repository.update_dimension(id, patch)
    }

    /// Deletes a dimension and clears the association on every question that
    /// referenced it.
    pub fn delete(&self, id: DimensionId) -> Result<usize, StoreError> {
        self.repository.delete_dimension(id)?;
        let unassigned = self.repository.clear_dimension_assignment(id)?;
        info!(id = id.0, unassigned, "dimension deleted, questions unassigned");
        Ok(unassigned)
    }
}
