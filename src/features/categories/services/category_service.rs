use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::categories::dtos::{
    CategoryResponseDto, CreateCategoryDto, DeleteCategoryResponseDto, UpdateCategoryDto,
};
use crate::features::categories::models::{Category, CategoryChanges};
use crate::modules::store::WishlistStore;
use crate::shared::constants::{CATEGORY_NAME_TAKEN, CATEGORY_NOT_FOUND};
use crate::shared::validation::validation_message;

/// Service for category operations
pub struct CategoryService {
    store: Arc<dyn WishlistStore>,
}

impl CategoryService {
    pub fn new(store: Arc<dyn WishlistStore>) -> Self {
        Self { store }
    }

    /// List all categories sorted by name, ignoring case
    pub async fn list(&self) -> Result<Vec<CategoryResponseDto>> {
        let categories = self.store.list_categories().await?;
        Ok(categories.into_iter().map(|c| c.into()).collect())
    }

    /// Get category by id
    pub async fn get(&self, id: Uuid) -> Result<CategoryResponseDto> {
        self.store
            .find_category(id)
            .await?
            .map(|c| c.into())
            .ok_or_else(|| AppError::NotFound(CATEGORY_NOT_FOUND.to_string()))
    }

    /// Create a category with a name no other category uses (ignoring case)
    pub async fn create(&self, dto: CreateCategoryDto) -> Result<CategoryResponseDto> {
        let dto = dto.normalized();
        if dto.name.is_empty() {
            return Err(AppError::Validation(
                "Category name is required".to_string(),
            ));
        }
        dto.validate()
            .map_err(|e| AppError::Validation(validation_message(&e)))?;

        if self.store.find_category_by_name(&dto.name).await?.is_some() {
            return Err(AppError::Conflict(CATEGORY_NAME_TAKEN.to_string()));
        }

        let category = self
            .store
            .insert_category(Category::new(dto.name, dto.description, Utc::now()))
            .await?;

        tracing::info!(
            "Category created: id={}, name={}",
            category.id,
            category.name
        );

        Ok(category.into())
    }

    /// Partially update a category.
    ///
    /// A new name must still be unique among the other categories.
    pub async fn update(&self, id: Uuid, dto: UpdateCategoryDto) -> Result<CategoryResponseDto> {
        let dto = dto.normalized();
        if dto.name.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::Validation(
                "Category name cannot be empty".to_string(),
            ));
        }
        dto.validate()
            .map_err(|e| AppError::Validation(validation_message(&e)))?;

        if self.store.find_category(id).await?.is_none() {
            return Err(AppError::NotFound(CATEGORY_NOT_FOUND.to_string()));
        }

        if let Some(ref name) = dto.name {
            let taken = self
                .store
                .find_category_by_name(name)
                .await?
                .is_some_and(|existing| existing.id != id);
            if taken {
                return Err(AppError::Conflict(CATEGORY_NAME_TAKEN.to_string()));
            }
        }

        let changes = CategoryChanges {
            name: dto.name,
            description: dto.description,
        };

        let category = self
            .store
            .update_category(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound(CATEGORY_NOT_FOUND.to_string()))?;

        tracing::info!("Category updated: id={}", category.id);

        Ok(category.into())
    }

    /// Delete a category. Items that referenced it become uncategorized.
    pub async fn delete(&self, id: Uuid) -> Result<DeleteCategoryResponseDto> {
        let uncategorized_items = self
            .store
            .delete_category(id)
            .await?
            .ok_or_else(|| AppError::NotFound(CATEGORY_NOT_FOUND.to_string()))?;

        tracing::info!(
            "Category deleted: id={}, uncategorized_items={}",
            id,
            uncategorized_items
        );

        Ok(DeleteCategoryResponseDto {
            message: "Category deleted successfully. Items are now uncategorized.".to_string(),
            uncategorized_items,
        })
    }
}
