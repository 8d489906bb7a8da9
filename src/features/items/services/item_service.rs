use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::items::dtos::{CreateItemDto, ItemQueryParams, ItemResponseDto, UpdateItemDto};
use crate::features::items::models::{Item, ItemChanges, ItemFilter, NewItem};
use crate::modules::store::WishlistStore;
use crate::shared::constants::ITEM_NOT_FOUND;
use crate::shared::types::MessageResponse;
use crate::shared::validation::{is_valid_link, is_valid_price, validation_message};

/// Service for wishlist item operations
pub struct ItemService {
    store: Arc<dyn WishlistStore>,
}

impl ItemService {
    pub fn new(store: Arc<dyn WishlistStore>) -> Self {
        Self { store }
    }

    /// List items, optionally filtered by status
    pub async fn list(&self, params: ItemQueryParams) -> Result<Vec<ItemResponseDto>> {
        let filter = ItemFilter::from(params);
        let items = self.store.list_items(&filter).await?;
        Ok(items.into_iter().map(|i| i.into()).collect())
    }

    /// Get item by id
    pub async fn get(&self, id: Uuid) -> Result<ItemResponseDto> {
        self.store
            .find_item(id)
            .await?
            .map(|i| i.into())
            .ok_or_else(|| AppError::NotFound(ITEM_NOT_FOUND.to_string()))
    }

    pub async fn create(&self, dto: CreateItemDto) -> Result<ItemResponseDto> {
        let dto = dto.normalized();
        if dto.title.is_empty() {
            return Err(AppError::Validation("Title is required".to_string()));
        }
        dto.validate()
            .map_err(|e| AppError::Validation(validation_message(&e)))?;
        check_link(dto.link.as_deref())?;
        check_price(dto.price.as_ref())?;
        self.check_category(dto.category_id).await?;

        let item = self
            .store
            .insert_item(Item::new(
                NewItem {
                    title: dto.title,
                    link: dto.link,
                    price: dto.price,
                    priority: dto.priority,
                    status: dto.status,
                    category_id: dto.category_id,
                    notes: dto.notes,
                },
                Utc::now(),
            ))
            .await?;

        tracing::info!(
            "Item created: id={}, title={}, status={}",
            item.id,
            item.title,
            item.status
        );

        Ok(item.into())
    }

    /// Partially update an item.
    ///
    /// Every supplied field goes through the same checks as `create`.
    pub async fn update(&self, id: Uuid, dto: UpdateItemDto) -> Result<ItemResponseDto> {
        let dto = dto.normalized();
        if dto.title.as_deref().is_some_and(str::is_empty) {
            return Err(AppError::Validation("Title cannot be empty".to_string()));
        }
        dto.validate()
            .map_err(|e| AppError::Validation(validation_message(&e)))?;
        if let Some(ref link) = dto.link {
            check_link(link.as_deref())?;
        }
        if let Some(ref price) = dto.price {
            check_price(price.as_ref())?;
        }

        if self.store.find_item(id).await?.is_none() {
            return Err(AppError::NotFound(ITEM_NOT_FOUND.to_string()));
        }
        if let Some(category_id) = dto.category_id {
            self.check_category(category_id).await?;
        }

        let changes = ItemChanges {
            title: dto.title,
            link: dto.link,
            price: dto.price,
            priority: dto.priority,
            status: dto.status,
            category_id: dto.category_id,
            notes: dto.notes,
        };

        let item = self
            .store
            .update_item(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound(ITEM_NOT_FOUND.to_string()))?;

        tracing::info!("Item updated: id={}", item.id);

        Ok(item.into())
    }

    pub async fn delete(&self, id: Uuid) -> Result<MessageResponse> {
        if !self.store.delete_item(id).await? {
            return Err(AppError::NotFound(ITEM_NOT_FOUND.to_string()));
        }

        tracing::info!("Item deleted: id={}", id);

        Ok(MessageResponse::new("Item deleted successfully"))
    }

    async fn check_category(&self, category_id: Option<Uuid>) -> Result<()> {
        let Some(category_id) = category_id else {
            return Ok(());
        };
        if self.store.find_category(category_id).await?.is_none() {
            return Err(AppError::Validation(format!(
                "Category {} does not exist",
                category_id
            )));
        }
        Ok(())
    }
}

fn check_link(link: Option<&str>) -> Result<()> {
    match link {
        Some(link) if !is_valid_link(link) => Err(AppError::Validation(
            "Link must be a valid http or https URL".to_string(),
        )),
        _ => Ok(()),
    }
}

fn check_price(price: Option<&Decimal>) -> Result<()> {
    match price {
        Some(price) if !is_valid_price(price) => Err(AppError::Validation(
            "Price must be a non-negative number".to_string(),
        )),
        _ => Ok(()),
    }
}
