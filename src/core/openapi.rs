use utoipa::{Modify, OpenApi};

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};
use crate::features::health;
use crate::features::items::{
    dtos as items_dtos, handlers as items_handlers, models as items_models,
};
use crate::shared::types::{ErrorResponse, HealthResponse, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Items
        items_handlers::list_items,
        items_handlers::get_item,
        items_handlers::create_item,
        items_handlers::update_item,
        items_handlers::delete_item,
        // Categories
        categories_handlers::list_categories,
        categories_handlers::get_category,
        categories_handlers::create_category,
        categories_handlers::update_category,
        categories_handlers::delete_category,
        // Health
        health::health_check,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            MessageResponse,
            HealthResponse,
            // Items
            items_models::ItemStatus,
            items_models::ItemSortBy,
            items_models::SortDirection,
            items_dtos::CreateItemDto,
            items_dtos::UpdateItemDto,
            items_dtos::ItemResponseDto,
            // Categories
            categories_dtos::CreateCategoryDto,
            categories_dtos::UpdateCategoryDto,
            categories_dtos::CategoryResponseDto,
            categories_dtos::DeleteCategoryResponseDto,
        )
    ),
    tags(
        (name = "items", description = "Wishlist items"),
        (name = "categories", description = "Item categories"),
        (name = "health", description = "Liveness check"),
    ),
    info(
        title = "Wishlist API",
        version = "0.1.0",
        description = "API documentation for the wishlist service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
