use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::core::error::Result;
use crate::core::extractor::{AppJson, AppPath, AppQuery};
use crate::features::items::dtos::{CreateItemDto, ItemQueryParams, ItemResponseDto, UpdateItemDto};
use crate::features::items::services::ItemService;
use crate::shared::types::{ErrorResponse, MessageResponse};

/// List items
///
/// Optional status filter. Sorted by priority descending unless `sortBy` /
/// `sortOrder` say otherwise.
#[utoipa::path(
    get,
    path = "/api/items",
    params(ItemQueryParams),
    responses(
        (status = 200, description = "List of items", body = Vec<ItemResponseDto>),
        (status = 400, description = "Unknown status, sortBy or sortOrder", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn list_items(
    State(service): State<Arc<ItemService>>,
    AppQuery(params): AppQuery<ItemQueryParams>,
) -> Result<Json<Vec<ItemResponseDto>>> {
    let items = service.list(params).await?;
    Ok(Json(items))
}

#[utoipa::path(
    get,
    path = "/api/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponseDto),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_item(
    State(service): State<Arc<ItemService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<ItemResponseDto>> {
    let item = service.get(id).await?;
    Ok(Json(item))
}

/// Create an item
#[utoipa::path(
    post,
    path = "/api/items",
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created", body = ItemResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn create_item(
    State(service): State<Arc<ItemService>>,
    AppJson(dto): AppJson<CreateItemDto>,
) -> Result<(StatusCode, Json<ItemResponseDto>)> {
    let item = service.create(dto).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Update an item
///
/// Only the fields present in the body change; `null` clears a nullable field.
#[utoipa::path(
    put,
    path = "/api/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 200, description = "Item updated", body = ItemResponseDto),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn update_item(
    State(service): State<Arc<ItemService>>,
    AppPath(id): AppPath<Uuid>,
    AppJson(dto): AppJson<UpdateItemDto>,
) -> Result<Json<ItemResponseDto>> {
    let item = service.update(id, dto).await?;
    Ok(Json(item))
}

#[utoipa::path(
    delete,
    path = "/api/items/{id}",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item deleted", body = MessageResponse),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn delete_item(
    State(service): State<Arc<ItemService>>,
    AppPath(id): AppPath<Uuid>,
) -> Result<Json<MessageResponse>> {
    let response = service.delete(id).await?;
    Ok(Json(response))
}
