use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::items::models::{Item, ItemFilter, ItemSortBy, ItemStatus, SortDirection};
use crate::shared::constants::{MAX_ITEM_TITLE_LEN, MAX_PRIORITY, MIN_PRIORITY};
use crate::shared::serde_helpers::{double_option, empty_string_as_none};
use crate::shared::validation::normalize_text;

/// Request DTO for creating an item.
///
/// `price` accepts a JSON number or a numeric string.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemDto {
    #[validate(length(max = MAX_ITEM_TITLE_LEN, message = "Title must not exceed 200 characters"))]
    pub title: String,

    /// Absolute http(s) URL
    pub link: Option<String>,

    #[schema(value_type = Option<f64>, example = 19.99)]
    pub price: Option<Decimal>,

    /// 1 (lowest) to 5 (highest)
    #[validate(range(min = MIN_PRIORITY, max = MAX_PRIORITY, message = "Priority must be between 1 and 5"))]
    pub priority: i32,

    pub status: ItemStatus,

    pub category_id: Option<Uuid>,

    pub notes: Option<String>,
}

impl CreateItemDto {
    /// Trim text fields; blank optional text becomes `None`
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            link: normalize_text(self.link),
            notes: normalize_text(self.notes),
            ..self
        }
    }
}

/// Request DTO for a partial item update.
///
/// Absent fields are left unchanged. `link`, `price`, `categoryId` and
/// `notes` may be sent as `null` to clear them.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemDto {
    #[validate(length(max = MAX_ITEM_TITLE_LEN, message = "Title must not exceed 200 characters"))]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub link: Option<Option<String>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Option<Decimal>>,

    #[validate(range(min = MIN_PRIORITY, max = MAX_PRIORITY, message = "Priority must be between 1 and 5"))]
    pub priority: Option<i32>,

    pub status: Option<ItemStatus>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<Uuid>)]
    pub category_id: Option<Option<Uuid>>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub notes: Option<Option<String>>,
}

impl UpdateItemDto {
    pub fn normalized(self) -> Self {
        Self {
            title: self.title.map(|title| title.trim().to_string()),
            link: self.link.map(normalize_text),
            notes: self.notes.map(normalize_text),
            ..self
        }
    }
}

/// Query params for listing items. Empty values fall back to the defaults.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ItemQueryParams {
    /// Only items with this status
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<ItemStatus>,

    /// Sort field, default `priority`
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sort_by: Option<ItemSortBy>,

    /// Sort direction, default `desc`
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub sort_order: Option<SortDirection>,
}

impl From<ItemQueryParams> for ItemFilter {
    fn from(params: ItemQueryParams) -> Self {
        Self {
            status: params.status,
            sort_by: params.sort_by.unwrap_or_default(),
            sort_order: params.sort_order.unwrap_or_default(),
        }
    }
}

/// Response DTO for item
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponseDto {
    pub id: Uuid,
    pub title: String,
    pub link: Option<String>,
    #[serde(with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub price: Option<Decimal>,
    pub priority: i32,
    pub status: ItemStatus,
    pub category_id: Option<Uuid>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponseDto {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            title: item.title,
            link: item.link,
            price: item.price,
            priority: item.priority,
            status: item.status,
            category_id: item.category_id,
            notes: item.notes,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_accepts_price_as_number_or_string() {
        let from_number: CreateItemDto = serde_json::from_value(json!({
            "title": "Lamp", "price": 12.5, "priority": 3, "status": "want"
        }))
        .unwrap();
        let from_string: CreateItemDto = serde_json::from_value(json!({
            "title": "Lamp", "price": "12.5", "priority": 3, "status": "want"
        }))
        .unwrap();

        assert_eq!(from_number.price, Some(Decimal::new(125, 1)));
        assert_eq!(from_string.price, Some(Decimal::new(125, 1)));
    }

    #[test]
    fn test_create_rejects_non_numeric_price_and_unknown_status() {
        let bad_price = serde_json::from_value::<CreateItemDto>(json!({
            "title": "Lamp", "price": "cheap", "priority": 3, "status": "want"
        }));
        assert!(bad_price.is_err());

        let bad_status = serde_json::from_value::<CreateItemDto>(json!({
            "title": "Lamp", "priority": 3, "status": "lost"
        }));
        assert!(bad_status.is_err());
    }

    #[test]
    fn test_create_priority_range() {
        for (priority, valid) in [(0, false), (1, true), (5, true), (6, false)] {
            let dto: CreateItemDto = serde_json::from_value(json!({
                "title": "Lamp", "priority": priority, "status": "want"
            }))
            .unwrap();
            assert_eq!(dto.validate().is_ok(), valid, "priority {}", priority);
        }
    }

    #[test]
    fn test_update_tracks_explicit_nulls() {
        let dto: UpdateItemDto = serde_json::from_value(json!({
            "price": null,
            "categoryId": null,
            "status": "archived"
        }))
        .unwrap();

        assert_eq!(dto.price, Some(None));
        assert_eq!(dto.category_id, Some(None));
        assert_eq!(dto.link, None);
        assert_eq!(dto.notes, None);
        assert_eq!(dto.title, None);
        assert_eq!(dto.status, Some(ItemStatus::Archived));
    }

    #[test]
    fn test_update_normalizes_blank_notes_to_clear() {
        let dto = UpdateItemDto {
            title: Some("  Lamp ".to_string()),
            notes: Some(Some("   ".to_string())),
            ..Default::default()
        }
        .normalized();

        assert_eq!(dto.title.as_deref(), Some("Lamp"));
        assert_eq!(dto.notes, Some(None));
    }

    #[test]
    fn test_query_params_default_to_priority_desc() {
        let filter: ItemFilter = ItemQueryParams::default().into();
        assert_eq!(filter, ItemFilter::default());

        let params: ItemQueryParams = serde_json::from_value(json!({
            "status": "bought", "sortBy": "price", "sortOrder": "asc"
        }))
        .unwrap();
        let filter: ItemFilter = params.into();
        assert_eq!(filter.status, Some(ItemStatus::Bought));
        assert_eq!(filter.sort_by, ItemSortBy::Price);
        assert_eq!(filter.sort_order, SortDirection::Asc);
    }

    #[test]
    fn test_response_serializes_price_as_number() {
        let dto: CreateItemDto = serde_json::from_value(json!({
            "title": "Lamp", "price": "19.99", "priority": 2, "status": "considering"
        }))
        .unwrap();
        let item = Item::new(
            crate::features::items::models::NewItem {
                title: dto.title,
                link: None,
                price: dto.price,
                priority: dto.priority,
                status: dto.status,
                category_id: None,
                notes: None,
            },
            Utc::now(),
        );

        let json = serde_json::to_value(ItemResponseDto::from(item)).unwrap();
        assert_eq!(json["price"], json!(19.99));
        assert_eq!(json["categoryId"], json!(null));
        assert!(json.get("createdAt").is_some());
    }
}
