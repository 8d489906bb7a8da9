use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::categories::models::Category;
use crate::shared::constants::MAX_CATEGORY_NAME_LEN;
use crate::shared::serde_helpers::double_option;
use crate::shared::validation::normalize_text;

/// Request DTO for creating a category
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryDto {
    /// Category name, unique ignoring case
    #[validate(length(max = MAX_CATEGORY_NAME_LEN, message = "Category name must not exceed 100 characters"))]
    pub name: String,

    pub description: Option<String>,
}

impl CreateCategoryDto {
    /// Trim the name; blank descriptions become `None`
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            description: normalize_text(self.description),
        }
    }
}

/// Request DTO for a partial category update.
///
/// Absent fields are left unchanged; `"description": null` clears it.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryDto {
    #[validate(length(max = MAX_CATEGORY_NAME_LEN, message = "Category name must not exceed 100 characters"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

impl UpdateCategoryDto {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.map(|name| name.trim().to_string()),
            description: self.description.map(normalize_text),
        }
    }
}

/// Response DTO for category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Response DTO for a category delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteCategoryResponseDto {
    pub message: String,
    /// Items whose category reference was cleared
    pub uncategorized_items: u64,
}
