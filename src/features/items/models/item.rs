use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

/// Item status enum matching database enum.
///
/// A classification, not a workflow: any status may follow any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type, ToSchema)]
#[sqlx(type_name = "item_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Considering,
    Want,
    Bought,
    Archived,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 4] = [
        ItemStatus::Considering,
        ItemStatus::Want,
        ItemStatus::Bought,
        ItemStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Considering => "considering",
            ItemStatus::Want => "want",
            ItemStatus::Bought => "bought",
            ItemStatus::Archived => "archived",
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid status '{}'", s))
    }
}

/// Database model for a wishlist item
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub link: Option<String>,
    pub price: Option<Decimal>,
    pub priority: i32,
    pub status: ItemStatus,
    /// Weak reference: cleared when the category is deleted
    pub category_id: Option<Uuid>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields touched by a partial update.
///
/// Outer `None` leaves the column unchanged; for nullable columns
/// `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemChanges {
    pub title: Option<String>,
    pub link: Option<Option<String>>,
    pub price: Option<Option<Decimal>>,
    pub priority: Option<i32>,
    pub status: Option<ItemStatus>,
    pub category_id: Option<Option<Uuid>>,
    pub notes: Option<Option<String>>,
}

/// Validated input for a new item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub title: String,
    pub link: Option<String>,
    pub price: Option<Decimal>,
    pub priority: i32,
    pub status: ItemStatus,
    pub category_id: Option<Uuid>,
    pub notes: Option<String>,
}

impl Item {
    pub fn new(input: NewItem, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: input.title,
            link: input.link,
            price: input.price,
            priority: input.priority,
            status: input.status,
            category_id: input.category_id,
            notes: input.notes,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, changes: ItemChanges, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(link) = changes.link {
            self.link = link;
        }
        if let Some(price) = changes.price {
            self.price = price;
        }
        if let Some(priority) = changes.priority {
            self.priority = priority;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(category_id) = changes.category_id {
            self.category_id = category_id;
        }
        if let Some(notes) = changes.notes {
            self.notes = notes;
        }
        self.updated_at = now;
    }

    /// Drop the category reference (cascade of a category delete)
    pub fn uncategorize(&mut self, now: DateTime<Utc>) {
        self.category_id = None;
        self.updated_at = now;
    }
}
