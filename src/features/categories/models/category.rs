use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::shared::collation::{compare_names, names_match};

/// Database model for category
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields touched by a partial update. `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl Category {
    pub fn new(name: String, description: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::now_v7(),
            name,
            description,
            created_at: now,
            updated_at: now,
        }
    }

    /// Name collision check used for uniqueness (case ignored, accents count)
    pub fn has_name(&self, name: &str) -> bool {
        names_match(&self.name, name)
    }

    /// Listing order: collated name, then exact name, then id.
    /// Mirrors `ORDER BY name COLLATE category_name, name COLLATE "C", id`.
    pub fn cmp_by_name(a: &Category, b: &Category) -> Ordering {
        compare_names(&a.name, &b.name)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    }

    pub fn apply(&mut self, changes: CategoryChanges, now: DateTime<Utc>) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        self.updated_at = now;
    }
}
