//! Persistence for items and categories
//!
//! `WishlistStore` is the single seam the feature services talk to. Two
//! backends implement it:
//! - `PgStore`: Postgres through sqlx, cascade inside a transaction
//! - `MemoryStore`: process-local maps behind one `RwLock`
//!
//! Both enforce the same storage-level rules: category names are unique
//! ignoring case (`Conflict`), an item may only reference an existing
//! category (`BadRequest`), and deleting a category uncategorizes its items
//! atomically.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::Result;
use crate::features::categories::models::{Category, CategoryChanges};
use crate::features::items::models::{Item, ItemChanges, ItemFilter};

#[async_trait]
pub trait WishlistStore: Send + Sync {
    /// All categories, case-insensitive name order
    async fn list_categories(&self) -> Result<Vec<Category>>;

    async fn find_category(&self, id: Uuid) -> Result<Option<Category>>;

    /// Case-insensitive lookup by name
    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>>;

    async fn insert_category(&self, category: Category) -> Result<Category>;

    /// `None` when no category has this id
    async fn update_category(&self, id: Uuid, changes: CategoryChanges)
        -> Result<Option<Category>>;

    /// Delete a category and clear every item reference to it.
    ///
    /// Returns the number of uncategorized items, or `None` when no
    /// category has this id.
    async fn delete_category(&self, id: Uuid) -> Result<Option<u64>>;

    async fn list_items(&self, filter: &ItemFilter) -> Result<Vec<Item>>;

    async fn find_item(&self, id: Uuid) -> Result<Option<Item>>;

    async fn insert_item(&self, item: Item) -> Result<Item>;

    /// `None` when no item has this id
    async fn update_item(&self, id: Uuid, changes: ItemChanges) -> Result<Option<Item>>;

    /// `false` when no item has this id
    async fn delete_item(&self, id: Uuid) -> Result<bool>;
}
