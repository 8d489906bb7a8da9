use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::WishlistStore;
use crate::core::error::{handle_db_error, Result};
use crate::features::categories::models::{Category, CategoryChanges};
use crate::features::items::models::{Item, ItemChanges, ItemFilter};

const CATEGORY_COLUMNS: &str = "id, name, description, created_at, updated_at";

const ITEM_COLUMNS: &str = "id, title, link, price, priority, status, category_id, notes, \
    created_at, updated_at";

/// Postgres-backed store
pub struct PgStore {
    pool: PgPool,
}

impl std::fmt::Debug for PgStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgStore")
            .field("pool", &"<PgPool>")
            .finish()
    }
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistStore for PgStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let query = format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories \
             ORDER BY name COLLATE category_name, name COLLATE \"C\", id"
        );
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn find_category(&self, id: Uuid) -> Result<Option<Category>> {
        let query = format!("SELECT {CATEGORY_COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let query = format!(
            "SELECT {CATEGORY_COLUMNS} FROM categories WHERE name COLLATE category_name = $1"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn insert_category(&self, category: Category) -> Result<Category> {
        let query = format!(
            "INSERT INTO categories (id, name, description, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(category.id)
            .bind(&category.name)
            .bind(&category.description)
            .bind(category.created_at)
            .bind(category.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn update_category(
        &self,
        id: Uuid,
        changes: CategoryChanges,
    ) -> Result<Option<Category>> {
        let description_provided = changes.description.is_some();
        let description = changes.description.flatten();

        let query = format!(
            "UPDATE categories SET \
                 name        = COALESCE($2, name), \
                 description = CASE WHEN $3 THEN $4 ELSE description END, \
                 updated_at  = NOW() \
             WHERE id = $1 \
             RETURNING {CATEGORY_COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&changes.name)
            .bind(description_provided)
            .bind(description)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn delete_category(&self, id: Uuid) -> Result<Option<u64>> {
        let mut tx = self.pool.begin().await.map_err(handle_db_error)?;

        // Row lock: item writes referencing this category wait on the FK check
        let locked =
            sqlx::query_scalar::<_, Uuid>("SELECT id FROM categories WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(handle_db_error)?;

        if locked.is_none() {
            return Ok(None);
        }

        let uncategorized = sqlx::query(
            "UPDATE items SET category_id = NULL, updated_at = NOW() WHERE category_id = $1",
        )
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(handle_db_error)?
        .rows_affected();

        sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(handle_db_error)?;

        tx.commit().await.map_err(handle_db_error)?;

        Ok(Some(uncategorized))
    }

    async fn list_items(&self, filter: &ItemFilter) -> Result<Vec<Item>> {
        let query = format!(
            "SELECT {ITEM_COLUMNS} FROM items \
             WHERE ($1::item_status IS NULL OR status = $1) \
             ORDER BY {}",
            filter.order_by_sql()
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(filter.status)
            .fetch_all(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn find_item(&self, id: Uuid) -> Result<Option<Item>> {
        let query = format!("SELECT {ITEM_COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn insert_item(&self, item: Item) -> Result<Item> {
        let query = format!(
            "INSERT INTO items \
                 (id, title, link, price, priority, status, category_id, notes, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(item.id)
            .bind(&item.title)
            .bind(&item.link)
            .bind(item.price)
            .bind(item.priority)
            .bind(item.status)
            .bind(item.category_id)
            .bind(&item.notes)
            .bind(item.created_at)
            .bind(item.updated_at)
            .fetch_one(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn update_item(&self, id: Uuid, changes: ItemChanges) -> Result<Option<Item>> {
        // Nullable columns: the flag says whether the client sent the field,
        // the value (possibly NULL) is what gets written
        let query = format!(
            "UPDATE items SET \
                 title       = COALESCE($2, title), \
                 link        = CASE WHEN $3 THEN $4 ELSE link END, \
                 price       = CASE WHEN $5 THEN $6 ELSE price END, \
                 priority    = COALESCE($7, priority), \
                 status      = COALESCE($8, status), \
                 category_id = CASE WHEN $9 THEN $10 ELSE category_id END, \
                 notes       = CASE WHEN $11 THEN $12 ELSE notes END, \
                 updated_at  = NOW() \
             WHERE id = $1 \
             RETURNING {ITEM_COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(&changes.title)
            .bind(changes.link.is_some())
            .bind(changes.link.clone().flatten())
            .bind(changes.price.is_some())
            .bind(changes.price.flatten())
            .bind(changes.priority)
            .bind(changes.status)
            .bind(changes.category_id.is_some())
            .bind(changes.category_id.flatten())
            .bind(changes.notes.is_some())
            .bind(changes.notes.clone().flatten())
            .fetch_optional(&self.pool)
            .await
            .map_err(handle_db_error)
    }

    async fn delete_item(&self, id: Uuid) -> Result<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(handle_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}
