use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::WishlistStore;
use crate::core::error::{AppError, Result};
use crate::features::categories::models::{Category, CategoryChanges};
use crate::features::items::models::{Item, ItemChanges, ItemFilter};
use crate::shared::constants::CATEGORY_NAME_TAKEN;

#[derive(Default)]
struct MemoryState {
    categories: HashMap<Uuid, Category>,
    items: HashMap<Uuid, Item>,
}

impl MemoryState {
    /// Same rule as the `category_name` unique index
    fn ensure_name_free(&self, name: &str, except: Option<Uuid>) -> Result<()> {
        let taken = self
            .categories
            .values()
            .any(|c| Some(c.id) != except && c.has_name(name));

        if taken {
            return Err(AppError::Conflict(CATEGORY_NAME_TAKEN.to_string()));
        }
        Ok(())
    }

    /// Same rule as the `items.category_id` foreign key
    fn ensure_category_exists(&self, category_id: Option<Uuid>) -> Result<()> {
        match category_id {
            Some(id) if !self.categories.contains_key(&id) => Err(AppError::BadRequest(
                "Referenced category does not exist".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

/// Process-local store. Every operation takes the single lock, so the
/// category delete cascade is atomic with respect to other requests.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl WishlistStore for MemoryStore {
    async fn list_categories(&self) -> Result<Vec<Category>> {
        let state = self.state.read().await;
        let mut categories: Vec<Category> = state.categories.values().cloned().collect();
        categories.sort_by(Category::cmp_by_name);
        Ok(categories)
    }

    async fn find_category(&self, id: Uuid) -> Result<Option<Category>> {
        Ok(self.state.read().await.categories.get(&id).cloned())
    }

    async fn find_category_by_name(&self, name: &str) -> Result<Option<Category>> {
        let state = self.state.read().await;
        Ok(state
            .categories
            .values()
            .find(|c| c.has_name(name))
            .cloned())
    }

    async fn insert_category(&self, category: Category) -> Result<Category> {
        let mut state = self.state.write().await;
        state.ensure_name_free(&category.name, None)?;
        state.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn update_category(
        &self,
        id: Uuid,
        changes: CategoryChanges,
    ) -> Result<Option<Category>> {
        let mut state = self.state.write().await;
        if !state.categories.contains_key(&id) {
            return Ok(None);
        }
        if let Some(ref name) = changes.name {
            state.ensure_name_free(name, Some(id))?;
        }

        let category = state.categories.get_mut(&id).map(|category| {
            category.apply(changes, Utc::now());
            category.clone()
        });
        Ok(category)
    }

    async fn delete_category(&self, id: Uuid) -> Result<Option<u64>> {
        let mut state = self.state.write().await;
        if state.categories.remove(&id).is_none() {
            return Ok(None);
        }

        let now = Utc::now();
        let mut uncategorized = 0;
        for item in state
            .items
            .values_mut()
            .filter(|item| item.category_id == Some(id))
        {
            item.uncategorize(now);
            uncategorized += 1;
        }
        Ok(Some(uncategorized))
    }

    async fn list_items(&self, filter: &ItemFilter) -> Result<Vec<Item>> {
        let state = self.state.read().await;
        let mut items: Vec<Item> = state
            .items
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        items.sort_by(|a, b| filter.compare(a, b));
        Ok(items)
    }

    async fn find_item(&self, id: Uuid) -> Result<Option<Item>> {
        Ok(self.state.read().await.items.get(&id).cloned())
    }

    async fn insert_item(&self, item: Item) -> Result<Item> {
        let mut state = self.state.write().await;
        state.ensure_category_exists(item.category_id)?;
        state.items.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update_item(&self, id: Uuid, changes: ItemChanges) -> Result<Option<Item>> {
        let mut state = self.state.write().await;
        if !state.items.contains_key(&id) {
            return Ok(None);
        }
        if let Some(category_id) = changes.category_id {
            state.ensure_category_exists(category_id)?;
        }

        let item = state.items.get_mut(&id).map(|item| {
            item.apply(changes, Utc::now());
            item.clone()
        });
        Ok(item)
    }

    async fn delete_item(&self, id: Uuid) -> Result<bool> {
        Ok(self.state.write().await.items.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::items::models::{ItemStatus, NewItem};

    fn new_item(title: &str, category_id: Option<Uuid>) -> Item {
        Item::new(
            NewItem {
                title: title.to_string(),
                link: None,
                price: None,
                priority: 3,
                status: ItemStatus::Want,
                category_id,
                notes: None,
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_insert_category_rejects_case_insensitive_duplicate() {
        let store = MemoryStore::new();
        store
            .insert_category(Category::new("Books".to_string(), None, Utc::now()))
            .await
            .unwrap();

        let result = store
            .insert_category(Category::new("BOOKS".to_string(), None, Utc::now()))
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_name_collisions_ignore_case_but_not_accents() {
        let store = MemoryStore::new();
        store
            .insert_category(Category::new("Éclair".to_string(), None, Utc::now()))
            .await
            .unwrap();

        let same = store
            .insert_category(Category::new("éCLAIR".to_string(), None, Utc::now()))
            .await;
        assert!(matches!(same, Err(AppError::Conflict(_))));

        store
            .insert_category(Category::new("Eclair".to_string(), None, Utc::now()))
            .await
            .unwrap();
        assert!(store.find_category_by_name("ÉCLAIR").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_list_categories_is_locale_aware() {
        let store = MemoryStore::new();
        for name in ["zebra", "Éclair", "apple"] {
            store
                .insert_category(Category::new(name.to_string(), None, Utc::now()))
                .await
                .unwrap();
        }

        let names: Vec<String> = store
            .list_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["apple", "Éclair", "zebra"]);
    }

    #[tokio::test]
    async fn test_rename_onto_own_name_is_allowed() {
        let store = MemoryStore::new();
        let books = store
            .insert_category(Category::new("Books".to_string(), None, Utc::now()))
            .await
            .unwrap();

        let renamed = store
            .update_category(
                books.id,
                CategoryChanges {
                    name: Some("books".to_string()),
                    description: None,
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(renamed.name, "books");
    }

    #[tokio::test]
    async fn test_insert_item_with_unknown_category_fails() {
        let store = MemoryStore::new();
        let result = store.insert_item(new_item("Lamp", Some(Uuid::now_v7()))).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_delete_category_counts_uncategorized_items() {
        let store = MemoryStore::new();
        let books = store
            .insert_category(Category::new("Books".to_string(), None, Utc::now()))
            .await
            .unwrap();
        let games = store
            .insert_category(Category::new("Games".to_string(), None, Utc::now()))
            .await
            .unwrap();

        store.insert_item(new_item("Dune", Some(books.id))).await.unwrap();
        store.insert_item(new_item("Emma", Some(books.id))).await.unwrap();
        let chess = store.insert_item(new_item("Chess", Some(games.id))).await.unwrap();

        assert_eq!(store.delete_category(books.id).await.unwrap(), Some(2));
        assert_eq!(store.delete_category(books.id).await.unwrap(), None);

        let remaining = store.list_items(&ItemFilter::default()).await.unwrap();
        assert_eq!(remaining.len(), 3);
        for item in remaining {
            if item.id == chess.id {
                assert_eq!(item.category_id, Some(games.id));
            } else {
                assert_eq!(item.category_id, None);
            }
        }
    }

    #[tokio::test]
    async fn test_missing_records() {
        let store = MemoryStore::new();
        let id = Uuid::now_v7();

        assert!(store.find_item(id).await.unwrap().is_none());
        assert!(store
            .update_item(id, ItemChanges::default())
            .await
            .unwrap()
            .is_none());
        assert!(!store.delete_item(id).await.unwrap());
        assert!(store
            .update_category(id, CategoryChanges::default())
            .await
            .unwrap()
            .is_none());
    }
}
