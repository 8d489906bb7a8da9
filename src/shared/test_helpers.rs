use std::sync::Arc;

use axum::Router;
use axum_test::TestServer;
use fake::faker::lorem::en::Sentence;
use fake::Fake;

use crate::features::categories::dtos::CreateCategoryDto;
use crate::features::categories::{routes as categories_routes, CategoryService};
use crate::features::health;
use crate::features::items::dtos::CreateItemDto;
use crate::features::items::models::ItemStatus;
use crate::features::items::{routes as items_routes, ItemService};
use crate::modules::store::{MemoryStore, WishlistStore};

pub fn memory_store() -> Arc<dyn WishlistStore> {
    Arc::new(MemoryStore::new())
}

pub fn category_dto(name: &str) -> CreateCategoryDto {
    CreateCategoryDto {
        name: name.to_string(),
        description: None,
    }
}

/// Valid item input: priority 3, status `want`, generated notes
pub fn item_dto(title: &str) -> CreateItemDto {
    CreateItemDto {
        title: title.to_string(),
        link: None,
        price: None,
        priority: 3,
        status: ItemStatus::Want,
        category_id: None,
        notes: Some(Sentence(3..8).fake()),
    }
}

/// All API routes over one fresh in-memory store
pub fn test_app() -> Router {
    let store = memory_store();
    Router::new()
        .merge(items_routes::routes(Arc::new(ItemService::new(store.clone()))))
        .merge(categories_routes::routes(Arc::new(CategoryService::new(
            store,
        ))))
        .merge(health::routes())
}

pub fn test_server() -> TestServer {
    TestServer::new(test_app()).expect("failed to start test server")
}
