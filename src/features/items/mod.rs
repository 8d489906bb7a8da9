//! Wishlist items.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/items?status=&sortBy=&sortOrder=` | List items |
//! | GET | `/api/items/{id}` | Get an item |
//! | POST | `/api/items` | Create an item |
//! | PUT | `/api/items/{id}` | Partially update an item |
//! | DELETE | `/api/items/{id}` | Delete an item |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ItemService;
