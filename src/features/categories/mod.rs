//! Categories group wishlist items by name.
//!
//! Names are unique under case-insensitive comparison. Deleting a category
//! never deletes items: every item pointing at it becomes uncategorized.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/api/categories` | List categories sorted by name |
//! | GET | `/api/categories/{id}` | Get a category |
//! | POST | `/api/categories` | Create a category |
//! | PUT | `/api/categories/{id}` | Partially update a category |
//! | DELETE | `/api/categories/{id}` | Delete a category and uncategorize its items |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::CategoryService;
