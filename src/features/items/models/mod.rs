mod item;
mod item_filter;

pub use item::{Item, ItemChanges, ItemStatus, NewItem};
pub use item_filter::{ItemFilter, ItemSortBy, SortDirection};
