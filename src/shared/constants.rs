/// Lowest accepted item priority
pub const MIN_PRIORITY: i32 = 1;

/// Highest accepted item priority
pub const MAX_PRIORITY: i32 = 5;

/// Maximum category name length (characters)
pub const MAX_CATEGORY_NAME_LEN: u64 = 100;

/// Maximum item title length (characters)
pub const MAX_ITEM_TITLE_LEN: u64 = 200;

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

pub const ITEM_NOT_FOUND: &str = "Item not found";

pub const CATEGORY_NOT_FOUND: &str = "Category not found";

pub const CATEGORY_NAME_TAKEN: &str = "Category with this name already exists";
