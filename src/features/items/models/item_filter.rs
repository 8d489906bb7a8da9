use std::cmp::Ordering;

use serde::Deserialize;
use utoipa::ToSchema;

use super::{Item, ItemStatus};

/// Sort fields for item listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemSortBy {
    #[default]
    Priority,
    Title,
    Price,
    /// Creation time
    Date,
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Desc,
    Asc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Status filter plus ordering for `list` queries.
///
/// Both backends must agree: `compare` is the in-process ordering and
/// `order_by_sql` is its Postgres equivalent. A missing price counts as the
/// lowest value, and every ordering falls back to ascending id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub status: Option<ItemStatus>,
    pub sort_by: ItemSortBy,
    pub sort_order: SortDirection,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self.status {
            Some(status) => item.status == status,
            None => true,
        }
    }

    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        let primary = match self.sort_by {
            ItemSortBy::Priority => a.priority.cmp(&b.priority),
            ItemSortBy::Title => a.title.cmp(&b.title),
            // Option orders None before Some
            ItemSortBy::Price => a.price.cmp(&b.price),
            ItemSortBy::Date => a.created_at.cmp(&b.created_at),
        };

        self.sort_order
            .apply(primary)
            .then_with(|| a.id.cmp(&b.id))
    }

    pub fn order_by_sql(&self) -> String {
        let direction = self.sort_order.as_sql();
        let primary = match self.sort_by {
            ItemSortBy::Priority => format!("priority {}", direction),
            ItemSortBy::Title => format!("title COLLATE \"C\" {}", direction),
            ItemSortBy::Price => {
                let nulls = match self.sort_order {
                    SortDirection::Asc => "FIRST",
                    SortDirection::Desc => "LAST",
                };
                format!("price {} NULLS {}", direction, nulls)
            }
            ItemSortBy::Date => format!("created_at {}", direction),
        };

        format!("{}, id ASC", primary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::items::models::NewItem;
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    fn item(title: &str, priority: i32, price: Option<i64>, status: ItemStatus) -> Item {
        Item::new(
            NewItem {
                title: title.to_string(),
                link: None,
                price: price.map(Decimal::from),
                priority,
                status,
                category_id: None,
                notes: None,
            },
            Utc::now(),
        )
    }

    fn sorted(mut items: Vec<Item>, filter: ItemFilter) -> Vec<Item> {
        items.sort_by(|a, b| filter.compare(a, b));
        items
    }

    fn prices(items: &[Item]) -> Vec<Option<Decimal>> {
        items.iter().map(|i| i.price).collect()
    }

    #[test]
    fn test_default_is_priority_desc() {
        let filter = ItemFilter::default();
        assert_eq!(filter.sort_by, ItemSortBy::Priority);
        assert_eq!(filter.sort_order, SortDirection::Desc);

        let items = sorted(
            vec![
                item("a", 2, None, ItemStatus::Want),
                item("b", 5, None, ItemStatus::Want),
                item("c", 3, None, ItemStatus::Want),
            ],
            filter,
        );
        let priorities: Vec<i32> = items.iter().map(|i| i.priority).collect();
        assert_eq!(priorities, vec![5, 3, 2]);
    }

    #[test]
    fn test_price_desc_puts_missing_price_last() {
        let filter = ItemFilter {
            sort_by: ItemSortBy::Price,
            sort_order: SortDirection::Desc,
            ..Default::default()
        };
        let items = sorted(
            vec![
                item("ten", 3, Some(10), ItemStatus::Want),
                item("none", 3, None, ItemStatus::Want),
                item("five", 3, Some(5), ItemStatus::Want),
            ],
            filter,
        );
        assert_eq!(
            prices(&items),
            vec![Some(Decimal::from(10)), Some(Decimal::from(5)), None]
        );
    }

    #[test]
    fn test_price_asc_puts_missing_price_first() {
        let filter = ItemFilter {
            sort_by: ItemSortBy::Price,
            sort_order: SortDirection::Asc,
            ..Default::default()
        };
        let items = sorted(
            vec![
                item("ten", 3, Some(10), ItemStatus::Want),
                item("none", 3, None, ItemStatus::Want),
                item("five", 3, Some(5), ItemStatus::Want),
            ],
            filter,
        );
        assert_eq!(
            prices(&items),
            vec![None, Some(Decimal::from(5)), Some(Decimal::from(10))]
        );
    }

    #[test]
    fn test_ties_break_by_ascending_id() {
        let first = item("first", 3, Some(7), ItemStatus::Want);
        let second = item("second", 3, Some(7), ItemStatus::Want);
        assert!(first.id < second.id);

        for sort_order in [SortDirection::Asc, SortDirection::Desc] {
            let filter = ItemFilter {
                sort_by: ItemSortBy::Price,
                sort_order,
                ..Default::default()
            };
            let items = sorted(vec![second.clone(), first.clone()], filter);
            assert_eq!(items[0].id, first.id);
            assert_eq!(items[1].id, second.id);
        }
    }

    #[test]
    fn test_title_and_date_ordering() {
        let mut old = item("Zebra plush", 1, None, ItemStatus::Want);
        old.created_at = Utc::now() - Duration::days(2);
        let new = item("Apple pie dish", 1, None, ItemStatus::Want);

        let by_title = sorted(
            vec![new.clone(), old.clone()],
            ItemFilter {
                sort_by: ItemSortBy::Title,
                sort_order: SortDirection::Asc,
                ..Default::default()
            },
        );
        assert_eq!(by_title[0].title, "Apple pie dish");

        let by_date = sorted(
            vec![old.clone(), new.clone()],
            ItemFilter {
                sort_by: ItemSortBy::Date,
                sort_order: SortDirection::Desc,
                ..Default::default()
            },
        );
        assert_eq!(by_date[0].id, new.id);
    }

    #[test]
    fn test_status_filter() {
        let filter = ItemFilter {
            status: Some(ItemStatus::Bought),
            ..Default::default()
        };
        assert!(filter.matches(&item("a", 1, None, ItemStatus::Bought)));
        assert!(!filter.matches(&item("b", 1, None, ItemStatus::Want)));
        assert!(ItemFilter::default().matches(&item("c", 1, None, ItemStatus::Archived)));
    }

    #[test]
    fn test_order_by_sql() {
        let price_desc = ItemFilter {
            sort_by: ItemSortBy::Price,
            sort_order: SortDirection::Desc,
            ..Default::default()
        };
        assert_eq!(price_desc.order_by_sql(), "price DESC NULLS LAST, id ASC");

        let price_asc = ItemFilter {
            sort_by: ItemSortBy::Price,
            sort_order: SortDirection::Asc,
            ..Default::default()
        };
        assert_eq!(price_asc.order_by_sql(), "price ASC NULLS FIRST, id ASC");

        assert_eq!(
            ItemFilter::default().order_by_sql(),
            "priority DESC, id ASC"
        );
    }
}
