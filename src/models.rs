//! Frontend Models
//!
//! Data structures matching the backend API, plus the pure views the
//! lists and the stats bar derive from the collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Grocery item (matches backend)
///
/// `id` and `created_at` are assigned by the server and never invented
/// or changed on this side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub bought: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Aggregate counts for the stats bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub active: usize,
    pub bought: usize,
}

impl Stats {
    /// Count a collection snapshot. `total` is always `active + bought`.
    pub fn tally(items: &[Item]) -> Self {
        let bought = items.iter().filter(|item| item.bought).count();
        Stats {
            total: items.len(),
            active: items.len() - bought,
            bought,
        }
    }
}

/// Items still to buy, in collection order
pub fn to_buy(items: &[Item]) -> Vec<Item> {
    items.iter().filter(|item| !item.bought).cloned().collect()
}

/// Items already bought, in collection order
pub fn bought(items: &[Item]) -> Vec<Item> {
    items.iter().filter(|item| item.bought).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, name: &str, bought: bool) -> Item {
        Item {
            id: id.to_string(),
            name: name.to_string(),
            bought,
            created_at: "2023-08-15T14:30:00Z".parse().expect("valid timestamp"),
        }
    }

    fn sample_items() -> Vec<Item> {
        vec![
            make_item("1", "Milk", false),
            make_item("2", "Bread", true),
            make_item("3", "Eggs", false),
        ]
    }

    #[test]
    fn test_tally() {
        let stats = Stats::tally(&sample_items());
        assert_eq!(
            stats,
            Stats {
                total: 3,
                active: 2,
                bought: 1
            }
        );
    }

    #[test]
    fn test_tally_empty() {
        assert_eq!(Stats::tally(&[]), Stats::default());
    }

    #[test]
    fn test_views_partition_in_collection_order() {
        let items = sample_items();

        let active: Vec<_> = to_buy(&items).iter().map(|i| i.name.clone()).collect();
        assert_eq!(active, ["Milk", "Eggs"]);

        let done: Vec<_> = bought(&items).iter().map(|i| i.name.clone()).collect();
        assert_eq!(done, ["Bread"]);
    }

    #[test]
    fn test_total_is_active_plus_bought() {
        for items in [vec![], sample_items(), to_buy(&sample_items())] {
            let stats = Stats::tally(&items);
            assert_eq!(stats.total, stats.active + stats.bought);
        }
    }

    #[test]
    fn test_item_wire_format() {
        let item: Item = serde_json::from_str(
            r#"{"id":"1","name":"Milk","bought":false,"createdAt":"2023-08-15T14:30:00Z"}"#,
        )
        .expect("deserialize item");
        assert_eq!(item.name, "Milk");
        assert!(!item.bought);

        let value = serde_json::to_value(&item).expect("serialize item");
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
