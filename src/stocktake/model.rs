use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Items with a quantity strictly below this count as low stock.
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Outcome of removing stock from the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Quantity reduced; this many units remain.
    Adjusted(i64),
    /// Quantity dropped to zero or below; the item was deleted.
    Depleted,
    /// The item was not in the inventory; nothing changed.
    Missing,
}

/// The item → quantity table.
///
/// Serializes transparently, so the on-disk form is a bare JSON object of
/// item-name strings to integer quantities. Iteration order is insertion
/// order, which is what the report and low-stock listings use.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inventory {
    items: IndexMap<String, i64>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `qty` units of `item`, creating the entry at base 0 if absent.
    ///
    /// An empty item name is a no-op and returns `false`. The add path never
    /// deletes an entry, so a quantity pushed to zero or below through
    /// addition stays in the table (only `remove` culls depleted items).
    pub fn add(&mut self, item: &str, qty: i64) -> bool {
        if item.is_empty() {
            return false;
        }
        let entry = self.items.entry(item.to_string()).or_insert(0);
        *entry = entry.saturating_add(qty);
        true
    }

    /// Subtract `qty` units of `item`.
    ///
    /// A missing item leaves the table unchanged. A quantity that reaches
    /// zero or below deletes the entry entirely.
    pub fn remove(&mut self, item: &str, qty: i64) -> RemoveOutcome {
        let Some(current) = self.items.get_mut(item) else {
            return RemoveOutcome::Missing;
        };
        *current = current.saturating_sub(qty);
        let remaining = *current;
        if remaining <= 0 {
            // shift_remove keeps the remaining entries in insertion order
            self.items.shift_remove(item);
            RemoveOutcome::Depleted
        } else {
            RemoveOutcome::Adjusted(remaining)
        }
    }

    /// Stocked quantity of `item`, or 0 if absent. Never fails.
    pub fn quantity(&self, item: &str) -> i64 {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Names of items stocked strictly below `threshold`, in table order.
    pub fn low_stock(&self, threshold: i64) -> Vec<String> {
        self.items
            .iter()
            .filter(|(_, &qty)| qty < threshold)
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.items.iter().map(|(name, &qty)| (name.as_str(), qty))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adds_accumulate_per_item() {
        let mut inv = Inventory::new();
        inv.add("apple", 3);
        inv.add("apple", 4);
        inv.add("banana", 2);
        assert_eq!(inv.quantity("apple"), 7);
        assert_eq!(inv.quantity("banana"), 2);
    }

    #[test]
    fn add_empty_name_is_noop() {
        let mut inv = Inventory::new();
        assert!(!inv.add("", 5));
        assert!(inv.is_empty());
    }

    #[test]
    fn add_can_leave_zero_or_negative_quantity() {
        // Only the remove path culls depleted entries.
        let mut inv = Inventory::new();
        inv.add("apple", 3);
        inv.add("apple", -3);
        assert_eq!(inv.quantity("apple"), 0);
        assert_eq!(inv.len(), 1);

        inv.add("apple", -2);
        assert_eq!(inv.quantity("apple"), -2);
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn extreme_quantities_saturate_instead_of_overflowing() {
        let mut inv = Inventory::new();
        inv.add("apple", i64::MAX);
        inv.add("apple", i64::MAX);
        assert_eq!(inv.quantity("apple"), i64::MAX);

        assert_eq!(inv.remove("apple", i64::MIN), RemoveOutcome::Adjusted(i64::MAX));
    }

    #[test]
    fn remove_missing_item_changes_nothing() {
        let mut inv = Inventory::new();
        inv.add("apple", 3);
        assert_eq!(inv.remove("pear", 1), RemoveOutcome::Missing);
        assert_eq!(inv.quantity("apple"), 3);
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn remove_to_zero_or_below_deletes_the_item() {
        let mut inv = Inventory::new();
        inv.add("apple", 3);
        assert_eq!(inv.remove("apple", 5), RemoveOutcome::Depleted);
        assert_eq!(inv.quantity("apple"), 0);
        assert!(inv.is_empty());

        inv.add("banana", 2);
        assert_eq!(inv.remove("banana", 2), RemoveOutcome::Depleted);
        assert!(inv.is_empty());
    }

    #[test]
    fn remove_reports_remaining_quantity() {
        let mut inv = Inventory::new();
        inv.add("apple", 10);
        assert_eq!(inv.remove("apple", 3), RemoveOutcome::Adjusted(7));
        assert_eq!(inv.quantity("apple"), 7);
    }

    #[test]
    fn quantity_of_absent_item_is_zero() {
        let inv = Inventory::new();
        assert_eq!(inv.quantity("ghost"), 0);
    }

    #[test]
    fn low_stock_is_strictly_below_threshold() {
        let mut inv = Inventory::new();
        inv.add("apple", 7);
        inv.add("banana", 2);
        inv.add("cherry", 5);
        assert_eq!(inv.low_stock(5), vec!["banana".to_string()]);
    }

    #[test]
    fn low_stock_preserves_insertion_order() {
        let mut inv = Inventory::new();
        inv.add("banana", 1);
        inv.add("apple", 2);
        inv.add("cherry", 3);
        assert_eq!(
            inv.low_stock(10),
            vec!["banana".to_string(), "apple".to_string(), "cherry".to_string()]
        );
    }

    #[test]
    fn apple_banana_scenario() {
        let mut inv = Inventory::new();
        inv.add("apple", 10);
        inv.add("banana", 2);
        inv.remove("apple", 3);

        assert_eq!(inv.quantity("apple"), 7);
        assert_eq!(inv.quantity("banana"), 2);
        assert_eq!(
            inv.low_stock(DEFAULT_LOW_STOCK_THRESHOLD),
            vec!["banana".to_string()]
        );
    }
}
