use crate::commands::{load_inventory, save_inventory, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::InventoryStore;
use chrono::Utc;

pub fn run<S: InventoryStore>(store: &mut S, item: &str, qty: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    // Empty item names are silently ignored: nothing changes, nothing is
    // logged, nothing is saved.
    if item.is_empty() {
        return Ok(result);
    }

    let mut inventory = load_inventory(store, &mut result)?;
    inventory.add(item, qty);
    result.add_log_line(format!("{}: Added {} of {}", Utc::now(), qty, item));
    save_inventory(store, &inventory, &mut result);

    result.add_message(CmdMessage::success(format!(
        "Added {} of {} ({} in stock)",
        qty,
        item,
        inventory.quantity(item)
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::InMemoryStore;
    use crate::store::InventoryStore;

    #[test]
    fn adds_and_persists() {
        let mut store = InMemoryStore::new();
        run(&mut store, "apple", 10).unwrap();
        run(&mut store, "apple", 5).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.inventory.quantity("apple"), 15);
    }

    #[test]
    fn produces_timestamped_log_line() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "apple", 10).unwrap();

        assert_eq!(result.log_lines.len(), 1);
        assert!(result.log_lines[0].ends_with(": Added 10 of apple"));
    }

    #[test]
    fn empty_item_name_is_a_silent_noop() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "", 5).unwrap();

        assert!(result.log_lines.is_empty());
        assert!(result.messages.is_empty());
        assert!(store.load().unwrap().inventory.is_empty());
    }

    #[test]
    fn failed_save_is_reported_but_not_fatal() {
        use crate::error::{Result, StockError};
        use crate::model::Inventory;
        use crate::store::{LoadSource, LoadedInventory};
        use std::io::ErrorKind;

        struct ReadOnlyStore;

        impl InventoryStore for ReadOnlyStore {
            fn load(&self) -> Result<LoadedInventory> {
                Ok(LoadedInventory {
                    inventory: Inventory::new(),
                    source: LoadSource::File,
                })
            }

            fn save(&mut self, _inventory: &Inventory) -> Result<()> {
                Err(StockError::Io(ErrorKind::PermissionDenied.into()))
            }
        }

        let mut store = ReadOnlyStore;
        let result = run(&mut store, "apple", 10).unwrap();

        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Error)
                && m.content.contains("Error saving file")));
    }

    #[test]
    fn first_add_reports_missing_file_as_info() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, "apple", 1).unwrap();

        assert!(result
            .messages
            .iter()
            .any(|m| matches!(m.level, MessageLevel::Info)
                && m.content.contains("Inventory file not found")));
    }
}
