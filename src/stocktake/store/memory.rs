use super::{InventoryStore, LoadSource, LoadedInventory};
use crate::error::Result;
use crate::model::Inventory;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<Inventory>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InventoryStore for InMemoryStore {
    fn load(&self) -> Result<LoadedInventory> {
        match &self.saved {
            Some(inventory) => Ok(LoadedInventory {
                inventory: inventory.clone(),
                source: LoadSource::File,
            }),
            None => Ok(LoadedInventory {
                inventory: Inventory::new(),
                source: LoadSource::Missing,
            }),
        }
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        self.saved = Some(inventory.clone());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_item(mut self, name: &str, qty: i64) -> Self {
            let mut loaded = self.store.load().unwrap();
            loaded.inventory.add(name, qty);
            self.store.save(&loaded.inventory).unwrap();
            self
        }
    }
}
