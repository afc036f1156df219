//! # Storage Layer
//!
//! This module defines the storage abstraction for stocktake. The
//! [`InventoryStore`] trait allows the application to work with different
//! storage backends.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - The whole inventory lives in one JSON file (default `inventory.json`)
//!   - Pretty-printed with 4-space indentation
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Recovery Semantics
//!
//! Loading never fails just because the file is absent or unreadable as JSON:
//! both cases yield an empty inventory, tagged with a [`LoadSource`] so the
//! command layer can tell the user what happened. Only unexpected I/O (e.g.
//! permission errors on read) comes back as an `Err`.

use crate::error::Result;
use crate::model::Inventory;

pub mod fs;
pub mod memory;

/// Where a loaded inventory came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the persisted file.
    File,
    /// The file does not exist; the inventory starts empty.
    Missing,
    /// The file exists but is not valid JSON; the inventory starts empty.
    Corrupt,
}

/// An inventory together with the provenance of the load.
#[derive(Debug, Clone)]
pub struct LoadedInventory {
    pub inventory: Inventory,
    pub source: LoadSource,
}

/// Abstract interface for inventory persistence.
///
/// The inventory is loaded and saved wholesale: there are no per-item
/// persistence operations and no partial updates.
pub trait InventoryStore {
    /// Load the full inventory, recovering to empty on missing/corrupt data.
    fn load(&self) -> Result<LoadedInventory>;

    /// Overwrite the persisted inventory with `inventory`.
    fn save(&mut self, inventory: &Inventory) -> Result<()>;
}
