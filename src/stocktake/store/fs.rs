use super::{InventoryStore, LoadSource, LoadedInventory};
use crate::error::{Result, StockError};
use crate::model::Inventory;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Default inventory file name, relative to the working directory.
pub const DEFAULT_INVENTORY_FILE: &str = "inventory.json";

/// File-backed inventory storage: one pretty-printed JSON object per file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockError::Io)?;
            }
        }
        Ok(())
    }
}

impl InventoryStore for FileStore {
    fn load(&self) -> Result<LoadedInventory> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Ok(LoadedInventory {
                    inventory: Inventory::new(),
                    source: LoadSource::Missing,
                });
            }
            Err(err) => return Err(StockError::Io(err)),
        };

        // A file that doesn't parse is treated as corrupt, not fatal: the
        // caller gets an empty inventory and decides how loudly to complain.
        match serde_json::from_str::<Inventory>(&content) {
            Ok(inventory) => Ok(LoadedInventory {
                inventory,
                source: LoadSource::File,
            }),
            Err(_) => Ok(LoadedInventory {
                inventory: Inventory::new(),
                source: LoadSource::Corrupt,
            }),
        }
    }

    fn save(&mut self, inventory: &Inventory) -> Result<()> {
        self.ensure_parent_dir()?;

        // serde_json's default pretty printer indents with 2 spaces; the
        // inventory file format uses 4.
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        inventory
            .serialize(&mut ser)
            .map_err(StockError::Serialization)?;

        fs::write(&self.path, buf).map_err(StockError::Io)?;
        Ok(())
    }
}
