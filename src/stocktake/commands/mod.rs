use crate::error::Result;
use crate::model::Inventory;
use crate::store::{InventoryStore, LoadSource};

pub mod add;
pub mod low_stock;
pub mod quantity;
pub mod remove;
pub mod report;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One row of a stock report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockLine {
    pub name: String,
    pub quantity: i64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Set by the quantity query.
    pub quantity: Option<i64>,
    /// Set by the low-stock query, in inventory order.
    pub low_items: Vec<String>,
    /// Set by the report query, in inventory order.
    pub entries: Vec<StockLine>,
    /// Timestamped audit lines produced by mutating commands.
    pub log_lines: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn add_log_line(&mut self, line: impl Into<String>) {
        self.log_lines.push(line.into());
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_low_items(mut self, items: Vec<String>) -> Self {
        self.low_items = items;
        self
    }

    pub fn with_entries(mut self, entries: Vec<StockLine>) -> Self {
        self.entries = entries;
        self
    }
}

/// Load the inventory, translating recovered load states into messages.
///
/// A missing or corrupt file is normal operation (the store hands back an
/// empty inventory); the messages let the UI say so without the store or
/// this layer printing anything.
pub(crate) fn load_inventory<S: InventoryStore>(
    store: &S,
    result: &mut CmdResult,
) -> Result<Inventory> {
    let loaded = store.load()?;
    match loaded.source {
        LoadSource::File => {}
        LoadSource::Missing => result.add_message(CmdMessage::info(
            "Inventory file not found, starting with empty stock.",
        )),
        LoadSource::Corrupt => result.add_message(CmdMessage::warning(
            "Inventory file is corrupted, starting fresh.",
        )),
    }
    Ok(loaded.inventory)
}

/// Save the inventory, downgrading failure to a warning message.
///
/// Per the store's contract a failed save must not abort the process; the
/// in-memory state stays valid and the caller is told what was lost.
pub(crate) fn save_inventory<S: InventoryStore>(
    store: &mut S,
    inventory: &Inventory,
    result: &mut CmdResult,
) {
    if let Err(err) = store.save(inventory) {
        result.add_message(CmdMessage::error(format!("Error saving file: {}", err)));
    }
}
