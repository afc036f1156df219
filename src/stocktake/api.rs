//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer: the single
//! entry point for all stocktake operations, regardless of the UI in use.
//!
//! It dispatches to command functions and returns structured
//! `Result<CmdResult>` values. No business logic, no I/O formatting, no
//! presentation concerns live here.
//!
//! ## Generic Over InventoryStore
//!
//! `StockApi<S: InventoryStore>` is generic over the storage backend:
//! - Production: `StockApi<FileStore>`
//! - Testing: `StockApi<InMemoryStore>`
//!
//! This enables testing the API layer without touching the filesystem.

use crate::commands;
use crate::error::Result;
use crate::store::InventoryStore;

/// The main API facade for stocktake operations.
pub struct StockApi<S: InventoryStore> {
    store: S,
}

impl<S: InventoryStore> StockApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_item(&mut self, item: &str, qty: i64) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, item, qty)
    }

    pub fn remove_item(&mut self, item: &str, qty: i64) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, item, qty)
    }

    pub fn quantity(&self, item: &str) -> Result<commands::CmdResult> {
        commands::quantity::run(&self.store, item)
    }

    pub fn low_stock(&self, threshold: i64) -> Result<commands::CmdResult> {
        commands::low_stock::run(&self.store, threshold)
    }

    pub fn report(&self) -> Result<commands::CmdResult> {
        commands::report::run(&self.store)
    }
}
