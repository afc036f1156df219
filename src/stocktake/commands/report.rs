use crate::commands::{load_inventory, CmdResult, StockLine};
use crate::error::Result;
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let inventory = load_inventory(store, &mut result)?;
    let entries = inventory
        .iter()
        .map(|(name, quantity)| StockLine {
            name: name.to_string(),
            quantity,
        })
        .collect();
    Ok(result.with_entries(entries))
}
