use crate::commands::{load_inventory, CmdResult};
use crate::error::Result;
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(store: &S, threshold: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let inventory = load_inventory(store, &mut result)?;
    let low = inventory.low_stock(threshold);
    Ok(result.with_low_items(low))
}
