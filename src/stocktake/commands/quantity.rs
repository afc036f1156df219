use crate::commands::{load_inventory, CmdResult};
use crate::error::Result;
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(store: &S, item: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let inventory = load_inventory(store, &mut result)?;
    let qty = inventory.quantity(item);
    Ok(result.with_quantity(qty))
}
