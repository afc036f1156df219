use crate::commands::{load_inventory, save_inventory, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RemoveOutcome;
use crate::store::InventoryStore;

pub fn run<S: InventoryStore>(store: &mut S, item: &str, qty: i64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut inventory = load_inventory(store, &mut result)?;

    match inventory.remove(item, qty) {
        RemoveOutcome::Missing => {
            // Non-fatal: warn and leave the stored inventory untouched.
            result.add_message(CmdMessage::warning(format!(
                "Tried to remove '{}' which does not exist in stock.",
                item
            )));
        }
        RemoveOutcome::Adjusted(remaining) => {
            save_inventory(store, &inventory, &mut result);
            result.add_message(CmdMessage::success(format!(
                "Removed {} of {} ({} left)",
                qty, item, remaining
            )));
        }
        RemoveOutcome::Depleted => {
            save_inventory(store, &inventory, &mut result);
            result.add_message(CmdMessage::success(format!("Removed {} of {}", qty, item)));
            result.add_message(CmdMessage::info(format!(
                "{} is depleted and was removed from stock.",
                item
            )));
        }
    }

    Ok(result)
}
