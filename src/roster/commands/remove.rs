use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

/// Remove the first record whose id matches and rewrite the list.
///
/// A miss leaves the file untouched and reports a notice instead.
pub fn run<S: DataStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    let mut users = store.load_users()?;
    let mut result = CmdResult::default();

    match users.iter().position(|u| u.id == id) {
        Some(index) => {
            let removed = users.remove(index);
            store.save_users(&users)?;
            result = result.with_affected_users(vec![removed]);
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "Item with id {} not found",
                id
            )));
        }
    }

    Ok(result)
}
