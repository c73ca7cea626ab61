use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::User;
use crate::store::DataStore;

/// Decode `item` as a single record and append it to the stored list.
///
/// A colliding id produces a notice per existing match but never rejects the
/// record; the list ends up holding duplicate ids.
pub fn run<S: DataStore>(store: &mut S, item: &str) -> Result<CmdResult> {
    let new_user: User = serde_json::from_str(item)?;
    let mut users = store.load_users()?;
    let mut result = CmdResult::default();

    for user in &users {
        if user.id == new_user.id {
            result.add_message(CmdMessage::warning(format!(
                "Item with id {} already exists",
                new_user.id
            )));
        }
    }

    users.push(new_user.clone());
    store.save_users(&users)?;

    Ok(result.with_affected_users(vec![new_user]))
}
