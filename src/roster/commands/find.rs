use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Look up a record by id: the first match in list order wins.
///
/// A miss is not an error; the result simply carries no output.
pub fn run<S: DataStore>(store: &S, id: &str) -> Result<CmdResult> {
    let users = store.load_users()?;
    let mut result = CmdResult::default();

    if let Some(user) = users.iter().find(|u| u.id == id) {
        result = result
            .with_output(serde_json::to_vec(user)?)
            .with_affected_users(vec![user.clone()]);
    }

    Ok(result)
}
