use crate::commands::CmdResult;
use crate::error::Result;
use crate::model::User;
use crate::store::DataStore;

/// Emit the stored list exactly as persisted.
///
/// The raw bytes pass through untouched so the output matches the file
/// byte-for-byte. Decoding still happens to validate the contents and to
/// suppress output for an empty list.
pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let raw = store.read_raw()?;
    if raw.is_empty() {
        return Ok(CmdResult::default());
    }

    let users: Vec<User> = serde_json::from_slice(&raw)?;
    let mut result = CmdResult::default();
    if !users.is_empty() {
        result = result.with_output(raw);
    }

    Ok(result)
}
