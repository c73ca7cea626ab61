use serde::{Deserialize, Serialize};

/// One entry in the stored list.
///
/// All three fields are caller-supplied and persisted as-is. `id` is the
/// lookup key for `findById` and `remove` but its content is never validated,
/// and uniqueness is not enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub age: i64,
}

impl User {
    pub fn new(id: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            age,
        }
    }
}
