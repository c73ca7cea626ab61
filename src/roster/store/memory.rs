use super::DataStore;
use crate::error::Result;

/// In-memory storage for testing. A byte buffer stands in for the file, so
/// the shared decode/encode cycle behaves exactly as it does with
/// [`super::fs::FileStore`]. Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    data: Vec<u8>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn read_raw(&self) -> Result<Vec<u8>> {
        Ok(self.data.clone())
    }

    fn write_raw(&mut self, data: &[u8]) -> Result<()> {
        self.data = data.to_vec();
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::User;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_users(mut self, count: usize) -> Self {
            let mut users = self.store.load_users().unwrap();
            for i in 0..count {
                users.push(User::new(
                    format!("{}", i + 1),
                    format!("user{}@example.com", i + 1),
                    20 + i as i64,
                ));
            }
            self.store.save_users(&users).unwrap();
            self
        }

        pub fn with_user(mut self, id: &str, email: &str, age: i64) -> Self {
            let mut users = self.store.load_users().unwrap();
            users.push(User::new(id, email, age));
            self.store.save_users(&users).unwrap();
            self
        }
    }
}
