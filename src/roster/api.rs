//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for all
//! roster operations, regardless of the client driving them.
//!
//! The facade only dispatches: business logic lives in `commands/*.rs`,
//! persistence behind [`DataStore`]. Nothing here writes to stdout or stderr.
//!
//! `RosterApi<S: DataStore>` is generic over the storage backend:
//! `RosterApi<FileStore>` in production, `RosterApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::Result;
use crate::request::Operation;
use crate::store::DataStore;

pub struct RosterApi<S: DataStore> {
    store: S,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add_user(&mut self, item: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, item)
    }

    pub fn list_users(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn find_by_id(&self, id: &str) -> Result<commands::CmdResult> {
        commands::find::run(&self.store, id)
    }

    pub fn remove_user(&mut self, id: &str) -> Result<commands::CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    /// Dispatch a resolved [`Operation`] to the matching command.
    pub fn perform(&mut self, operation: &Operation) -> Result<commands::CmdResult> {
        match operation {
            Operation::Add { item } => self.add_user(item),
            Operation::List => self.list_users(),
            Operation::FindById { id } => self.find_by_id(id),
            Operation::Remove { id } => self.remove_user(id),
        }
    }
}
