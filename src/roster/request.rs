//! # Request Resolution
//!
//! Turns the four raw flag values collected by the CLI into a typed
//! [`Request`] before any file I/O happens. Which flags are required depends
//! on the operation, so the check lives here rather than in the clap
//! definitions: every flag is optional at the parser level and conditionally
//! required at resolution time.

use crate::error::{Result, RosterError};
use std::path::PathBuf;

/// Raw flag values exactly as the CLI collected them, empty string when a
/// flag was not given.
#[derive(Debug, Default, Clone)]
pub struct RawArgs {
    pub file_name: String,
    pub operation: String,
    pub id: String,
    pub item: String,
}

/// The operation to run, carrying only the inputs that operation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    Add { item: String },
    List,
    FindById { id: String },
    Remove { id: String },
}

/// A validated invocation: the store file plus one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub file_name: PathBuf,
    pub operation: Operation,
}

impl Request {
    /// Validate the raw flags and build a `Request`.
    ///
    /// `fileName` and `operation` are always required; `item` only for `add`,
    /// `id` only for `findById` and `remove`.
    pub fn resolve(args: RawArgs) -> Result<Self> {
        if args.file_name.is_empty() {
            return Err(RosterError::MissingArgument("fileName"));
        }

        let operation = match args.operation.as_str() {
            "" => return Err(RosterError::MissingArgument("operation")),
            "add" => {
                if args.item.is_empty() {
                    return Err(RosterError::MissingArgument("item"));
                }
                Operation::Add { item: args.item }
            }
            "list" => Operation::List,
            "findById" => {
                if args.id.is_empty() {
                    return Err(RosterError::MissingArgument("id"));
                }
                Operation::FindById { id: args.id }
            }
            "remove" => {
                if args.id.is_empty() {
                    return Err(RosterError::MissingArgument("id"));
                }
                Operation::Remove { id: args.id }
            }
            other => return Err(RosterError::UnsupportedOperation(other.to_string())),
        };

        Ok(Request {
            file_name: PathBuf::from(args.file_name),
            operation,
        })
    }
}
