use crate::model::User;

pub mod add;
pub mod find;
pub mod list;
pub mod remove;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What one operation produced.
///
/// `output` is the machine-readable payload destined for the output sink,
/// emitted verbatim. `messages` are human-readable notices; an operation that
/// emits one still counts as a success. `affected_users` are the records the
/// operation touched, for API consumers.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub output: Option<Vec<u8>>,
    pub affected_users: Vec<User>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: Vec<u8>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_affected_users(mut self, users: Vec<User>) -> Self {
        self.affected_users = users;
        self
    }
}
