use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("-{0} flag has to be specified")]
    MissingArgument(&'static str),

    #[error("Operation {0} not allowed!")]
    UnsupportedOperation(String),

    #[error("Malformed user data: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RosterError>;
