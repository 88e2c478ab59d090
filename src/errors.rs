use inquire::InquireError;
use thiserror::Error;

/// Main error type for the Kommit application
#[derive(Error, Debug)]
pub enum KommitError {
    #[error("Prompt failed: {0}")]
    Prompt(String),

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while handing the commit message to git or the clipboard
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Failed to execute git commit: {0}")]
    Spawn(std::io::Error),

    #[error("Command execution failed: {command} ({status})")]
    CommandFailed { command: String, status: String },

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

impl From<InquireError> for KommitError {
    fn from(error: InquireError) -> Self {
        match error {
            InquireError::OperationCanceled | InquireError::OperationInterrupted => {
                KommitError::UserCancelled
            }
            other => KommitError::Prompt(other.to_string()),
        }
    }
}

impl From<arboard::Error> for DispatchError {
    fn from(error: arboard::Error) -> Self {
        DispatchError::Clipboard(error.to_string())
    }
}

/// Type alias for Result using `KommitError`
pub type Result<T> = std::result::Result<T, KommitError>;
