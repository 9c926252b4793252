use thiserror::Error;

/// Failure to read a task given as `name=priority`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTaskError {
    #[error("missing '=' in task spec {0:?}")]
    MissingSeparator(String),

    #[error("empty task name in {0:?}")]
    EmptyName(String),

    #[error("invalid priority {value:?} for task {name:?}")]
    InvalidPriority { name: String, value: String },
}
