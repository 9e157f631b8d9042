use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnackError {
    #[error("ticket '{0}' not found")]
    TicketNotFound(String),

    #[error("invalid ticket id '{0}'")]
    InvalidId(String),

    #[error("invalid ticket: {0}")]
    InvalidTicket(String),

    #[error("you must be signed in to access the queue")]
    NotSignedIn,

    #[error("invalid email address '{0}'")]
    InvalidEmail(String),

    // Store errors
    #[error("store error: {0}")]
    Store(String),

    #[error("subscription error: {0}")]
    Subscription(String),

    #[error("watcher error: {0}")]
    WatcherError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, SnackError>;
