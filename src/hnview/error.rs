use thiserror::Error;

#[derive(Error, Debug)]
pub enum HnError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Could not build HTTP client: {0}")]
    HttpClient(#[source] crate::fetch::FetchError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Nothing to search: the query is empty")]
    EmptyQuery,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("No story at position {0}")]
    InvalidIndex(String),
}

pub type Result<T> = std::result::Result<T, HnError>;
