use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Item not found: {0}")]
    ItemNotFound(Uuid),

    #[error("No item with reference: {0}")]
    UnknownReference(String),

    #[error("Page {0} does not exist")]
    PageOutOfRange(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
