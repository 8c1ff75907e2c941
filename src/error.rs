use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotterError {
    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Unknown category: {0}. Run 'jotter categories' to see the list.")]
    UnknownCategory(String),

    #[error("Unknown client: {0}. Run 'jotter clients' to see the list.")]
    UnknownClient(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, JotterError>;
