//! vle-store: dataset file output, read-back and content digests.

pub mod hash;
pub mod store;

pub use hash::digest;
pub use store::{load_dataset, to_json, write_dataset};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Data(#[from] vle_data::DataError),

    #[error("Dataset file not found: {path}")]
    NotFound { path: String },

    #[error("Invalid output path: {message}")]
    InvalidPath { message: String },
}
