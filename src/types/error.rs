use thiserror::Error;

use crate::types::PageIndex;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Error: Table full.")]
    TableFull,

    #[error("Page index {index} out of bounds (max: {max})")]
    PageOutOfBounds { index: PageIndex, max: PageIndex },

    #[error("Serialization/deserialization error: {details}")]
    Serialization { details: String },
}

pub type Result<T> = std::result::Result<T, DatabaseError>;
