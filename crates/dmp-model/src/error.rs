use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown standard field id: {0}")]
    UnknownFieldId(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
