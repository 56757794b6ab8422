use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
