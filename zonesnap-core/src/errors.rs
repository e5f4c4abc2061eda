use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZonesnapError>;

#[derive(Debug, Error)]
pub enum ZonesnapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    SerdeParse(#[from] serde_json::Error),
}
