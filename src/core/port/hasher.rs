use thiserror::Error;

#[cfg_attr(test, mockall::automock)]
pub trait Hasher: Send + Sync {
    fn hash(&self, value: &str) -> Result<String, HasherError>;
}

#[derive(Debug, Error)]
pub enum HasherError {
    #[error("Failed to hash value: {0}")]
    HashError(String),
}
