use async_trait::async_trait;
use thiserror::Error;

/// Decides whether a string is a syntactically valid email address.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EmailValidator: Send + Sync {
    async fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError>;
}

#[derive(Debug, Error)]
pub enum EmailValidatorError {
    #[error("Email validator unavailable: {0}")]
    Unavailable(String),
}
