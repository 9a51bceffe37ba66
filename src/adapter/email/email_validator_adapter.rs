use async_trait::async_trait;
use validator::ValidateEmail;

use crate::core::port::email_validator::{EmailValidator, EmailValidatorError};

/// HTML5-style email syntax check backed by the `validator` crate.
pub struct EmailValidatorAdapter;

#[async_trait]
impl EmailValidator for EmailValidatorAdapter {
    async fn is_valid(&self, email: &str) -> Result<bool, EmailValidatorError> {
        Ok(email.validate_email())
    }
}
