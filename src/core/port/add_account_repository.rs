use async_trait::async_trait;
use thiserror::Error;

use crate::core::domain::entity::account::{AccountModel, AddAccountModel};

/// Stores a new account and returns it with its assigned id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    async fn add(&self, account: AddAccountModel)
        -> Result<AccountModel, AddAccountRepositoryError>;
}

#[derive(Debug, Error)]
pub enum AddAccountRepositoryError {
    #[error("Entity already exists: {entity_type} - {details}")]
    AlreadyExists {
        entity_type: String,
        details: String,
    },

    #[error("Store error: {0}")]
    StoreError(String),
}

impl AddAccountRepositoryError {
    pub fn account_already_exists(email: &str) -> Self {
        AddAccountRepositoryError::AlreadyExists {
            entity_type: "Account".to_string(),
            details: format!("email: {}", email),
        }
    }
}
