use async_trait::async_trait;
use thiserror::Error;

use crate::core::domain::entity::account::{AccountModel, AddAccountModel};
use crate::core::port::add_account_repository::AddAccountRepositoryError;
use crate::core::port::hasher::HasherError;

/// Creates an account from validated sign-up input.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, AddAccountError>;
}

#[derive(Debug, Error)]
pub enum AddAccountError {
    #[error(transparent)]
    HasherError(#[from] HasherError),

    #[error(transparent)]
    RepositoryError(#[from] AddAccountRepositoryError),
}
