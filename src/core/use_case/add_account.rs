use async_trait::async_trait;
use std::sync::Arc;

use crate::core::domain::entity::account::{AccountModel, AddAccountModel};
use crate::core::port::add_account::{AddAccount, AddAccountError};
use crate::core::port::add_account_repository::AddAccountRepository;
use crate::core::port::hasher::Hasher;

/// Hashes the password and stores the account.
pub struct AddAccountUseCase {
    hasher: Arc<dyn Hasher>,
    repository: Arc<dyn AddAccountRepository>,
}

impl AddAccountUseCase {
    pub fn new(hasher: Arc<dyn Hasher>, repository: Arc<dyn AddAccountRepository>) -> Self {
        Self { hasher, repository }
    }
}

#[async_trait]
impl AddAccount for AddAccountUseCase {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel, AddAccountError> {
        let password = self
            .hasher
            .hash(&account.password)
            .inspect_err(|e| tracing::error!(error = %e, "failed to hash password"))?;

        let account = self
            .repository
            .add(AddAccountModel {
                password,
                ..account
            })
            .await
            .inspect_err(|e| tracing::error!(error = %e, "failed to store account"))?;

        tracing::info!(account_id = %account.id, "account created");
        Ok(account)
    }
}
