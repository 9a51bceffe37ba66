use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::core::domain::entity::account::{AccountModel, AddAccountModel};
use crate::core::port::add_account_repository::{AddAccountRepository, AddAccountRepositoryError};

/// Process-local account store keyed by email.
#[derive(Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, AccountModel>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AddAccountRepository for InMemoryAccountRepository {
    async fn add(
        &self,
        account: AddAccountModel,
    ) -> Result<AccountModel, AddAccountRepositoryError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(AddAccountRepositoryError::account_already_exists(
                &account.email,
            ));
        }

        let stored = AccountModel {
            id: Uuid::new_v4().to_string(),
            name: account.name,
            email: account.email,
            password: account.password,
        };
        accounts.insert(stored.email.clone(), stored.clone());
        Ok(stored)
    }
}
