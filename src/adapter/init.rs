use std::sync::Arc;

use crate::adapter::config::AppConfig;
use crate::adapter::crypto::argon2_hasher::Argon2Hasher;
use crate::adapter::email::email_validator_adapter::EmailValidatorAdapter;
use crate::adapter::store::memory::account::InMemoryAccountRepository;
use crate::adapter::web::app_state::AppState;
use crate::adapter::web::handler::signup::post::SignUpController;
use crate::core::use_case::add_account::AddAccountUseCase;

pub struct AppInitializer;

impl AppInitializer {
    pub fn initialize(config: &AppConfig) -> Arc<AppState> {
        let account_repository = Arc::new(InMemoryAccountRepository::new());
        let add_account_use_case = Arc::new(AddAccountUseCase::new(
            Arc::new(Argon2Hasher),
            account_repository,
        ));
        let sign_up_controller = Arc::new(SignUpController::new(
            Arc::new(EmailValidatorAdapter),
            add_account_use_case,
            config.password_confirmation(),
        ));

        Arc::new(AppState { sign_up_controller })
    }
}
