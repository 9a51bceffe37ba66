use crate::adapter::web::handler::signup::post::PasswordConfirmation;
use crate::error::ApplicationError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_LOG_FILTER: &str = "info";

pub struct AppConfig {
    bind_addr: String,
    log_filter: String,
    password_confirmation: PasswordConfirmation,
}

impl AppConfig {
    pub fn load() -> Result<Self, ApplicationError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ApplicationError> {
        let password_confirmation = match lookup("SIGNUP_PASSWORD_CONFIRMATION").as_deref() {
            None | Some("optional") => PasswordConfirmation::Optional,
            Some("required") => PasswordConfirmation::Required,
            Some("ignored") => PasswordConfirmation::Ignored,
            Some(other) => {
                return Err(ApplicationError::ConfigurationError(format!(
                    "SIGNUP_PASSWORD_CONFIRMATION must be required, optional or ignored, got {:?}",
                    other
                )))
            }
        };

        Ok(Self {
            bind_addr: lookup("SIGNUP_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            log_filter: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            password_confirmation,
        })
    }

    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    pub fn password_confirmation(&self) -> PasswordConfirmation {
        self.password_confirmation
    }
}
