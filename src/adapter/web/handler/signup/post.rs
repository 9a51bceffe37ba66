use serde_json::Value;
use std::sync::Arc;

use crate::adapter::web::presenter::http_response::{bad_request, ok, server_error};
use crate::adapter::web::protocol::error::HttpError;
use crate::adapter::web::protocol::http::{HttpRequest, HttpResponse};
use crate::core::domain::entity::account::{AccountModel, AddAccountModel};
use crate::core::port::add_account::AddAccount;
use crate::core::port::email_validator::EmailValidator;

const NAME: &str = "name";
const EMAIL: &str = "email";
const PASSWORD: &str = "password";
const PASSWORD_CONFIRMATION: &str = "passwordConfirmation";

/// Whether a sign-up must repeat its password in `passwordConfirmation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PasswordConfirmation {
    /// The field is required and must equal `password`.
    Required,
    /// The field may be left out; when sent it must equal `password`.
    #[default]
    Optional,
    /// The field is not read at all.
    Ignored,
}

/// Validates a sign-up request and delegates account creation.
///
/// Checks run in a fixed order and stop at the first failure:
///
/// 1. `name`, `email`, `password` and, when [`PasswordConfirmation::Required`],
///    `passwordConfirmation` must be present non-empty strings (400
///    `MissingParamError` for the first absent one, 400 `InvalidParamError`
///    for a non-string value).
/// 2. `passwordConfirmation`, when required or sent under
///    [`PasswordConfirmation::Optional`], must equal `password` (400
///    `InvalidParamError`).
/// 3. The email must pass the [`EmailValidator`] (400 `InvalidParamError`).
/// 4. [`AddAccount`] creates the account (200 with the account).
///
/// A failing collaborator yields 500 `ServerError`. `handle` never fails.
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
    password_confirmation: PasswordConfirmation,
}

impl SignUpController {
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        add_account: Arc<dyn AddAccount>,
        password_confirmation: PasswordConfirmation,
    ) -> Self {
        Self {
            email_validator,
            add_account,
            password_confirmation,
        }
    }

    pub async fn handle(&self, request: HttpRequest) -> HttpResponse {
        match self.sign_up(&request).await {
            Ok(account) => ok(account),
            Err(HttpError::Server) => server_error(),
            Err(error) => bad_request(error),
        }
    }

    async fn sign_up(&self, request: &HttpRequest) -> Result<AccountModel, HttpError> {
        let name = required_field(request, NAME)?;
        let email = required_field(request, EMAIL)?;
        let password = required_field(request, PASSWORD)?;

        let confirmation = match self.password_confirmation {
            PasswordConfirmation::Required => {
                Some(required_field(request, PASSWORD_CONFIRMATION)?)
            }
            PasswordConfirmation::Optional => optional_field(request, PASSWORD_CONFIRMATION)?,
            PasswordConfirmation::Ignored => None,
        };
        if confirmation.is_some_and(|confirmation| confirmation != password) {
            return Err(HttpError::invalid_param(PASSWORD_CONFIRMATION));
        }

        let is_valid = self
            .email_validator
            .is_valid(email)
            .await
            .map_err(|_| HttpError::Server)?;
        if !is_valid {
            return Err(HttpError::invalid_param(EMAIL));
        }

        self.add_account
            .add(AddAccountModel {
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            })
            .await
            .map_err(|_| HttpError::Server)
    }
}

fn required_field<'a>(request: &'a HttpRequest, field: &str) -> Result<&'a str, HttpError> {
    optional_field(request, field)?.ok_or_else(|| HttpError::missing_param(field))
}

/// Absent, `null` and `""` read as `None`.
fn optional_field<'a>(
    request: &'a HttpRequest,
    field: &str,
) -> Result<Option<&'a str>, HttpError> {
    match request.field(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) if value.is_empty() => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.as_str())),
        Some(_) => Err(HttpError::invalid_param(field)),
    }
}
