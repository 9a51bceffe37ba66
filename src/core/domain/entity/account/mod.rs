use serde::Serialize;

/// Validated sign-up input handed to account creation.
///
/// Carries only what an account is made of; the password confirmation
/// is consumed by the controller and never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// An account as returned by account creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountModel {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}
