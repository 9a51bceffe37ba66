use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Error body of a sign-up response.
///
/// Serialized as `{"name": ..., "message": ...}`. Two values are equal
/// when they are the same kind for the same field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HttpError {
    #[error("Missing param: {0}")]
    MissingParam(String),

    #[error("Invalid param: {0}")]
    InvalidParam(String),

    #[error("Internal server error")]
    Server,
}

impl HttpError {
    pub fn missing_param(field: &str) -> Self {
        HttpError::MissingParam(field.to_string())
    }

    pub fn invalid_param(field: &str) -> Self {
        HttpError::InvalidParam(field.to_string())
    }

    pub fn name(&self) -> &'static str {
        match self {
            HttpError::MissingParam(_) => "MissingParamError",
            HttpError::InvalidParam(_) => "InvalidParamError",
            HttpError::Server => "ServerError",
        }
    }
}

impl Serialize for HttpError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HttpError", 2)?;
        state.serialize_field("name", self.name())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}
