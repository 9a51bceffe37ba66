use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::adapter::web::protocol::error::HttpError;
use crate::core::domain::entity::account::AccountModel;

/// Transport-neutral request: the decoded body as named fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HttpRequest {
    pub body: Map<String, Value>,
}

impl HttpRequest {
    pub fn new(body: Map<String, Value>) -> Self {
        Self { body }
    }

    pub fn field(&self, name: &str) -> Option<&Value> {
        self.body.get(name)
    }
}

/// Anything but a JSON object becomes an empty body.
impl From<Value> for HttpRequest {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(body) => Self::new(body),
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Account(AccountModel),
    Error(HttpError),
}
