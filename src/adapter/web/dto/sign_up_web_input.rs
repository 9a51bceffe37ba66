use serde_json::{Map, Value};

use crate::adapter::web::protocol::http::HttpRequest;

/// Raw sign-up payload as received on the wire.
#[derive(Debug, Default, Clone)]
pub struct SignUpWebInput {
    fields: Map<String, Value>,
}

impl SignUpWebInput {
    /// Decodes a JSON object. Anything else is logged and read as an empty
    /// object so the controller reports the first missing field.
    pub fn parse(raw: &[u8]) -> Self {
        match serde_json::from_slice::<Map<String, Value>>(raw) {
            Ok(fields) => Self { fields },
            Err(e) => {
                tracing::debug!(error = %e, "sign-up body is not a JSON object");
                Self::default()
            }
        }
    }
}

impl From<SignUpWebInput> for HttpRequest {
    fn from(value: SignUpWebInput) -> Self {
        HttpRequest::new(value.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_every_field_of_an_object() {
        let request = HttpRequest::from(SignUpWebInput::parse(
            br#"{"name":"any_name","email":"any_email@mail.com","extra":1}"#,
        ));

        assert_eq!(request.field("name"), Some(&json!("any_name")));
        assert_eq!(request.field("email"), Some(&json!("any_email@mail.com")));
        assert_eq!(request.field("extra"), Some(&json!(1)));
    }

    #[test]
    fn malformed_or_non_object_bodies_are_empty() {
        for raw in [&b"not json"[..], b"[1,2]", b"\"text\"", b""] {
            assert_eq!(
                HttpRequest::from(SignUpWebInput::parse(raw)),
                HttpRequest::default()
            );
        }
    }
}
