use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::adapter::web::protocol::error::HttpError;
use crate::adapter::web::protocol::http::{HttpResponse, ResponseBody};
use crate::core::domain::entity::account::AccountModel;

pub fn ok(account: AccountModel) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::OK,
        body: ResponseBody::Account(account),
    }
}

pub fn bad_request(error: HttpError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST,
        body: ResponseBody::Error(error),
    }
}

/// Never carries the underlying cause.
pub fn server_error() -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR,
        body: ResponseBody::Error(HttpError::Server),
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}
