use axum::body::Bytes;
use axum::extract::State;
use std::sync::Arc;

use crate::adapter::web::app_state::AppState;
use crate::adapter::web::dto::sign_up_web_input::SignUpWebInput;
use crate::adapter::web::protocol::http::{HttpRequest, HttpResponse};

pub async fn post(State(state): State<Arc<AppState>>, body: Bytes) -> HttpResponse {
    let request = HttpRequest::from(SignUpWebInput::parse(&body));
    let response = state.sign_up_controller.handle(request).await;
    tracing::debug!(status = %response.status_code, "sign-up handled");
    response
}
