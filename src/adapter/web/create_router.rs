use axum::routing::post;
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::adapter::web::app_state::AppState;
use crate::adapter::web::route::signup;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/signup", post(signup::post))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
