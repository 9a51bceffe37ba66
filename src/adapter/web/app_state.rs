use std::sync::Arc;

use crate::adapter::web::handler::signup::post::SignUpController;

pub struct AppState {
    pub sign_up_controller: Arc<SignUpController>,
}
