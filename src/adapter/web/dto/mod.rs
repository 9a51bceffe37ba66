pub mod sign_up_web_input;
