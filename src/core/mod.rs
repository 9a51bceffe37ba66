pub mod domain;
pub mod port;
pub mod use_case;
