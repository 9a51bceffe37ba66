pub mod config;
pub mod crypto;
pub mod email;
pub mod init;
pub mod store;
pub mod web;
