pub mod add_account;
pub mod add_account_repository;
pub mod email_validator;
pub mod hasher;
