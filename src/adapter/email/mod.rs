pub mod email_validator_adapter;
