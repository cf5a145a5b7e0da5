pub mod request_validator;
pub mod registration;
