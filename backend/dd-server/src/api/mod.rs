pub mod error;
pub mod extractors;
pub mod meals;
pub mod users;
