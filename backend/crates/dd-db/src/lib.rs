pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::connection_manager::{ConnectionManager, MIGRATOR};
pub use error::{DbError, Result};
pub use repositories::identity_repository::IdentityRepository;
pub use repositories::meal_repository::MealRepository;
