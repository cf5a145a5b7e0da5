use dd_core::Identity;

use serde::Serialize;

/// Public view of an identity; the session token is never exposed
#[derive(Debug, Serialize)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Identity> for UserDto {
    fn from(i: Identity) -> Self {
        Self {
            id: i.id.to_string(),
            name: i.name,
            email: i.email,
            created_at: i.created_at.timestamp(),
            updated_at: i.updated_at.timestamp(),
        }
    }
}
