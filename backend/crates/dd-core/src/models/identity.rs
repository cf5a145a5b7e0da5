use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Display name given to identities issued without a registration payload
pub const ANONYMOUS_NAME: &str = "Anonymous";

/// Session-scoped user record: the unit of ownership and authentication
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,

    /// Opaque credential presented back by the client, unique per identity
    #[serde(skip_serializing)]
    pub session_token: String,

    pub name: String,
    pub email: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    pub fn new(name: String, email: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            session_token: Uuid::new_v4().to_string(),
            name,
            email,
            created_at: now,
            updated_at: now,
        }
    }

    /// Identity for a client that showed up without any session token
    pub fn anonymous() -> Self {
        let mut identity = Self::new(ANONYMOUS_NAME.to_string(), String::new());
        identity.email = format!("{}@session.local", identity.id);
        identity
    }
}
