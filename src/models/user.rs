use chrono::{DateTime, Utc};

/// Profile of the signed-in user, as held by the session store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}
