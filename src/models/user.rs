use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new user with a server-generated id
    pub fn new(email: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_fresh_id() {
        let a = User::new("test@example.com".to_string(), "Test User".to_string());
        let b = User::new("test@example.com".to_string(), "Test User".to_string());

        assert_ne!(a.id, b.id);
        assert_eq!(a.email, "test@example.com");
        assert_eq!(a.name, "Test User");
        assert_eq!(a.created_at, a.updated_at);
    }
}
