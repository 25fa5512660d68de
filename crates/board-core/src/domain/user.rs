use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User entity - an author of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub hobby: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Materialize a stored user from its insert command and the id the store assigned.
    pub fn from_new(id: i64, user: NewUser) -> Self {
        Self {
            id,
            name: user.name,
            age: user.age,
            hobby: user.hobby,
            created_at: user.created_at,
        }
    }
}

/// A user that has not been stored yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub age: i32,
    pub hobby: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    /// Create a new user stamped with the current time.
    pub fn new(name: String, age: i32, hobby: Option<String>) -> Self {
        Self {
            name,
            age,
            hobby,
            created_at: Utc::now(),
        }
    }
}
