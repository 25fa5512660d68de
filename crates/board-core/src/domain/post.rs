use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a board article written by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    /// Author. Set once at creation and never reassigned.
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Materialize a stored post from its insert command and the id the store assigned.
    pub fn from_new(id: i64, post: NewPost) -> Self {
        Self {
            id,
            user_id: post.user_id,
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }

    /// Replace title and content and refresh `updated_at`.
    ///
    /// `updated_at` never moves behind `created_at`, even with a skewed clock.
    pub fn apply(&mut self, changes: PostChanges) {
        self.title = changes.title;
        self.content = changes.content;
        self.updated_at = Utc::now().max(self.created_at);
    }
}

/// A post that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPost {
    /// Create a new post stamped with the current time.
    pub fn new(user_id: i64, title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }
}

/// The mutable part of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: String,
    pub content: String,
}
