use async_trait::async_trait;

use crate::domain::{NewPost, NewUser, Page, PageRequest, Post, PostChanges, User};
use crate::error::RepoError;

/// Read operations shared by every repository.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Load every entity in store-default order (ascending id).
    async fn find_all(&self) -> Result<Vec<T>, RepoError>;
}

/// User repository.
#[async_trait]
pub trait UserRepository: BaseRepository<User, i64> {
    /// Insert a user; the store assigns the id.
    async fn insert(&self, user: NewUser) -> Result<User, RepoError>;

    /// Load the users with the given ids. Unknown ids are skipped.
    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, RepoError>;
}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i64> {
    /// Insert a post; the store assigns the id.
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError>;

    /// Apply `changes` to the post inside one transaction.
    ///
    /// Returns `None` when no post has this id.
    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, RepoError>;

    /// Fetch one page of posts together with the totals.
    async fn find_page(&self, request: PageRequest) -> Result<Page<Post>, RepoError>;
}
