use std::collections::HashMap;
use std::sync::Arc;

use board_core::DomainError;
use board_core::domain::{NewPost, PageRequest, Post, PostChanges};
use board_core::error::RepoError;
use board_core::ports::{BaseRepository, PostRepository, UserRepository};
use board_shared::dto::{PageResponse, PostDetailResponse, PostResponse};

/// Post use-cases. Authors are always loaded explicitly.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    /// Store a post for an existing author.
    pub async fn create(&self, post: NewPost) -> Result<PostResponse, DomainError> {
        let author = self
            .users
            .find_by_id(post.user_id)
            .await?
            .ok_or_else(DomainError::no_such_user)?;

        // The author can vanish between the lookup and the insert; the
        // foreign key then rejects the row.
        let saved = self.posts.insert(post).await.map_err(|err| match err {
            RepoError::Constraint(_) => DomainError::no_such_user(),
            other => other.into(),
        })?;
        tracing::info!(post_id = saved.id, user_id = author.id, "Post created");

        Ok(PostResponse::new(saved, author.name))
    }

    pub async fn find_by_id(&self, id: i64) -> Result<PostDetailResponse, DomainError> {
        let post = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(DomainError::no_such_post)?;

        self.detail(post).await
    }

    /// Replace title and content; the author stays as it was.
    pub async fn update_by_id(
        &self,
        id: i64,
        changes: PostChanges,
    ) -> Result<PostDetailResponse, DomainError> {
        let post = self
            .posts
            .update(id, changes)
            .await?
            .ok_or_else(DomainError::no_such_post)?;
        tracing::info!(post_id = post.id, "Post updated");

        self.detail(post).await
    }

    /// One page of post summaries. Authors of the page are fetched in one batch.
    pub async fn get_page(
        &self,
        request: PageRequest,
    ) -> Result<PageResponse<PostResponse>, DomainError> {
        let page = self.posts.find_page(request).await?;

        let mut author_ids: Vec<i64> = page.content.iter().map(|p| p.user_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();
        let names: HashMap<i64, String> = self
            .users
            .find_by_ids(&author_ids)
            .await?
            .into_iter()
            .map(|u| (u.id, u.name))
            .collect();

        let page = page.try_map(|post| {
            names
                .get(&post.user_id)
                .cloned()
                .map(|name| PostResponse::new(post, name))
                .ok_or_else(DomainError::no_such_user)
        })?;

        Ok(PageResponse::from(page))
    }

    async fn detail(&self, post: Post) -> Result<PostDetailResponse, DomainError> {
        let author = self
            .users
            .find_by_id(post.user_id)
            .await?
            .ok_or_else(DomainError::no_such_user)?;

        Ok(PostDetailResponse::new(post, author.name))
    }
}
