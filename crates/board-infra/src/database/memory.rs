//! In-memory repositories - used when no database is configured, and in tests.
//!
//! Note: Data is lost on process restart.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use board_core::domain::{
    Direction, NewPost, NewUser, Page, PageRequest, Post, PostChanges, SortField, User,
};
use board_core::error::RepoError;
use board_core::ports::{BaseRepository, PostRepository, UserRepository};

/// Rows keyed by id. Ids come from a per-table sequence starting at 1.
struct Table<T> {
    rows: BTreeMap<i64, T>,
    next_id: i64,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl<T> Table<T> {
    fn insert_with(&mut self, build: impl FnOnce(i64) -> T) -> &T {
        let id = self.next_id;
        self.next_id += 1;
        self.rows.entry(id).or_insert_with(|| build(id))
    }
}

/// In-memory user repository.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, i64> for InMemoryUserRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepoError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| User::from_new(id, user)).clone())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, RepoError> {
        let table = self.table.read().await;
        Ok(ids
            .iter()
            .filter_map(|id| table.rows.get(id))
            .cloned()
            .collect())
    }
}

/// In-memory post repository.
#[derive(Default)]
pub struct InMemoryPostRepository {
    table: RwLock<Table<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn compare(field: SortField, a: &Post, b: &Post) -> Ordering {
        match field {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Title => a.title.cmp(&b.title),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
            SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        }
    }
}

#[async_trait]
impl BaseRepository<Post, i64> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let mut table = self.table.write().await;
        Ok(table.insert_with(|id| Post::from_new(id, post)).clone())
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        let mut table = self.table.write().await;
        Ok(table.rows.get_mut(&id).map(|post| {
            post.apply(changes);
            post.clone()
        }))
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Post>, RepoError> {
        let table = self.table.read().await;
        let mut posts: Vec<&Post> = table.rows.values().collect();
        let sort = request.sort;
        posts.sort_by(|a, b| {
            let primary = match sort.direction {
                Direction::Asc => Self::compare(sort.field, a, b),
                Direction::Desc => Self::compare(sort.field, b, a),
            };
            primary.then(a.id.cmp(&b.id))
        });

        let total = posts.len() as u64;
        let offset = usize::try_from(request.offset()).unwrap_or(usize::MAX);
        let size = usize::try_from(request.size).unwrap_or(usize::MAX);
        let content = posts
            .into_iter()
            .skip(offset)
            .take(size)
            .cloned()
            .collect();

        Ok(Page::new(content, total, request.size))
    }
}
