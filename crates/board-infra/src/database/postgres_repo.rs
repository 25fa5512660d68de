//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

use board_core::domain::{
    Direction, NewPost, NewUser, Page, PageRequest, Post, PostChanges, SortField, User,
};
use board_core::error::RepoError;
use board_core::ports::{PostRepository, UserRepository};

use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        let active_model: user::ActiveModel = user.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(user_id = model.id, "User inserted");

        Ok(model.into())
    }

    async fn find_by_ids(&self, ids: &[i64]) -> Result<Vec<User>, RepoError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let result = UserEntity::find()
            .filter(user::Column::Id.is_in(ids.iter().copied()))
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.into_iter().map(Into::into).collect())
    }
}

fn sort_column(field: SortField) -> post::Column {
    match field {
        SortField::Id => post::Column::Id,
        SortField::Title => post::Column::Title,
        SortField::CreatedAt => post::Column::CreatedAt,
        SortField::UpdatedAt => post::Column::UpdatedAt,
    }
}

fn sort_order(direction: Direction) -> Order {
    match direction {
        Direction::Asc => Order::Asc,
        Direction::Desc => Order::Desc,
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, post: NewPost) -> Result<Post, RepoError> {
        let active_model: post::ActiveModel = post.into();
        let model = active_model.insert(&self.db).await.map_err(map_db_err)?;
        tracing::debug!(post_id = model.id, user_id = model.user_id, "Post inserted");

        Ok(model.into())
    }

    async fn update(&self, id: i64, changes: PostChanges) -> Result<Option<Post>, RepoError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        // Dropping the transaction without commit rolls it back.
        let Some(model) = PostEntity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut post: Post = model.into();
        post.apply(changes);

        let active_model: post::ActiveModel = post.into();
        let updated = active_model.update(&txn).await.map_err(map_db_err)?;
        txn.commit().await.map_err(map_db_err)?;
        tracing::debug!(post_id = id, "Post updated");

        Ok(Some(updated.into()))
    }

    async fn find_page(&self, request: PageRequest) -> Result<Page<Post>, RepoError> {
        let mut select = PostEntity::find().order_by(
            sort_column(request.sort.field),
            sort_order(request.sort.direction),
        );
        if request.sort.field != SortField::Id {
            select = select.order_by_asc(post::Column::Id);
        }

        let total = select.clone().count(&self.db).await.map_err(map_db_err)?;

        // A page starting past the last row is empty without a second query.
        let offset = request.offset();
        let models = if offset < total {
            select
                .offset(offset)
                .limit(request.size)
                .all(&self.db)
                .await
                .map_err(map_db_err)?
        } else {
            Vec::new()
        };
        tracing::debug!(
            page = request.page,
            size = request.size,
            total,
            "Post page fetched"
        );

        Ok(Page::new(
            models.into_iter().map(Into::into).collect(),
            total,
            request.size,
        ))
    }
}
