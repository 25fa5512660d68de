//! User entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use board_core::domain::{NewUser, User};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub hobby: Option<String>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain User.
impl From<Model> for User {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            age: model.age,
            hobby: model.hobby,
            created_at: model.created_at.into(),
        }
    }
}

/// Conversion from an unsaved Domain User to SeaORM ActiveModel.
/// The id is left to the store's sequence.
impl From<NewUser> for ActiveModel {
    fn from(user: NewUser) -> Self {
        Self {
            id: NotSet,
            name: Set(user.name),
            age: Set(user.age),
            hobby: Set(user.hobby),
            created_at: Set(user.created_at.into()),
        }
    }
}
