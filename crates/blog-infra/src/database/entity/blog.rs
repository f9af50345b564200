//! Blog entity for SeaORM.

use sea_orm::{NotSet, Set};
use sea_orm::entity::prelude::*;

use blog_core::domain::{Blog, NewBlog};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Blog.
impl From<Model> for Blog {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Conversion from Domain Blog to SeaORM ActiveModel (update path, id is set).
impl From<Blog> for ActiveModel {
    fn from(blog: Blog) -> Self {
        Self {
            id: Set(blog.id),
            title: Set(blog.title),
            content: Set(blog.content),
            created_at: Set(blog.created_at.into()),
            updated_at: Set(blog.updated_at.into()),
        }
    }
}

impl ActiveModel {
    /// Insert path: the id is left unset so the `SERIAL` default assigns it.
    pub fn from_new(blog: NewBlog, at: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            id: NotSet,
            title: Set(blog.title),
            content: Set(blog.content),
            created_at: Set(at.into()),
            updated_at: Set(at.into()),
        }
    }
}
