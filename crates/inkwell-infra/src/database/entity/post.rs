//! Post entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use inkwell_core::domain::{Category, Post, PostRecord};

/// Stored form of [`Category`]; the column holds the display text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum PostCategory {
    #[sea_orm(string_value = "Fiction")]
    Fiction,
    #[sea_orm(string_value = "Non-Fiction")]
    NonFiction,
}

impl From<Category> for PostCategory {
    fn from(category: Category) -> Self {
        match category {
            Category::Fiction => PostCategory::Fiction,
            Category::NonFiction => PostCategory::NonFiction,
        }
    }
}

impl From<PostCategory> for Category {
    fn from(category: PostCategory) -> Self {
        match category {
            PostCategory::Fiction => Category::Fiction,
            PostCategory::NonFiction => Category::NonFiction,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub summary: Option<String>,
    pub category: PostCategory,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Post::from_record(PostRecord {
            id: model.id,
            title: model.title,
            content: model.content,
            summary: model.summary,
            category: model.category.into(),
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        })
    }
}

/// Conversion from Domain Post to SeaORM ActiveModel.
impl From<Post> for ActiveModel {
    fn from(post: Post) -> Self {
        let record = post.into_record();
        Self {
            id: Set(record.id),
            title: Set(record.title),
            content: Set(record.content),
            summary: Set(record.summary),
            category: Set(record.category.into()),
            created_at: Set(record.created_at.into()),
            updated_at: Set(record.updated_at.into()),
        }
    }
}
