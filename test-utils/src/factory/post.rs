//! Post factory for creating test post entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{PostCategory, PostStatus};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let post = PostFactory::new(&db, member.id)
///     .title("Rust study")
///     .category(PostCategory::Study)
///     .status(PostStatus::Done)
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    member_id: i32,
    title: String,
    content: String,
    category: PostCategory,
    status: PostStatus,
    created_at: DateTime<Utc>,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory with default values.
    ///
    /// Defaults:
    /// - title: `"Post {id}"`
    /// - content: `"Content of post {id}"`
    /// - category: `PostCategory::Study`
    /// - status: `PostStatus::Todo`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, member_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            member_id,
            title: format!("Post {}", id),
            content: format!("Content of post {}", id),
            category: PostCategory::Study,
            status: PostStatus::Todo,
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn category(mut self, category: PostCategory) -> Self {
        self.category = category;
        self
    }

    pub fn status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the creation timestamp, useful for asserting sort order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the post entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::post::Model)` - Created post entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            member_id: ActiveValue::Set(self.member_id),
            category: ActiveValue::Set(self.category),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post with default values for the given author.
pub async fn create_post(
    db: &DatabaseConnection,
    member_id: i32,
) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, member_id).build().await
}
