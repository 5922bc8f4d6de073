//! Tag factory for creating tags and post-tag links.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Creates a tag with the given name.
///
/// # Returns
/// - `Ok(entity::tag::Model)` - Created tag
/// - `Err(DbErr)` - Database error, including a unique violation if the name exists
pub async fn create_tag(
    db: &DatabaseConnection,
    name: impl Into<String>,
) -> Result<entity::tag::Model, DbErr> {
    entity::tag::ActiveModel {
        name: ActiveValue::Set(name.into()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Returns the tag with the given name, creating it first if needed.
pub async fn find_or_create_tag(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entity::tag::Model, DbErr> {
    let existing = entity::prelude::Tag::find()
        .filter(entity::tag::Column::Name.eq(name))
        .one(db)
        .await?;

    match existing {
        Some(tag) => Ok(tag),
        None => create_tag(db, name).await,
    }
}

/// Links a post to a tag.
pub async fn link_tag(
    db: &DatabaseConnection,
    post_id: i32,
    tag_id: i32,
) -> Result<entity::post_tag::Model, DbErr> {
    entity::post_tag::ActiveModel {
        post_id: ActiveValue::Set(post_id),
        tag_id: ActiveValue::Set(tag_id),
        ..Default::default()
    }
    .insert(db)
    .await
}
