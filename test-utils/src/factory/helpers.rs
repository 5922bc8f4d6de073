//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a member and a post authored by that member.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((member, post))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_author(
    db: &DatabaseConnection,
) -> Result<(entity::member::Model, entity::post::Model), DbErr> {
    let member = crate::factory::member::create_member(db).await?;
    let post = crate::factory::post::create_post(db, member.id).await?;

    Ok((member, post))
}

/// Creates a post for `member_id` and links it to tags with the given names.
///
/// Tags that do not exist yet are created.
///
/// # Returns
/// - `Ok(post)` - Created post
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_tags(
    db: &DatabaseConnection,
    member_id: i32,
    tag_names: &[&str],
) -> Result<entity::post::Model, DbErr> {
    let post = crate::factory::post::create_post(db, member_id).await?;

    for name in tag_names {
        let tag = crate::factory::tag::find_or_create_tag(db, name).await?;
        crate::factory::tag::link_tag(db, post.id, tag.id).await?;
    }

    Ok(post)
}
