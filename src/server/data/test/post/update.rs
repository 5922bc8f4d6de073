use super::*;

/// Tests updating every editable field.
///
/// Verifies that author and creation time are preserved and `updated_at` is set.
///
/// Expected: Ok with the new values
#[tokio::test]
async fn updates_fields_and_stamps_updated_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post) = factory::helpers::create_post_with_author(db).await?;

    let updated = PostRepository::new(db)
        .update(&UpdatePostParams {
            id: post.id,
            title: "New title".to_string(),
            content: "New content".to_string(),
            category: PostCategory::Work,
            status: PostStatus::Done,
            tags: vec![],
        })
        .await?;

    assert_eq!(updated.title, "New title");
    assert_eq!(updated.content, "New content");
    assert_eq!(
        updated.category,
        entity::sea_orm_active_enums::PostCategory::Work
    );
    assert_eq!(updated.status, entity::sea_orm_active_enums::PostStatus::Done);
    assert_eq!(updated.member_id, member.id);
    assert_eq!(updated.created_at, post.created_at);
    assert!(updated.updated_at.is_some());

    Ok(())
}
