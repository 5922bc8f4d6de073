use super::*;

/// Tests creating a post.
///
/// Verifies that the post is stored with its author, enums and a creation timestamp,
/// and without an update timestamp.
///
/// Expected: Ok with post created
#[tokio::test]
async fn creates_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let post = PostRepository::new(db)
        .create(&CreatePostParams {
            member_id: member.id,
            title: "Rust study".to_string(),
            content: "Ownership".to_string(),
            category: PostCategory::Study,
            status: PostStatus::InProgress,
            tags: vec!["ignored".to_string()],
        })
        .await?;

    assert_eq!(post.member_id, member.id);
    assert_eq!(post.title, "Rust study");
    assert_eq!(
        post.category,
        entity::sea_orm_active_enums::PostCategory::Study
    );
    assert_eq!(
        post.status,
        entity::sea_orm_active_enums::PostStatus::InProgress
    );
    assert!(post.updated_at.is_none());

    Ok(())
}

/// Tests the foreign key on the author.
///
/// Expected: Err when the member does not exist
#[tokio::test]
async fn fails_for_missing_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = PostRepository::new(db)
        .create(&CreatePostParams {
            member_id: 999,
            title: "Orphan".to_string(),
            content: "No author".to_string(),
            category: PostCategory::Life,
            status: PostStatus::Todo,
            tags: vec![],
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
