use super::*;

/// Tests loading a post with its author.
///
/// Expected: Some with the author joined
#[tokio::test]
async fn finds_post_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (member, post) = factory::helpers::create_post_with_author(db).await?;

    let found = PostRepository::new(db).find_by_id(post.id).await?;

    let found = found.expect("post should exist");
    assert_eq!(found.post.id, post.id);
    assert_eq!(found.author.id, member.id);
    assert_eq!(found.author.nickname, member.nickname);

    Ok(())
}

/// Tests loading a post that does not exist.
///
/// Expected: None
#[tokio::test]
async fn returns_none_for_missing_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(PostRepository::new(db).find_by_id(42).await?.is_none());

    Ok(())
}
