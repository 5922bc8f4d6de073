use super::*;

/// Tests deleting a post with tags.
///
/// Expected: Ok, post and links removed, tags kept
#[tokio::test]
async fn deletes_post_and_links() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let service = PostService::new(db);
    let post = service.create(create_params(member.id, &["a", "b"])).await?;

    service.delete(&auth_member(&member), post.id).await?;

    assert!(matches!(
        service.get_by_id(post.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(entity::prelude::PostTag::find().count(db).await?, 0);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 2);

    Ok(())
}

/// Tests that only the author may delete a post.
///
/// Expected: Err(AccessDenied) and the post still present
#[tokio::test]
async fn rejects_non_author() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_member(db).await?;
    let other = factory::create_member(db).await?;
    let service = PostService::new(db);
    let post = service.create(create_params(author.id, &[])).await?;

    let result = service.delete(&auth_member(&other), post.id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(service.get_by_id(post.id).await.is_ok());

    Ok(())
}

/// Tests deleting a post that does not exist.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_missing_post() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;

    let result = PostService::new(db).delete(&auth_member(&member), 5).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
