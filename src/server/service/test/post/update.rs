use super::*;

/// Tests that a superset of tags only adds the missing ones.
///
/// Verifies existing link rows keep their ids.
///
/// Expected: Ok with tags [a, b, c] and the original links untouched
#[tokio::test]
async fn adds_only_missing_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let service = PostService::new(db);
    let post = service.create(create_params(member.id, &["a", "b"])).await?;

    let links_before: Vec<i32> = entity::prelude::PostTag::find()
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.id)
        .collect();

    let updated = service
        .update(&auth_member(&member), update_params(post.id, &["a", "b", "c"]))
        .await?;

    assert_eq!(updated.tags, strings(&["a", "b", "c"]));

    let links_after: Vec<i32> = entity::prelude::PostTag::find()
        .all(db)
        .await?
        .into_iter()
        .map(|link| link.id)
        .collect();
    assert_eq!(links_after.len(), 3);
    assert!(links_before.iter().all(|id| links_after.contains(id)));

    Ok(())
}

/// Tests that an empty tag list removes every tag.
///
/// Expected: Ok with no tags and the other fields replaced
#[tokio::test]
async fn empty_tag_list_removes_all_tags() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let service = PostService::new(db);
    let post = service.create(create_params(member.id, &["a", "b"])).await?;

    let updated = service
        .update(&auth_member(&member), update_params(post.id, &[]))
        .await?;

    assert!(updated.tags.is_empty());
    assert_eq!(updated.title, "Updated");
    assert_eq!(updated.category, PostCategory::Work);
    assert_eq!(updated.status, PostStatus::InProgress);
    assert!(updated.updated_at.is_some());
    assert_eq!(updated.created_at, post.created_at);
    assert!(service.get_by_id(post.id).await?.tags.is_empty());

    Ok(())
}

/// Tests that only the author may update a post.
///
/// Expected: Err(AccessDenied) and the post unchanged
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
    let post = service.create(create_params(author.id, &["a"])).await?;

    let result = service
        .update(&auth_member(&other), update_params(post.id, &[]))
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert_eq!(service.get_by_id(post.id).await?, post);

    Ok(())
}

/// Tests updating a post that does not exist.
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

    let result = PostService::new(db)
        .update(&auth_member(&member), update_params(99, &[]))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
