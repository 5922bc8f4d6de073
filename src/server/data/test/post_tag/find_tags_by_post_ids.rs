use super::*;

/// Tests batch loading of tags for several posts.
///
/// Expected: tags grouped per post in link order, untagged posts absent
#[tokio::test]
async fn groups_tags_by_post() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let member = factory::create_member(db).await?;
    let first = factory::helpers::create_post_with_tags(db, member.id, &["b", "a"]).await?;
    let second = factory::helpers::create_post_with_tags(db, member.id, &["a"]).await?;
    let untagged = factory::create_post(db, member.id).await?;

    let tags = PostTagRepository::new(db)
        .find_tags_by_post_ids(&[first.id, second.id, untagged.id])
        .await?;

    let names = |post_id: i32| -> Vec<String> {
        tags.get(&post_id)
            .map(|t| t.iter().map(|tag| tag.name.clone()).collect())
            .unwrap_or_default()
    };

    assert_eq!(names(first.id), vec!["b".to_string(), "a".to_string()]);
    assert_eq!(names(second.id), vec!["a".to_string()]);
    assert!(!tags.contains_key(&untagged.id));

    Ok(())
}
