use super::*;

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Tests that missing tags are created and existing ones reused.
///
/// Expected: Ok with tags in request order and no duplicate rows
#[tokio::test]
async fn reuses_existing_and_creates_missing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_tag(db, "rust").await?;

    let repo = TagRepository::new(db);
    let tags = repo
        .find_or_create_by_names(&names(&["study", "rust"]))
        .await?;

    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0].name, "study");
    assert_eq!(tags[1].name, "rust");
    assert_eq!(tags[1].id, existing.id);
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 2);

    Ok(())
}

/// Tests that tag names are matched case-sensitively.
///
/// Expected: "Rust" and "rust" are distinct tags
#[tokio::test]
async fn treats_case_as_distinct() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_tag(db, "rust").await?;

    let tags = TagRepository::new(db)
        .find_or_create_by_names(&names(&["Rust"]))
        .await?;

    assert_eq!(tags.len(), 1);
    assert_eq!(tags[0].name, "Rust");
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 2);

    Ok(())
}

/// Tests an empty request.
///
/// Expected: Ok with no tags and nothing inserted
#[tokio::test]
async fn returns_empty_for_no_names() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let tags = TagRepository::new(db).find_or_create_by_names(&[]).await?;

    assert!(tags.is_empty());
    assert_eq!(entity::prelude::Tag::find().count(db).await?, 0);

    Ok(())
}
