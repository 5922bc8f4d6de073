use super::*;

/// Tests nickname and email existence checks.
///
/// Expected: true only for values that were registered
#[tokio::test]
async fn reports_registered_nickname_and_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .nickname("writer")
        .email("writer@example.com")
        .build()
        .await?;

    let repo = MemberRepository::new(db);

    assert!(repo.exists_by_nickname("writer").await?);
    assert!(!repo.exists_by_nickname("reader").await?);
    assert!(repo.exists_by_email("writer@example.com").await?);
    assert!(!repo.exists_by_email("reader@example.com").await?);

    Ok(())
}
