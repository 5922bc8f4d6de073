use super::*;

/// Tests creating a member.
///
/// Verifies that the stored row keeps the given hash and role.
///
/// Expected: Ok with member created
#[tokio::test]
async fn creates_member() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = MemberRepository::new(db);
    let member = repo
        .create(CreateMemberParams {
            nickname: "writer".to_string(),
            email: "writer@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            role: MemberRole::Member,
        })
        .await?;

    assert_eq!(member.nickname, "writer");
    assert_eq!(member.password, "$argon2id$hash");
    assert_eq!(member.role, entity::sea_orm_active_enums::MemberRole::Member);
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests the unique nickname constraint.
///
/// Expected: Err on the second insert with the same nickname
#[tokio::test]
async fn fails_for_duplicate_nickname() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Member)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::member::MemberFactory::new(db)
        .nickname("writer")
        .build()
        .await?;

    let result = MemberRepository::new(db)
        .create(CreateMemberParams {
            nickname: "writer".to_string(),
            email: "other@example.com".to_string(),
            password_hash: "hash".to_string(),
            role: MemberRole::Member,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
