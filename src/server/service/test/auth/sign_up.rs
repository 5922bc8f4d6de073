use super::*;

/// Tests a successful sign-up.
///
/// Verifies the member is stored with a hashed password, not the plain text.
///
/// Expected: Ok with member created
#[tokio::test]
async fn registers_member_with_hashed_password() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let member = AuthService::new(db, &tokens)
        .sign_up(sign_up_params("writer", "writer@example.com", "secret1"))
        .await?;

    assert_eq!(member.nickname, "writer");

    let stored = crate::server::data::member::MemberRepository::new(db)
        .find_by_id(member.id)
        .await?
        .unwrap();
    assert_ne!(stored.password, "secret1");
    assert!(stored.password.starts_with("$argon2"));

    Ok(())
}

/// Tests that the password may not contain the nickname.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_password_containing_nickname() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let result = AuthService::new(db, &tokens)
        .sign_up(sign_up_params("writer", "writer@example.com", "mywriter1"))
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests a mismatched password confirmation.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_mismatched_confirmation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    let mut params = sign_up_params("writer", "writer@example.com", "secret1");
    params.password_check = "secret2".to_string();

    let result = AuthService::new(db, &tokens).sign_up(params).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests duplicate nickname and email detection.
///
/// Expected: Err(Conflict) for either duplicate
#[tokio::test]
async fn rejects_duplicate_nickname_or_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();

    factory::member::MemberFactory::new(db)
        .nickname("writer")
        .email("writer@example.com")
        .build()
        .await?;

    let service = AuthService::new(db, &tokens);

    let same_nickname = service
        .sign_up(sign_up_params("writer", "other@example.com", "secret1"))
        .await;
    assert!(matches!(same_nickname, Err(AppError::Conflict(_))));

    let same_email = service
        .sign_up(sign_up_params("reader", "writer@example.com", "secret1"))
        .await;
    assert!(matches!(same_email, Err(AppError::Conflict(_))));

    assert!(matches!(
        service.check_nickname("writer").await,
        Err(AppError::Conflict(_))
    ));
    assert!(service.check_nickname("reader").await.is_ok());
    assert!(service.check_email("reader@example.com").await.is_ok());

    Ok(())
}
