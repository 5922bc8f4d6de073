use super::*;

/// Tests signing in with correct credentials.
///
/// Expected: Ok with a token whose claims identify the member
#[tokio::test]
async fn issues_token_for_valid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();
    let service = AuthService::new(db, &tokens);

    let member = service
        .sign_up(sign_up_params("writer", "writer@example.com", "secret1"))
        .await?;

    let token = service
        .sign_in(SignInParams {
            nickname: "writer".to_string(),
            password: "secret1".to_string(),
        })
        .await?;

    let claims = tokens.validate(&token)?;
    assert_eq!(claims.sub, member.id.to_string());
    assert_eq!(claims.nickname, "writer");

    Ok(())
}

/// Tests that wrong password and unknown nickname fail the same way.
///
/// Expected: Err(InvalidCredentials) for both
#[tokio::test]
async fn rejects_invalid_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_board_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = token_service();
    let service = AuthService::new(db, &tokens);

    service
        .sign_up(sign_up_params("writer", "writer@example.com", "secret1"))
        .await?;

    let wrong_password = service
        .sign_in(SignInParams {
            nickname: "writer".to_string(),
            password: "secret2".to_string(),
        })
        .await;
    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    let unknown = service
        .sign_in(SignInParams {
            nickname: "nobody".to_string(),
            password: "secret1".to_string(),
        })
        .await;
    assert!(matches!(
        unknown,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}
