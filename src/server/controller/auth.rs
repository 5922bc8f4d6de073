use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auth::{EmailQuery, NicknameQuery, SignInDto, SignInResponseDto, SignUpDto},
    },
    server::{
        error::AppError,
        middleware::validation::{ValidatedJson, ValidatedQuery},
        model::member::{SignInParams, SignUpParams},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Check whether a nickname is still available.
///
/// # Returns
/// - `200 OK` - Nickname is free
/// - `400 Bad Request` - Nickname is shorter than 3 characters or not alphanumeric
/// - `409 Conflict` - Nickname is taken
#[utoipa::path(
    get,
    path = "/api/v1/auth/check-nickname",
    tag = AUTH_TAG,
    params(NicknameQuery),
    responses(
        (status = 200, description = "Nickname is available"),
        (status = 400, description = "Invalid nickname", body = ValidationErrorDto),
        (status = 409, description = "Nickname already in use", body = ErrorDto)
    ),
)]
pub async fn check_nickname(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<NicknameQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    service.check_nickname(&query.nickname).await?;

    Ok(StatusCode::OK)
}

/// Check whether an email address is still available.
///
/// # Returns
/// - `200 OK` - Email is free
/// - `400 Bad Request` - Not a valid email address
/// - `409 Conflict` - Email is taken
#[utoipa::path(
    get,
    path = "/api/v1/auth/check-email",
    tag = AUTH_TAG,
    params(EmailQuery),
    responses(
        (status = 200, description = "Email is available"),
        (status = 400, description = "Invalid email", body = ValidationErrorDto),
        (status = 409, description = "Email already in use", body = ErrorDto)
    ),
)]
pub async fn check_email(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<EmailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    service.check_email(&query.email).await?;

    Ok(StatusCode::OK)
}

/// Register a new member.
///
/// # Returns
/// - `201 Created` - Member registered
/// - `400 Bad Request` - Field validation failed, password contains the nickname,
///   or the confirmation does not match
/// - `409 Conflict` - Nickname or email already in use
#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-up",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "Member registered"),
        (status = 400, description = "Invalid sign-up data", body = ValidationErrorDto),
        (status = 409, description = "Nickname or email already in use", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    service.sign_up(SignUpParams::from_dto(payload)).await?;

    Ok(StatusCode::CREATED)
}

/// Sign in with nickname and password.
///
/// # Returns
/// - `200 OK` - Access token for the `Authorization: Bearer` header
/// - `400 Bad Request` - Nickname or password is wrong
#[utoipa::path(
    post,
    path = "/api/v1/auth/sign-in",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = SignInResponseDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens);

    let access_token = service.sign_in(SignInParams::from_dto(payload)).await?;

    Ok(Json(SignInResponseDto { access_token }))
}
