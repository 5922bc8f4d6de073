use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

const ALPHANUMERIC_MESSAGE: &str = "Only letters (a-z, A-Z) and digits (0-9) are allowed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MemberRole {
    Member,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpDto {
    #[validate(
        length(min = 3, message = "Nickname must be at least 3 characters."),
        custom(function = "validate_alphanumeric")
    )]
    pub nickname: String,
    #[validate(email(message = "Email must be a valid email address."))]
    pub email: String,
    #[validate(
        length(min = 4, message = "Password must be at least 4 characters."),
        custom(function = "validate_alphanumeric")
    )]
    pub password: String,
    #[validate(length(min = 1, message = "Password confirmation is required."))]
    pub password_check: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignInDto {
    #[validate(length(min = 1, message = "Nickname is required."))]
    pub nickname: String,
    #[validate(length(min = 1, message = "Password is required."))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponseDto {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NicknameQuery {
    /// Nickname to check, at least 3 alphanumeric characters
    #[validate(
        length(min = 3, message = "Nickname must be at least 3 characters."),
        custom(function = "validate_alphanumeric")
    )]
    pub nickname: String,
}

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Email address to check
    #[validate(email(message = "Email must be a valid email address."))]
    pub email: String,
}

/// Rejects values containing anything other than ASCII letters and digits.
pub fn validate_alphanumeric(value: &str) -> Result<(), ValidationError> {
    if value.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Ok(());
    }

    Err(ValidationError::new("alphanumeric").with_message(Cow::Borrowed(ALPHANUMERIC_MESSAGE)))
}
