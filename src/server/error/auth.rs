use axum::{http::StatusCode, response::Response};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Request carries no `Authorization` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authorization header is missing")]
    MissingToken,

    /// `Authorization` header is not of the form `Bearer <token>`.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authorization header is not a bearer token")]
    InvalidAuthHeader,

    /// Token signature, issuer or format is invalid.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid access token: {0}")]
    InvalidToken(String),

    /// Token is well formed but past its expiry.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Access token has expired")]
    TokenExpired,

    /// Nickname or password did not match a member.
    ///
    /// Results in a 400 Bad Request response that does not reveal which part was wrong.
    #[error("Invalid nickname or password")]
    InvalidCredentials,

    /// Member is authenticated but may not act on the resource.
    ///
    /// Results in a 403 Forbidden response. The reason is logged, not returned.
    ///
    /// # Fields
    /// - Member ID
    /// - Reason for denial
    #[error("Member {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Password hashing or hash parsing failed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing an access token failed.
    ///
    /// Results in a 500 Internal Server Error response.
    #[error("Failed to issue access token: {0}")]
    TokenEncoding(#[from] jsonwebtoken::errors::Error),
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 400 Bad Request - For invalid sign-in credentials
/// - 401 Unauthorized - For missing, malformed, invalid or expired tokens
/// - 403 Forbidden - For access to another member's resource
/// - 500 Internal Server Error - For hashing and token signing failures
impl axum::response::IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidAuthHeader | Self::InvalidToken(_) => {
                error_response(StatusCode::UNAUTHORIZED, "Authentication is required.")
            }
            Self::TokenExpired => {
                error_response(StatusCode::UNAUTHORIZED, "Access token has expired.")
            }
            Self::InvalidCredentials => error_response(
                StatusCode::BAD_REQUEST,
                "Please check your nickname or password.",
            ),
            Self::AccessDenied(_, _) => error_response(
                StatusCode::FORBIDDEN,
                "You do not have permission to perform this action.",
            ),
            Self::PasswordHash(_) | Self::TokenEncoding(_) => {
                tracing::error!("{}", self);
                error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}
