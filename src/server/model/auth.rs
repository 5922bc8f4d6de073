//! Authenticated caller identity.

use crate::{
    model::auth::MemberRole,
    server::{error::auth::AuthError, service::token::Claims},
};

/// The member a request was authenticated as, taken from a verified access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthMember {
    pub id: i32,
    pub nickname: String,
    pub role: MemberRole,
}

impl AuthMember {
    /// Fails with `InvalidToken` if the subject is not a member id.
    pub fn from_claims(claims: Claims) -> Result<Self, AuthError> {
        let id = claims
            .sub
            .parse::<i32>()
            .map_err(|e| AuthError::InvalidToken(format!("invalid subject: {}", e)))?;

        Ok(Self {
            id,
            nickname: claims.nickname,
            role: claims.role,
        })
    }
}
