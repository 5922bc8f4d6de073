use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};

use crate::{
    model::auth::MemberRole,
    server::{
        error::{auth::AuthError, AppError},
        model::auth::AuthMember,
        service::token::TokenService,
        state::AppState,
    },
};

pub enum Permission {
    /// Any signed-in member
    Member,
}

pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap) -> Self {
        Self { tokens, headers }
    }

    /// Authenticates the bearer token on the request and checks every permission.
    ///
    /// # Returns
    /// - `Ok(AuthMember)` - Token is valid and all permissions are held
    /// - `Err(AuthError::MissingToken | InvalidAuthHeader)` - No usable `Authorization` header
    /// - `Err(AuthError::InvalidToken | TokenExpired)` - Token failed verification
    pub fn require(&self, permissions: &[Permission]) -> Result<AuthMember, AppError> {
        let header = self
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        let token = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::InvalidAuthHeader)?;

        let member = AuthMember::from_claims(self.tokens.validate(token)?)?;

        for permission in permissions {
            match permission {
                Permission::Member => {
                    if member.role != MemberRole::Member {
                        return Err(AuthError::AccessDenied(
                            member.id,
                            "Token does not carry the member role".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(member)
    }
}

/// Extracts the signed-in member, rejecting the request before the body is read.
impl FromRequestParts<AppState> for AuthMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthGuard::new(&state.tokens, &parts.headers).require(&[Permission::Member])
    }
}
