//! Access token issuing and verification.
//!
//! Access tokens are HS256-signed JWTs carrying the member id, nickname and role.
//! Tokens are verified for signature, issuer and expiry; nothing is stored server-side.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::{
    model::auth::MemberRole,
    server::{config::JwtConfig, error::auth::AuthError, model::member::Member},
};

/// Claims embedded in every access token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Member id as a decimal string
    pub sub: String,
    pub nickname: String,
    pub role: MemberRole,
    pub iss: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    lifetime: Duration,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            issuer: config.issuer.clone(),
            lifetime: Duration::hours(config.expiration_hours),
        }
    }

    /// Issues an access token for `member` valid from now.
    pub fn issue(&self, member: &Member) -> Result<String, AuthError> {
        self.issue_at(member, Utc::now())
    }

    /// Issues an access token as if it were signed at `issued_at`.
    pub fn issue_at(&self, member: &Member, issued_at: DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            sub: member.id.to_string(),
            nickname: member.nickname.clone(),
            role: member.role,
            iss: self.issuer.clone(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.lifetime).timestamp(),
        };

        Ok(encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &self.encoding_key,
        )?)
    }

    /// Verifies `token` and returns its claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Signature, issuer and expiry are valid
    /// - `Err(AuthError::TokenExpired)` - Token is past its expiry
    /// - `Err(AuthError::InvalidToken)` - Any other verification failure
    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::InvalidToken(e.to_string()),
            })
    }
}
