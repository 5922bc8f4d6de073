use crate::server::{config::JwtConfig, service::token::TokenService};

mod auth;
mod post;

fn token_service() -> TokenService {
    TokenService::new(&JwtConfig {
        secret: "test-secret".to_string(),
        issuer: "simpleboard".to_string(),
        expiration_hours: 1,
    })
}
