use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_JWT_ISSUER: &str = "simpleboard";
const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;
const MAX_JWT_EXPIRATION_HOURS: i64 = 24 * 365;

/// Settings used to sign and verify access tokens.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub expiration_hours: i64,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub bind_address: String,
    pub seed_demo_data: bool,

    pub jwt: JwtConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source, such as a map in tests.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let expiration_hours = match lookup("JWT_EXPIRATION_HOURS") {
            Some(value) => value
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|hours| (1..=MAX_JWT_EXPIRATION_HOURS).contains(hours))
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "JWT_EXPIRATION_HOURS".to_string(),
                    reason: format!(
                        "expected between 1 and {} hours, got '{}'",
                        MAX_JWT_EXPIRATION_HOURS, value
                    ),
                })?,
            None => DEFAULT_JWT_EXPIRATION_HOURS,
        };

        let seed_demo_data = match lookup("SEED_DEMO_DATA") {
            Some(value) => parse_flag(&value).ok_or_else(|| ConfigError::InvalidEnvVar {
                name: "SEED_DEMO_DATA".to_string(),
                reason: format!("expected true or false, got '{}'", value),
            })?,
            None => false,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            bind_address: lookup("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
            seed_demo_data,
            jwt: JwtConfig {
                secret: required("JWT_SECRET")?,
                issuer: lookup("JWT_ISSUER").unwrap_or_else(|| DEFAULT_JWT_ISSUER.to_string()),
                expiration_hours,
            },
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" | "" => Some(false),
        _ => None,
    }
}
