use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_ISSUER: &str = "dental-appointment";
const DEFAULT_JWT_EXPIRATION_MINUTES: i64 = 60;
const DEFAULT_CACHE_TTL_SECONDS: u64 = 600;
const DEFAULT_CACHE_MAX_CAPACITY: u64 = 10_000;
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_issuer: String,
    pub jwt_expiration: chrono::Duration,

    pub cache_ttl: Duration,
    pub cache_max_capacity: u64,

    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_expiration_minutes =
            optional_parsed("JWT_EXPIRATION_MINUTES", DEFAULT_JWT_EXPIRATION_MINUTES)?;
        let cache_ttl_seconds = optional_parsed("CACHE_TTL_SECONDS", DEFAULT_CACHE_TTL_SECONDS)?;
        let cache_max_capacity =
            optional_parsed("CACHE_MAX_CAPACITY", DEFAULT_CACHE_MAX_CAPACITY)?;

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            jwt_issuer: std::env::var("JWT_ISSUER")
                .unwrap_or_else(|_| DEFAULT_JWT_ISSUER.to_string()),
            jwt_expiration: chrono::Duration::minutes(jwt_expiration_minutes),
            cache_ttl: Duration::from_secs(cache_ttl_seconds),
            cache_max_capacity,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

fn optional_parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(value) => value.parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}
