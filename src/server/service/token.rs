//! Bearer token issuing and validation.
//!
//! Tokens are HS256-signed JWTs carrying the user's id, email, username and the role
//! names held at login time. The authorization guard re-reads roles from the database,
//! so the embedded roles are informational for clients.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::model::user::User;

/// Claims embedded in every issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub username: String,
    pub roles: Vec<String>,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
}

struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

/// Issues and validates signed bearer tokens.
///
/// Cloning shares the signing keys.
#[derive(Clone)]
pub struct TokenService {
    keys: Arc<TokenKeys>,
    issuer: String,
    ttl: chrono::Duration,
}

impl TokenService {
    /// Creates a token service from a shared secret.
    ///
    /// # Arguments
    /// - `secret` - HMAC secret used for signing and verification
    /// - `issuer` - Value written to and required in the `iss` claim
    /// - `ttl` - Lifetime of issued tokens
    ///
    /// # Returns
    /// - `TokenService` - New service instance
    pub fn new(secret: &str, issuer: &str, ttl: chrono::Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            keys: Arc::new(TokenKeys {
                encoding: EncodingKey::from_secret(secret.as_bytes()),
                decoding: DecodingKey::from_secret(secret.as_bytes()),
                validation,
            }),
            issuer: issuer.to_string(),
            ttl,
        }
    }

    /// Signs a token for the user.
    ///
    /// # Arguments
    /// - `user` - Authenticated user
    /// - `roles` - Role names currently held by the user
    ///
    /// # Returns
    /// - `Ok(String)` - Encoded JWT
    /// - `Err(jsonwebtoken::errors::Error)` - Signing failed
    pub fn issue(
        &self,
        user: &User,
        roles: Vec<String>,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            username: user.username.clone(),
            roles,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.keys.encoding)
    }

    /// Verifies signature, issuer and expiry, returning the claims.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is valid
    /// - `Err(jsonwebtoken::errors::Error)` - Token is malformed, tampered, expired or
    ///   from another issuer
    pub fn validate(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.keys.decoding, &self.keys.validation)
            .map(|data| data.claims)
    }
}
