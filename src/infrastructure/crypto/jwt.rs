//! Session token verification
//!
//! Tokens are issued by the external identity provider and signed with a
//! shared HS256 secret. The service only verifies them; `create_token` exists
//! for tooling and tests.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::domain::UpsertUser;

/// JWT configuration
#[derive(Clone)]
pub struct JwtConfig {
    /// Secret shared with the identity provider
    pub secret: String,
    /// Expected `iss` claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "change-me-in-production".to_string()),
            issuer: "tyrehub-identity".to_string(),
        }
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("issuer", &self.issuer)
            .finish()
    }
}

/// Claims carried by an identity-provider session token
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SessionClaims {
    /// Subject (external identity id, doubles as the user id)
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub profile_image_url: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Issuer
    pub iss: String,
}

impl SessionClaims {
    /// Claims for `sub` valid for `ttl`
    pub fn new(sub: &str, ttl: Duration, config: &JwtConfig) -> Self {
        let now = Utc::now();
        Self {
            sub: sub.to_string(),
            email: None,
            first_name: None,
            last_name: None,
            profile_image_url: None,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
            iss: config.issuer.clone(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Profile fields to upsert on login
    pub fn to_upsert(&self) -> UpsertUser {
        UpsertUser {
            id: self.sub.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            profile_image_url: self.profile_image_url.clone(),
        }
    }
}

/// Sign `claims` with the shared secret
pub fn create_token(
    claims: &SessionClaims,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Verify signature, issuer and expiry, returning the claims
pub fn verify_token(
    token: &str,
    config: &JwtConfig,
) -> Result<SessionClaims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.issuer]);
    validation.set_required_spec_claims(&["exp", "sub", "iss"]);

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".into(),
            issuer: "tyrehub-test".into(),
        }
    }

    #[test]
    fn valid_token_roundtrips_claims() {
        let cfg = config();
        let claims = SessionClaims::new("sub-42", Duration::hours(1), &cfg)
            .with_email("ravi@example.com");
        let token = create_token(&claims, &cfg).unwrap();

        let decoded = verify_token(&token, &cfg).unwrap();
        assert_eq!(decoded, claims);
        assert!(!decoded.is_expired());
        assert_eq!(decoded.to_upsert().email.as_deref(), Some("ravi@example.com"));
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let cfg = config();
        let token =
            create_token(&SessionClaims::new("sub-42", Duration::hours(1), &cfg), &cfg).unwrap();

        let other = JwtConfig {
            secret: "another-secret".into(),
            ..config()
        };
        assert!(verify_token(&token, &other).is_err());
    }

    #[test]
    fn wrong_issuer_is_rejected() {
        let cfg = config();
        let foreign = JwtConfig {
            issuer: "someone-else".into(),
            ..config()
        };
        let token =
            create_token(&SessionClaims::new("sub-42", Duration::hours(1), &foreign), &cfg)
                .unwrap();
        assert!(verify_token(&token, &cfg).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let cfg = config();
        // Beyond the default 60s leeway
        let claims = SessionClaims::new("sub-42", Duration::minutes(-10), &cfg);
        let token = create_token(&claims, &cfg).unwrap();
        assert!(verify_token(&token, &cfg).is_err());
    }
}
