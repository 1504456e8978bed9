//! Admin login and access tokens
//!
//! A single admin identity is configured at startup. A successful login
//! yields an HS256-signed JWT carrying the username as `sub` and an `exp`
//! claim; verification is stateless (signature and expiry only).

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Token claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly issued access token
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: i64,
}

/// Validates the admin identity and issues/verifies access tokens
pub struct CredentialChecker {
    username: String,
    password: String,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl CredentialChecker {
    pub fn new(username: String, password: String, secret: &[u8], ttl: Duration) -> Self {
        Self {
            username,
            password,
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.admin_username.clone(),
            config.admin_password.clone(),
            config.token_secret.as_bytes(),
            config.token_ttl,
        )
    }

    /// Check the admin pair and issue a token for it
    pub fn login(&self, username: &str, password: &str) -> Result<IssuedToken> {
        if username != self.username || password != self.password {
            log::warn!("Rejected login for user {:?}", username);
            return Err(AppError::InvalidCredentials);
        }

        let now = Utc::now();
        let expires_at = (now + self.ttl).timestamp();
        let claims = Claims {
            sub: Some(username.to_string()),
            iat: now.timestamp(),
            exp: expires_at,
        };
        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)?;

        log::info!("Issued access token for {}", username);
        Ok(IssuedToken { token, expires_at })
    }

    /// Verify a token and return its subject
    pub fn verify(&self, token: &str) -> Result<String> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            log::debug!("Token rejected: {}", e);
            AppError::InvalidToken
        })?;

        data.claims.sub.ok_or(AppError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret";

    fn checker() -> CredentialChecker {
        CredentialChecker::new(
            "admin".to_string(),
            "1234".to_string(),
            SECRET,
            Duration::minutes(60),
        )
    }

    fn forge(claims: &Claims, secret: &[u8]) -> String {
        encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret),
        )
        .unwrap()
    }

    #[test]
    fn test_login_issues_token_for_admin() {
        let checker = checker();
        let before = Utc::now().timestamp();
        let issued = checker.login("admin", "1234").unwrap();

        assert_eq!(checker.verify(&issued.token).unwrap(), "admin");
        let ttl = issued.expires_at - before;
        assert!((3595..=3605).contains(&ttl), "unexpected ttl {}", ttl);
    }

    #[test]
    fn test_login_rejects_other_pairs() {
        let checker = checker();
        for (user, pass) in [("admin", "wrong"), ("root", "1234"), ("", ""), ("Admin", "1234")] {
            assert!(matches!(
                checker.login(user, pass),
                Err(AppError::InvalidCredentials)
            ));
        }
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let now = Utc::now().timestamp();
        let token = forge(
            &Claims {
                sub: Some("admin".to_string()),
                iat: now - 7200,
                exp: now - 10,
            },
            SECRET,
        );
        assert!(matches!(checker().verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let checker = checker();
        let issued = checker.login("admin", "1234").unwrap();

        let mut parts: Vec<String> = issued.token.split('.').map(str::to_string).collect();
        parts[1] = parts[1].replacen('e', "f", 1);
        let tampered = parts.join(".");
        assert_ne!(tampered, issued.token);
        assert!(matches!(checker.verify(&tampered), Err(AppError::InvalidToken)));

        let foreign = forge(
            &Claims {
                sub: Some("admin".to_string()),
                iat: Utc::now().timestamp(),
                exp: Utc::now().timestamp() + 600,
            },
            b"other-secret",
        );
        assert!(matches!(checker.verify(&foreign), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_token_without_subject_is_rejected() {
        let now = Utc::now().timestamp();
        let token = forge(
            &Claims {
                sub: None,
                iat: now,
                exp: now + 600,
            },
            SECRET,
        );
        assert!(matches!(checker().verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(matches!(
            checker().verify("not-a-token"),
            Err(AppError::InvalidToken)
        ));
    }
}
