use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Tokens are valid for five minutes after issuance.
pub const TOKEN_TTL_SECONDS: i64 = 5 * 60;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String, // Employee email
    pub exp: i64,    // Expiration timestamp
}

impl Claims {
    pub fn new(email: &str, issued_at: DateTime<Utc>) -> Self {
        Claims {
            sub: email.to_string(),
            exp: (issued_at + Duration::seconds(TOKEN_TTL_SECONDS)).timestamp(),
        }
    }
}

pub fn generate_token(
    secret: &str,
    email: &str,
    issued_at: DateTime<Utc>,
) -> Result<String, jsonwebtoken::errors::Error> {
    encode(
        &Header::new(Algorithm::HS256),
        &Claims::new(email, issued_at),
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

pub fn validate_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
}

/// Pulls the token out of an `Authorization: Bearer <token>` header value.
pub fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    match (parts.next(), parts.next()) {
        (Some(scheme), Some(token)) if scheme.eq_ignore_ascii_case("bearer") => Some(token),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test_secret";

    #[test]
    fn token_carries_subject_and_five_minute_expiry() {
        let now = Utc::now();
        let token = generate_token(SECRET, "suzuki@example.com", now).unwrap();
        let claims = validate_token(SECRET, &token).unwrap();
        assert_eq!(claims.sub, "suzuki@example.com");
        assert_eq!(claims.exp - now.timestamp(), 300);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = generate_token(SECRET, "a@example.com", Utc::now()).unwrap();
        assert!(validate_token("other_secret", &token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let issued = Utc::now() - Duration::minutes(30);
        let token = generate_token(SECRET, "a@example.com", issued).unwrap();
        assert!(validate_token(SECRET, &token).is_err());
    }

    #[test]
    fn parses_bearer_header() {
        assert_eq!(bearer_token("Bearer abc.def"), Some("abc.def"));
        assert_eq!(bearer_token("bearer abc"), Some("abc"));
        assert_eq!(bearer_token("Basic abc"), None);
        assert_eq!(bearer_token("Bearer"), None);
    }
}
