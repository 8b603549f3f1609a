use business::domain::user::errors::AuthError;
use business::domain::user::services::TokenIssuer;
use chrono::{Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Session tokens are valid for two hours from issuance.
pub const TOKEN_TTL_HOURS: i64 = 2;

/// Token payload: the user identifier and the time box, nothing else.
/// The rest-api gatekeeper decodes this same shape.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

pub struct JwtTokenIssuer {
    secret: String,
}

impl JwtTokenIssuer {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }
}

impl TokenIssuer for JwtTokenIssuer {
    fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|_| AuthError::TokenIssueFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

    #[test]
    fn should_encode_only_the_user_id_with_two_hour_expiry() {
        let issuer = JwtTokenIssuer::new("test-secret");
        let user_id = Uuid::new_v4();

        let token = issuer.issue(user_id).unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"test-secret"),
            &Validation::new(Algorithm::HS256),
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, user_id.to_string());
        assert_eq!(decoded.claims.exp - decoded.claims.iat, 2 * 60 * 60);
    }

    #[test]
    fn should_not_validate_with_a_different_secret() {
        let issuer = JwtTokenIssuer::new("test-secret");
        let token = issuer.issue(Uuid::new_v4()).unwrap();

        let result = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(b"other-secret"),
            &Validation::new(Algorithm::HS256),
        );

        assert!(result.is_err());
    }
}
