use std::sync::Arc;

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use poem::Request;
use poem_openapi::SecurityScheme;
use uuid::Uuid;

use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;
use security::Claims;

use crate::config::jwt_config::JwtConfig;

/// Decodes an HS256 session token and extracts the user identifier it
/// carries. Expiry is validated here; the account itself is checked by the
/// bearer checker against the store.
fn decode_user_id(token: &str, secret: &str) -> Result<Uuid, String> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    Uuid::parse_str(&token_data.claims.sub).map_err(|e| format!("auth.invalid_subject: {e}"))
}

/// Returns true when the caller holds at least one of the required roles.
/// An empty requirement set means the endpoint only needs authentication.
pub fn has_required_role(user: &User, required: &[&str]) -> bool {
    required.is_empty() || required.iter().any(|role| user.has_role(role))
}

/// JWT Bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "jwt_bearer_checker")]
pub struct JwtBearer(pub User);

async fn jwt_bearer_checker(req: &Request, bearer: poem_openapi::auth::Bearer) -> Option<User> {
    let config = req.data::<JwtConfig>()?;
    let repository = req.data::<Arc<dyn UserRepository>>()?;

    let user_id = match decode_user_id(&bearer.token, &config.secret) {
        Ok(user_id) => user_id,
        Err(e) => {
            tracing::warn!("Bearer auth failed: {e}");
            return None;
        }
    };

    let user = match repository.get_by_id(user_id).await {
        Ok(user) => user,
        Err(e) => {
            tracing::warn!("Bearer auth failed, user lookup: {e}");
            return None;
        }
    };

    if !user.is_active {
        tracing::warn!("Bearer auth rejected, inactive user: {user_id}");
        return None;
    }

    Some(user)
}
