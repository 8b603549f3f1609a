use std::env;

/// Signing secret shared by the token issuer and the bearer checker.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    ///
    /// Environment variables:
    /// - JWT_SECRET: HS256 signing secret (required)
    pub fn from_env() -> Self {
        let secret = env::var("JWT_SECRET").expect("JWT_SECRET must be set");

        Self { secret }
    }
}
