use std::env;

#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry: i64,
}

impl JwtConfig {
    /// Loads the JWT configuration from the environment.
    ///
    /// `JWT_ACCESS_EXPIRY` is the access token lifetime in seconds.
    ///
    /// # Panics
    ///
    /// Panics when `JWT_SECRET` is not set. The signing secret has no safe
    /// default, so startup must fail loudly instead of issuing tokens with
    /// a well-known key.
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set"),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3600), // 1 hour
        }
    }
}
