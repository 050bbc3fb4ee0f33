//! JWT (JSON Web Token) signing and verification.
//!
//! This module provides the [`TokenCodec`], which issues and verifies the
//! HS256 access tokens used for API authentication. The codec is built once
//! from [`JwtConfig`] at startup and carries its keys and token lifetime;
//! nothing here reads ambient configuration.
//!
//! # Token structure
//!
//! Tokens are standard three-part JWTs (`header.payload.signature`, each
//! part base64url-encoded) and interoperate with any HS256 verifier that
//! shares the secret. The payload is the [`Claims`] identity set.
//!
//! # Failure behavior
//!
//! Verification failures are deliberately indistinguishable: malformed
//! input, a bad signature and an expired token all produce the same
//! unauthorized error, so callers cannot probe for why a token was
//! rejected.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use questlog_config::JwtConfig;
use questlog_core::AppError;

use crate::claims::{Claims, UserRole};

/// Signs and verifies access tokens.
#[derive(Clone)]
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl TokenCodec {
    /// Builds a codec from a raw secret and an access token lifetime in
    /// seconds.
    pub fn new(secret: &[u8], access_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            access_token_expiry,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(config.secret.as_bytes(), config.access_token_expiry)
    }

    /// Issues an access token for the given identity.
    ///
    /// Stamps `iat` with the current time and `exp` with the configured
    /// lifetime. Two calls in different seconds therefore produce
    /// different tokens for the same user.
    ///
    /// # Errors
    ///
    /// Returns a 500 error if token encoding fails.
    pub fn create_access_token(
        &self,
        user_id: Uuid,
        username: &str,
        email: &str,
        role: UserRole,
    ) -> Result<String, AppError> {
        let now = Utc::now().timestamp() as usize;
        let exp = now + self.access_token_expiry as usize;

        let claims = Claims {
            id: user_id,
            username: username.to_string(),
            email: email.to_string(),
            role,
            iat: now,
            exp,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal_error(format!("Failed to create token: {}", e)))
    }

    /// Verifies an access token and returns the embedded claims.
    ///
    /// Checks the signature and the expiry with zero clock leeway. Never
    /// panics, whatever the input.
    ///
    /// # Errors
    ///
    /// Every failure mode returns the same `401 Invalid or expired token`.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| AppError::unauthorized("Invalid or expired token"))
    }
}

impl std::fmt::Debug for TokenCodec {
    // never print key material
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCodec")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-characters-long";

    fn test_codec() -> TokenCodec {
        TokenCodec::new(TEST_SECRET, 3600)
    }

    #[test]
    fn test_create_access_token_success() {
        let codec = test_codec();
        let result = codec.create_access_token(
            Uuid::new_v4(),
            "morgana",
            "morgana@example.com",
            UserRole::Gamemaster,
        );

        assert!(result.is_ok());
        let token = result.unwrap();
        assert!(!token.is_empty());
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_verify_token_roundtrip() {
        let codec = test_codec();
        let user_id = Uuid::new_v4();

        let token = codec
            .create_access_token(user_id, "rook", "rook@example.com", UserRole::Player)
            .unwrap();
        let claims = codec.verify_token(&token).unwrap();

        assert_eq!(claims.id, user_id);
        assert_eq!(claims.username, "rook");
        assert_eq!(claims.email, "rook@example.com");
        assert_eq!(claims.role, UserRole::Player);
        assert!(claims.exp > claims.iat);
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_all_roles_roundtrip() {
        let codec = test_codec();
        let user_id = Uuid::new_v4();

        for role in [UserRole::Admin, UserRole::Gamemaster, UserRole::Player] {
            let token = codec
                .create_access_token(user_id, "any", "any@example.com", role)
                .unwrap();
            let claims = codec.verify_token(&token).unwrap();
            assert_eq!(claims.role, role);
        }
    }

    #[test]
    fn test_verify_token_invalid() {
        let codec = test_codec();
        assert!(codec.verify_token("invalid-token").is_err());
    }

    #[test]
    fn test_verify_token_empty() {
        let codec = test_codec();
        assert!(codec.verify_token("").is_err());
    }

    #[test]
    fn test_verify_token_malformed() {
        let codec = test_codec();
        let malformed_tokens = vec![
            "not.enough.parts",
            "too.many.parts.here.extra",
            "!!!.invalid.chars",
            "header.payload.",
            ".payload.signature",
        ];

        for token in malformed_tokens {
            assert!(codec.verify_token(token).is_err(), "accepted: {}", token);
        }
    }

    #[test]
    fn test_verify_token_wrong_secret() {
        let codec = test_codec();
        let other = TokenCodec::new(b"different-secret-key-at-least-32-characters", 3600);

        let token = codec
            .create_access_token(Uuid::new_v4(), "rook", "rook@example.com", UserRole::Player)
            .unwrap();

        assert!(other.verify_token(&token).is_err());
    }

    #[test]
    fn test_verify_token_expired() {
        let codec = test_codec();
        let now = Utc::now().timestamp() as usize;

        let claims = Claims {
            id: Uuid::new_v4(),
            username: "rook".to_string(),
            email: "rook@example.com".to_string(),
            role: UserRole::Player,
            iat: now - 7200,
            exp: now - 3600,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(TEST_SECRET),
        )
        .unwrap();

        assert!(codec.verify_token(&token).is_err());
    }

    #[test]
    fn test_verify_token_tampered_payload() {
        let codec = test_codec();
        let token = codec
            .create_access_token(Uuid::new_v4(), "rook", "rook@example.com", UserRole::Player)
            .unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        let payload = URL_SAFE_NO_PAD.decode(parts[1]).unwrap();
        let payload = String::from_utf8(payload).unwrap();
        let escalated = payload.replace(r#""role":"player""#, r#""role":"admin""#);
        assert_ne!(payload, escalated);

        let forged = format!(
            "{}.{}.{}",
            parts[0],
            URL_SAFE_NO_PAD.encode(escalated.as_bytes()),
            parts[2]
        );

        assert!(codec.verify_token(&forged).is_err());
    }

    #[test]
    fn test_failures_are_indistinguishable() {
        let codec = test_codec();
        let other = TokenCodec::new(b"different-secret-key-at-least-32-characters", 3600);
        let now = Utc::now().timestamp() as usize;

        let wrong_secret = other
            .create_access_token(Uuid::new_v4(), "rook", "rook@example.com", UserRole::Player)
            .unwrap();

        let expired_claims = Claims {
            id: Uuid::new_v4(),
            username: "rook".to_string(),
            email: "rook@example.com".to_string(),
            role: UserRole::Player,
            iat: now - 7200,
            exp: now - 3600,
        };
        let expired = encode(
            &Header::default(),
            &expired_claims,
            &EncodingKey::from_secret(TEST_SECRET),
        )
        .unwrap();

        for token in ["garbage", &wrong_secret, &expired] {
            let err = codec.verify_token(token).unwrap_err();
            assert_eq!(err.status.as_u16(), 401);
            assert_eq!(err.message, "Invalid or expired token");
        }
    }

    #[test]
    fn test_tokens_differ_across_instants() {
        let codec = test_codec();
        let user_id = Uuid::new_v4();

        let first = codec
            .create_access_token(user_id, "rook", "rook@example.com", UserRole::Player)
            .unwrap();
        std::thread::sleep(std::time::Duration::from_millis(1100));
        let second = codec
            .create_access_token(user_id, "rook", "rook@example.com", UserRole::Player)
            .unwrap();

        assert_ne!(first, second);

        let first_claims = codec.verify_token(&first).unwrap();
        let second_claims = codec.verify_token(&second).unwrap();
        assert_eq!(first_claims.id, second_claims.id);
        assert!(first_claims.iat < second_claims.iat);
    }

    #[test]
    fn test_token_verifies_with_standard_validation() {
        let codec = test_codec();
        let token = codec
            .create_access_token(Uuid::new_v4(), "rook", "rook@example.com", UserRole::Player)
            .unwrap();

        let decoded = decode::<Claims>(
            &token,
            &DecodingKey::from_secret(TEST_SECRET),
            &Validation::default(),
        );

        assert!(decoded.is_ok());
        assert_eq!(decoded.unwrap().claims.username, "rook");
    }

    #[test]
    fn test_create_token_different_users_different_tokens() {
        let codec = test_codec();
        let user_id1 = Uuid::new_v4();
        let user_id2 = Uuid::new_v4();

        let token1 = codec
            .create_access_token(user_id1, "ash", "ash@example.com", UserRole::Player)
            .unwrap();
        let token2 = codec
            .create_access_token(user_id2, "bram", "bram@example.com", UserRole::Player)
            .unwrap();

        assert_ne!(token1, token2);

        let claims1 = codec.verify_token(&token1).unwrap();
        let claims2 = codec.verify_token(&token2).unwrap();
        assert_eq!(claims1.id, user_id1);
        assert_eq!(claims2.id, user_id2);
    }
}
