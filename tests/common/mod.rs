use questlog::modules::campaigns::store::CampaignStore;
use questlog::modules::users::directory::UserDirectory;
use questlog::modules::users::model::User;
use questlog::state::AppState;
use questlog_auth::{Claims, TokenCodec, UserRole};
use questlog_config::CorsConfig;
use questlog_core::hash_password;
use uuid::Uuid;

pub const TEST_JWT_SECRET: &[u8] = b"integration-test-secret-at-least-32-chars";

/// Builds an app state with empty stores and a fixed test signing secret.
/// Clones of the state share the same directory and campaign store.
pub fn test_state() -> AppState {
    AppState {
        token_codec: TokenCodec::new(TEST_JWT_SECRET, 3600),
        users: UserDirectory::new(),
        campaigns: CampaignStore::new(),
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:5173".to_string()],
        },
    }
}

#[allow(dead_code)]
pub struct TestUser {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

pub fn create_test_user(state: &AppState, role: UserRole) -> TestUser {
    let username = generate_unique_username();
    let email = generate_unique_email();
    let password = "testpass123";
    let hashed = hash_password(password).unwrap();

    let user = state
        .users
        .insert(User::new(username.clone(), email.clone(), role, hashed))
        .unwrap();

    TestUser {
        id: user.id,
        username,
        email,
        password: password.to_string(),
        role,
    }
}

pub fn generate_unique_username() -> String {
    format!("user-{}", Uuid::new_v4())
}

pub fn generate_unique_email() -> String {
    format!("test-{}@test.com", Uuid::new_v4())
}

/// Issues a valid token for the user through the state's own codec.
pub fn token_for(state: &AppState, user: &TestUser) -> String {
    state
        .token_codec
        .create_access_token(user.id, &user.username, &user.email, user.role)
        .unwrap()
}

/// Signs a token with the test secret whose expiry is already in the past.
#[allow(dead_code)]
pub fn expired_token_for(user: &TestUser) -> String {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        id: user.id,
        username: user.username.clone(),
        email: user.email.clone(),
        role: user.role,
        iat: now - 7200,
        exp: now - 3600,
    };

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .unwrap()
}
