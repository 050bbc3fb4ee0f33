use std::env;

/// Bootstrap administrator account, seeded into the user directory at
/// startup so a fresh deployment has a way to log in.
#[derive(Clone, Debug)]
pub struct AdminConfig {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl AdminConfig {
    /// Returns the bootstrap admin account when `ADMIN_USERNAME`,
    /// `ADMIN_EMAIL` and `ADMIN_PASSWORD` are all set, `None` otherwise.
    /// There is no default password.
    pub fn from_env() -> Option<Self> {
        let username = env::var("ADMIN_USERNAME").ok()?;
        let email = env::var("ADMIN_EMAIL").ok()?;
        let password = env::var("ADMIN_PASSWORD").ok()?;

        Some(Self {
            username,
            email,
            password,
        })
    }
}
