pub mod auth;
pub mod campaigns;
pub mod users;

pub use self::auth::model::LoginRequest;
pub use self::users::model::User;
