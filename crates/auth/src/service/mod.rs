mod auth;
mod resource;

pub use self::auth::{AuthService, AuthServiceDeps};
pub use self::resource::ResourceService;
