mod auth;
mod credential_store;
mod interceptor;
mod resource;

pub use self::auth::{AuthClientTrait, DynAuthClient};
pub use self::credential_store::{CredentialStoreTrait, DynCredentialStore};
pub use self::interceptor::{DynRequestInterceptor, RequestInterceptor};
pub use self::resource::{DynResourceClient, ResourceClientTrait};
