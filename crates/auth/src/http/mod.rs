mod client;
mod interceptor;
mod response;

pub use self::client::{ApiClient, ApiClientBuilder};
pub use self::interceptor::BearerInterceptor;
pub use self::response::{ApiFailure, into_service_error};
