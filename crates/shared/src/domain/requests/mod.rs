mod auth;
mod ngo;
mod opportunity;
mod reset_password;

pub use self::auth::{LoginRequest, RegisterRequest};
pub use self::ngo::{NgoRegistrationRequest, UpdateNgoStatusRequest};
pub use self::opportunity::CreateOpportunityRequest;
pub use self::reset_password::{ForgotPasswordRequest, ResetPasswordRequest};
