mod api;
mod login;
mod ngo;
mod opportunity;
mod user;

pub use self::api::ApiMessage;
pub use self::login::{LoginResponse, NgoProfile};
pub use self::ngo::NgoResponse;
pub use self::opportunity::OpportunityResponse;
pub use self::user::{RoleBreakdown, UserResponse};
