pub mod navigation;
pub mod requests;
pub mod responses;
pub mod role;
pub mod session;
