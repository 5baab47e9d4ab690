pub mod guard;
pub mod validate;
