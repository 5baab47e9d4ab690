//! Client-side session and authorization core: credential storage, the
//! authenticated backend client, post-login routing and per-navigation
//! access checks.

pub mod abstract_trait;
pub mod cache;
pub mod di;
pub mod guard;
pub mod http;
pub mod router;
pub mod service;
