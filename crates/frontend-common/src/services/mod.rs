//! API services shared across screens.

pub mod auth;

pub use auth::AuthApiService;
