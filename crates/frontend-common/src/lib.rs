pub mod auth;
pub mod client;
pub mod config;
pub mod services;
pub mod session;

pub use auth::guard::use_session_guard;
pub use client::{public_client, AuthorizedApi};
pub use config::AuthConfig;
pub use session::SessionStore;
