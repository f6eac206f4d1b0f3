//! Typed HTTP client for the LLM Gateway REST API.
//!
//! Compiles both natively and on wasm32. The wasm frontend crates wrap these
//! clients with session storage and redirect handling; native code (and the
//! integration tests) use them directly.

pub mod client;
pub mod error;
pub mod token;
pub mod types;

pub use client::{AuthenticatedGatewayClient, PublicGatewayClient, TypedClientBuilder};
pub use error::ClientError;
