//! Request and response types, one struct per endpoint shape.
//!
//! The backend is a duck-typed JSON API; everything is validated into these
//! explicit shapes at the boundary so screens never see undefined fields.

mod apps;
mod auth;
mod providers;

pub use apps::{AppDetails, AppSummary, CreateAppRequest, UpdateAppRequest};
pub use auth::{
    ApiKey, CreateApiKeyRequest, GoogleLoginResponse, LoginRequest, PasswordResetRequest,
    RefreshRequest, RefreshResponse, RegisterRequest, TokenPair, UserProfile,
};
pub use providers::{
    AiModel, CreateProviderRequest, ModelsResponse, ProviderKey, UpdateProviderRequest,
};
