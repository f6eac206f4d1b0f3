//! Frontend configuration

/// Authentication configuration
pub struct AuthConfig;

impl AuthConfig {
    /// Storage key for the access token
    pub const ACCESS_TOKEN_KEY: &'static str = "access_token";

    /// Storage key for the refresh token
    pub const REFRESH_TOKEN_KEY: &'static str = "refresh_token";

    /// Period of the recurring session re-check
    pub const TOKEN_CHECK_INTERVAL_MS: u32 = 60_000; // 1 minute

    /// Route of the sign-in screen
    pub const LOGIN_PATH: &'static str = "/auth";
}

/// Base URL for API calls. A compile-time override (`GATEWAY_API_URL`) wins;
/// otherwise the backend is assumed to live on the page's own origin.
pub fn api_base_url() -> String {
    if let Some(url) = option_env!("GATEWAY_API_URL") {
        return url.to_string();
    }

    if let Some(window) = web_sys::window() {
        if let Ok(origin) = window.location().origin() {
            return origin;
        }
    }

    // Fall back to relative URLs
    String::new()
}
