//! Authentication API service

use crate::auth::unauthorized::redirect_to_login;
use crate::client::public_client;
use crate::session::SessionStore;
use gateway_client::types::{LoginRequest, RegisterRequest, TokenPair};

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }

    /// Sign in with email and password. The backend treats the email as the
    /// username.
    pub async fn sign_in(&self, email: String, password: String) -> Result<TokenPair, String> {
        let client = public_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .login(&LoginRequest {
                username: email,
                password,
            })
            .await
            .map_err(|e| e.to_string())
    }

    /// Create a new account.
    pub async fn sign_up(
        &self,
        firstname: String,
        lastname: String,
        email: String,
        password: String,
    ) -> Result<TokenPair, String> {
        let client = public_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .register(&RegisterRequest {
                firstname,
                lastname,
                username: email.clone(),
                email,
                password,
            })
            .await
            .map_err(|e| e.to_string())
    }

    /// Fetch the Google OAuth redirect URL.
    pub async fn google_login_url(&self) -> Result<String, String> {
        let client = public_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .google_login()
            .await
            .map(|response| response.oauth_url)
            .map_err(|e| e.to_string())
    }

    /// Exchange a Google OAuth authorization code for a token pair.
    pub async fn exchange_google_code(&self, code: &str) -> Result<TokenPair, String> {
        let client = public_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client.google_callback(code).await.map_err(|e| e.to_string())
    }

    /// Persist a freshly issued token pair. Returns false when storage is
    /// unavailable.
    pub fn store_tokens(&self, tokens: &TokenPair) -> bool {
        match SessionStore::new() {
            Some(store) => {
                store.set_tokens(tokens);
                true
            }
            None => false,
        }
    }

    /// Wipe the session and navigate to the sign-in screen. No further
    /// authenticated call is possible afterwards in this session.
    pub fn logout(&self) {
        if let Some(store) = SessionStore::new() {
            store.clear_all();
        }
        redirect_to_login();
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}

/// Password rules surfaced inline on the auth and settings forms.
pub fn validate_password(password: &str) -> Vec<String> {
    let mut errors = Vec::new();

    if password.len() < 8 {
        errors.push("Password must be at least 8 characters long".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        errors.push("Password must contain at least one uppercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        errors.push("Password must contain at least one lowercase letter".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        errors.push("Password must contain at least one number".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::validate_password;

    #[test]
    fn accepts_a_conforming_password() {
        assert!(validate_password("Sup3rsecret").is_empty());
    }

    #[test]
    fn reports_each_missing_rule() {
        let errors = validate_password("short");
        assert_eq!(errors.len(), 3); // length, uppercase, digit

        assert_eq!(validate_password("alllowercase1").len(), 1);
        assert_eq!(validate_password("ALLUPPERCASE1").len(), 1);
        assert_eq!(validate_password("NoDigitsHere").len(), 1);
    }
}
