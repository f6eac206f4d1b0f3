//! Type-safe API clients that enforce authentication requirements at compile time.
//!
//! [`PublicGatewayClient`] covers the unauthenticated auth endpoints (sign-in,
//! sign-up, OAuth, token refresh); [`AuthenticatedGatewayClient`] attaches a
//! bearer access token to every request and covers the rest of the API.

use crate::error::ClientError;
use crate::types::{
    ApiKey, AppDetails, AppSummary, CreateApiKeyRequest, CreateAppRequest,
    CreateProviderRequest, GoogleLoginResponse, LoginRequest, ModelsResponse,
    PasswordResetRequest, ProviderKey, RefreshRequest, RefreshResponse, RegisterRequest,
    TokenPair, UpdateAppRequest, UpdateProviderRequest, UserProfile,
};
use reqwest::{Client, ClientBuilder, Method, header};
use std::time::Duration;

const USER_AGENT: &str = "gateway-client/0.1.0";

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    #[cfg(target_arch = "wasm32")]
    {
        let _ = timeout; // Timeouts not supported on WASM
        Ok(ClientBuilder::new().user_agent(USER_AGENT).build()?)
    }
}

async fn decode_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}

async fn expect_success(response: reqwest::Response) -> Result<(), ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let message = response.text().await.unwrap_or_else(|_| status.to_string());
        Err(ClientError::from_status(status, message))
    }
}

/// Client for public endpoints that don't require authentication.
#[derive(Clone)]
pub struct PublicGatewayClient {
    client: Client,
    base_url: String,
}

impl PublicGatewayClient {
    /// Create a new public client.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, url)
    }

    /// Execute a request and handle common errors.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        decode_response(request.send().await?).await
    }

    /// Sign in with username/password.
    pub async fn login(&self, req: &LoginRequest) -> Result<TokenPair, ClientError> {
        let request = self.request(Method::POST, "/api/auth/login/").json(req);
        self.execute(request).await
    }

    /// Register a new account.
    pub async fn register(&self, req: &RegisterRequest) -> Result<TokenPair, ClientError> {
        let request = self.request(Method::POST, "/api/auth/register/").json(req);
        self.execute(request).await
    }

    /// Fetch the Google OAuth redirect URL.
    pub async fn google_login(&self) -> Result<GoogleLoginResponse, ClientError> {
        let request = self.request(Method::GET, "/api/auth/google/login/");
        self.execute(request).await
    }

    /// Exchange a Google OAuth authorization code for tokens.
    pub async fn google_callback(&self, code: &str) -> Result<TokenPair, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/google/login/callback/")
            .query(&[("code", code)]);
        self.execute(request).await
    }

    /// Exchange a refresh token for a new access token.
    pub async fn refresh(&self, refresh_token: &str) -> Result<RefreshResponse, ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/token/refresh/")
            .json(&RefreshRequest {
                refresh: refresh_token.to_string(),
            });
        self.execute(request).await
    }

    /// Attach an access token to get an authenticated client.
    pub fn authenticate(self, access_token: impl Into<String>) -> AuthenticatedGatewayClient {
        AuthenticatedGatewayClient {
            client: self.client,
            base_url: self.base_url,
            access_token: access_token.into(),
        }
    }
}

/// Client for endpoints that require a bearer access token.
#[derive(Clone)]
pub struct AuthenticatedGatewayClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl AuthenticatedGatewayClient {
    /// Create a new authenticated client.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, access_token, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client: build_http_client(timeout)?,
            base_url,
            access_token: access_token.into(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder with the bearer credential attached.
    pub fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client
            .request(method, url)
            .header(header::AUTHORIZATION, format!("Bearer {}", self.access_token))
    }

    /// Execute a request and handle common errors.
    pub async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        decode_response(request.send().await?).await
    }

    /// Execute a request whose success response carries no useful body
    /// (DELETE endpoints return 204).
    pub async fn execute_empty(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ClientError> {
        expect_success(request.send().await?).await
    }

    /// Fetch the signed-in user's profile.
    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        let request = self.request(Method::GET, "/api/auth/profile/");
        self.execute(request).await
    }

    /// Change the account password.
    pub async fn reset_password(
        &self,
        req: &PasswordResetRequest,
    ) -> Result<(), ClientError> {
        let request = self
            .request(Method::POST, "/api/auth/password/reset/")
            .json(req);
        self.execute_empty(request).await
    }

    /// List gateway API keys. The `key` field is absent in list responses.
    pub async fn api_keys(&self) -> Result<Vec<ApiKey>, ClientError> {
        let request = self.request(Method::GET, "/api/auth/apikey/");
        self.execute(request).await
    }

    /// Create a gateway API key; the response carries the full key once.
    pub async fn create_api_key(&self, req: &CreateApiKeyRequest) -> Result<ApiKey, ClientError> {
        let request = self.request(Method::POST, "/api/auth/apikey/").json(req);
        self.execute(request).await
    }

    /// Revoke a gateway API key.
    pub async fn revoke_api_key(&self, key_id: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/api/auth/apikey/{key_id}/"));
        self.execute_empty(request).await
    }

    /// List stored provider credentials.
    pub async fn providers(&self) -> Result<Vec<ProviderKey>, ClientError> {
        let request = self.request(Method::GET, "/api/provider/");
        self.execute(request).await
    }

    /// Store a new provider credential.
    pub async fn create_provider(
        &self,
        req: &CreateProviderRequest,
    ) -> Result<ProviderKey, ClientError> {
        let request = self.request(Method::POST, "/api/provider/").json(req);
        self.execute(request).await
    }

    /// Fetch a single provider credential.
    pub async fn provider(&self, provider_id: &str) -> Result<ProviderKey, ClientError> {
        let request = self.request(Method::GET, &format!("/api/provider/{provider_id}/"));
        self.execute(request).await
    }

    /// Update a provider credential in place.
    pub async fn update_provider(
        &self,
        provider_id: &str,
        req: &UpdateProviderRequest,
    ) -> Result<ProviderKey, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/api/provider/{provider_id}/"))
            .json(req);
        self.execute(request).await
    }

    /// Delete a provider credential.
    pub async fn delete_provider(&self, provider_id: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/api/provider/{provider_id}/"));
        self.execute_empty(request).await
    }

    /// Query the model catalog, optionally filtered by name and provider.
    pub async fn models(
        &self,
        name: Option<&str>,
        provider: Option<&str>,
    ) -> Result<ModelsResponse, ClientError> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(name) = name {
            query.push(("name", name));
        }
        if let Some(provider) = provider {
            query.push(("provider", provider));
        }
        let request = self
            .request(Method::GET, "/api/provider/ai/models/")
            .query(&query);
        self.execute(request).await
    }

    /// List configured apps.
    pub async fn apps(&self) -> Result<Vec<AppSummary>, ClientError> {
        let request = self.request(Method::GET, "/api/apps/");
        self.execute(request).await
    }

    /// Fetch a single app with its full configuration.
    pub async fn app(&self, app_id: &str) -> Result<AppDetails, ClientError> {
        let request = self.request(Method::GET, &format!("/api/apps/{app_id}/"));
        self.execute(request).await
    }

    /// Create an app.
    pub async fn create_app(&self, req: &CreateAppRequest) -> Result<AppSummary, ClientError> {
        let request = self.request(Method::POST, "/api/apps/").json(req);
        self.execute(request).await
    }

    /// Update an app.
    pub async fn update_app(
        &self,
        app_id: &str,
        req: &UpdateAppRequest,
    ) -> Result<AppSummary, ClientError> {
        let request = self
            .request(Method::PUT, &format!("/api/apps/{app_id}/"))
            .json(req);
        self.execute(request).await
    }

    /// Delete an app.
    pub async fn delete_app(&self, app_id: &str) -> Result<(), ClientError> {
        let request = self.request(Method::DELETE, &format!("/api/apps/{app_id}/"));
        self.execute_empty(request).await
    }

    /// Create a public client sharing this client's connection pool.
    pub fn to_public(&self) -> PublicGatewayClient {
        PublicGatewayClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
        }
    }
}

/// Type-safe builder that creates the appropriate client type.
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
        }
    }

    /// Set the base URL.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a public client.
    pub fn build_public(self) -> Result<PublicGatewayClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        PublicGatewayClient::new_with_timeout(base_url, self.timeout)
    }

    /// Build an authenticated client.
    pub fn build_authenticated(
        self,
        access_token: impl Into<String>,
    ) -> Result<AuthenticatedGatewayClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;
        AuthenticatedGatewayClient::new_with_timeout(base_url, access_token, self.timeout)
    }
}

impl Default for TypedClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
