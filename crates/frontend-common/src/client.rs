//! Client construction and the authorized API wrapper.
//!
//! The access token is read fresh from the [`SessionStore`] every time an
//! authorized client is built, never cached across calls. Policy for a
//! missing token at request time: fail the call and trip the unauthorized
//! handler before anything is sent (see DESIGN.md).

use crate::auth::unauthorized::notify_unauthorized;
use crate::config::api_base_url;
use crate::session::SessionStore;
use gateway_client::types::{
    ApiKey, AppDetails, AppSummary, CreateApiKeyRequest, CreateAppRequest,
    CreateProviderRequest, ModelsResponse, PasswordResetRequest, ProviderKey,
    UpdateAppRequest, UpdateProviderRequest, UserProfile,
};
use gateway_client::{AuthenticatedGatewayClient, ClientError, PublicGatewayClient, TypedClientBuilder};
use once_cell::sync::Lazy;
use std::future::Future;
use std::sync::Mutex;

/// Global public client instance
static PUBLIC_CLIENT: Lazy<Mutex<Option<PublicGatewayClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the public client instance (for unauthenticated endpoints)
pub fn public_client() -> Result<PublicGatewayClient, ClientError> {
    let mut client_lock = PUBLIC_CLIENT
        .lock()
        .expect("Failed to acquire public client lock");

    if let Some(client) = client_lock.as_ref() {
        Ok(client.clone())
    } else {
        let client = TypedClientBuilder::new()
            .base_url(api_base_url())
            .build_public()?;
        *client_lock = Some(client.clone());
        Ok(client)
    }
}

/// Authenticated API handle that reacts to authorization failures.
///
/// Any 401-class response clears the whole session, notifies the
/// unauthorized handler, and still returns the error so the caller's own
/// error path observes a failure.
#[derive(Clone)]
pub struct AuthorizedApi {
    inner: AuthenticatedGatewayClient,
}

impl AuthorizedApi {
    /// Build from the current session, reading the access token at call time.
    pub fn from_session() -> Result<Self, ClientError> {
        let store = SessionStore::new()
            .ok_or_else(|| ClientError::Configuration("browser storage unavailable".into()))?;

        match store.access_token() {
            Some(token) => {
                let inner = TypedClientBuilder::new()
                    .base_url(api_base_url())
                    .build_authenticated(token)?;
                Ok(Self { inner })
            }
            None => {
                log::warn!("no access token in session; redirecting to login");
                notify_unauthorized();
                Err(ClientError::AuthenticationFailed(
                    "no access token in session".into(),
                ))
            }
        }
    }

    /// Get a reference to the inner client (use sparingly - prefer the
    /// wrapped methods so 401 handling stays uniform).
    pub fn inner(&self) -> &AuthenticatedGatewayClient {
        &self.inner
    }

    async fn guarded<T>(
        &self,
        fut: impl Future<Output = Result<T, ClientError>>,
    ) -> Result<T, ClientError> {
        match fut.await {
            Err(error) if error.is_auth_failure() => {
                log::warn!("authorization failure: {error}; forcing logout");
                if let Some(store) = SessionStore::new() {
                    store.clear_all();
                }
                notify_unauthorized();
                Err(error)
            }
            other => other,
        }
    }

    pub async fn profile(&self) -> Result<UserProfile, ClientError> {
        self.guarded(self.inner.profile()).await
    }

    pub async fn reset_password(&self, req: &PasswordResetRequest) -> Result<(), ClientError> {
        self.guarded(self.inner.reset_password(req)).await
    }

    pub async fn api_keys(&self) -> Result<Vec<ApiKey>, ClientError> {
        self.guarded(self.inner.api_keys()).await
    }

    pub async fn create_api_key(&self, req: &CreateApiKeyRequest) -> Result<ApiKey, ClientError> {
        self.guarded(self.inner.create_api_key(req)).await
    }

    pub async fn revoke_api_key(&self, key_id: &str) -> Result<(), ClientError> {
        self.guarded(self.inner.revoke_api_key(key_id)).await
    }

    pub async fn providers(&self) -> Result<Vec<ProviderKey>, ClientError> {
        self.guarded(self.inner.providers()).await
    }

    pub async fn create_provider(
        &self,
        req: &CreateProviderRequest,
    ) -> Result<ProviderKey, ClientError> {
        self.guarded(self.inner.create_provider(req)).await
    }

    pub async fn update_provider(
        &self,
        provider_id: &str,
        req: &UpdateProviderRequest,
    ) -> Result<ProviderKey, ClientError> {
        self.guarded(self.inner.update_provider(provider_id, req)).await
    }

    pub async fn delete_provider(&self, provider_id: &str) -> Result<(), ClientError> {
        self.guarded(self.inner.delete_provider(provider_id)).await
    }

    pub async fn models(
        &self,
        name: Option<&str>,
        provider: Option<&str>,
    ) -> Result<ModelsResponse, ClientError> {
        self.guarded(self.inner.models(name, provider)).await
    }

    pub async fn apps(&self) -> Result<Vec<AppSummary>, ClientError> {
        self.guarded(self.inner.apps()).await
    }

    pub async fn app(&self, app_id: &str) -> Result<AppDetails, ClientError> {
        self.guarded(self.inner.app(app_id)).await
    }

    pub async fn create_app(&self, req: &CreateAppRequest) -> Result<AppSummary, ClientError> {
        self.guarded(self.inner.create_app(req)).await
    }

    pub async fn update_app(
        &self,
        app_id: &str,
        req: &UpdateAppRequest,
    ) -> Result<AppSummary, ClientError> {
        self.guarded(self.inner.update_app(app_id, req)).await
    }

    pub async fn delete_app(&self, app_id: &str) -> Result<(), ClientError> {
        self.guarded(self.inner.delete_app(app_id)).await
    }
}
