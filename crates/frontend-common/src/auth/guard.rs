//! Session guard hook.
//!
//! `use_session_guard` gates protected screens: on mount it validates the
//! stored access token, refreshes it if expired, fetches the user profile,
//! and then re-validates on a fixed timer for the lifetime of the mount.
//! The guard never surfaces errors to its caller; every failure resolves
//! into a redirect to the sign-in screen. Callers see `None` until the
//! session is fully authenticated, never a partial profile.
//!
//! The check functions take the token store and the refresh call as
//! parameters, so the mount/recheck/refresh orchestration is testable off
//! the browser with an in-memory store.

use crate::auth::unauthorized::redirect_to_login;
use crate::client::{public_client, AuthorizedApi};
use crate::config::AuthConfig;
use crate::session::SessionStore;
use gateway_client::token::{self, session_status, SessionStatus};
use gateway_client::types::{RefreshResponse, UserProfile};
use gateway_client::ClientError;
use gloo::timers::callback::Interval;
use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

enum SessionOutcome {
    Authenticated,
    Redirect,
    /// Another refresh is already in flight; skip this cycle.
    Pending,
}

/// Token access the guard needs from the session. [`SessionStore`] is the
/// real implementation; tests use an in-memory store.
trait GuardStore {
    fn access_token(&self) -> Option<String>;
    fn refresh_token(&self) -> Option<String>;
    fn set_access_token(&self, access: &str);
}

impl GuardStore for SessionStore {
    fn access_token(&self) -> Option<String> {
        SessionStore::access_token(self)
    }

    fn refresh_token(&self) -> Option<String> {
        SessionStore::refresh_token(self)
    }

    fn set_access_token(&self, access: &str) {
        SessionStore::set_access_token(self, access);
    }
}

/// Exchange the refresh token for a new access token and persist it.
/// Absent refresh token, transport failure, or a response without an
/// `access` field all resolve to a redirect.
async fn try_refresh<S, F, Fut>(
    store: &S,
    refresh_gate: &Rc<Cell<bool>>,
    refresh: F,
) -> SessionOutcome
where
    S: GuardStore,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<RefreshResponse, ClientError>>,
{
    let Some(refresh_token) = store.refresh_token() else {
        return SessionOutcome::Redirect;
    };

    // Serialize refresh attempts within this mount; the initial check and
    // the recurring check would otherwise race to rewrite the token.
    if refresh_gate.replace(true) {
        return SessionOutcome::Pending;
    }

    let outcome = match refresh(refresh_token).await {
        Ok(RefreshResponse {
            access: Some(access),
        }) => {
            store.set_access_token(&access);
            SessionOutcome::Authenticated
        }
        Ok(RefreshResponse { access: None }) => {
            log::warn!("refresh response carried no access token");
            SessionOutcome::Redirect
        }
        Err(error) => {
            log::warn!("token refresh failed: {error}");
            SessionOutcome::Redirect
        }
    };

    refresh_gate.set(false);
    outcome
}

/// Mount-time check: a missing access token is terminal for this mount; an
/// expired one goes through refresh.
async fn resolve_mount_session<S, F, Fut>(
    store: &S,
    now_ms: i64,
    refresh_gate: &Rc<Cell<bool>>,
    refresh: F,
) -> SessionOutcome
where
    S: GuardStore,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<RefreshResponse, ClientError>>,
{
    match session_status(store.access_token().as_deref(), now_ms) {
        SessionStatus::Active => SessionOutcome::Authenticated,
        SessionStatus::Missing => SessionOutcome::Redirect,
        SessionStatus::Expired => try_refresh(store, refresh_gate, refresh).await,
    }
}

/// Recurring check: missing and expired both go through refresh-or-redirect.
/// The profile is not re-fetched here.
async fn recheck_session<S, F, Fut>(
    store: &S,
    now_ms: i64,
    refresh_gate: &Rc<Cell<bool>>,
    refresh: F,
) -> SessionOutcome
where
    S: GuardStore,
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<RefreshResponse, ClientError>>,
{
    match session_status(store.access_token().as_deref(), now_ms) {
        SessionStatus::Active => SessionOutcome::Authenticated,
        SessionStatus::Missing | SessionStatus::Expired => {
            try_refresh(store, refresh_gate, refresh).await
        }
    }
}

async fn refresh_via_gateway(refresh_token: String) -> Result<RefreshResponse, ClientError> {
    public_client()?.refresh(&refresh_token).await
}

async fn fetch_profile() -> Option<UserProfile> {
    let api = AuthorizedApi::from_session().ok()?;
    match api.profile().await {
        Ok(profile) => Some(profile),
        Err(error) => {
            log::warn!("failed to fetch profile: {error}");
            None
        }
    }
}

/// Guard hook for protected screens. Returns `None` while the session is
/// being checked and the resolved [`UserProfile`] once authenticated.
#[hook]
pub fn use_session_guard() -> Option<UserProfile> {
    let user = use_state(|| None::<UserProfile>);

    {
        let user = user.clone();
        use_effect_with((), move |_| {
            let refresh_gate = Rc::new(Cell::new(false));

            // Initial check: validate, refresh if needed, then fetch the
            // profile with the (possibly just-refreshed) token.
            {
                let user = user.clone();
                let refresh_gate = refresh_gate.clone();
                spawn_local(async move {
                    let Some(store) = SessionStore::new() else {
                        redirect_to_login();
                        return;
                    };
                    let outcome = resolve_mount_session(
                        &store,
                        token::now_ms(),
                        &refresh_gate,
                        refresh_via_gateway,
                    )
                    .await;
                    match outcome {
                        SessionOutcome::Authenticated => match fetch_profile().await {
                            Some(profile) => user.set(Some(profile)),
                            None => redirect_to_login(),
                        },
                        SessionOutcome::Redirect => redirect_to_login(),
                        SessionOutcome::Pending => {}
                    }
                });
            }

            // Recurring check, cancelled when the guard unmounts.
            let interval = Interval::new(AuthConfig::TOKEN_CHECK_INTERVAL_MS, move || {
                let refresh_gate = refresh_gate.clone();
                spawn_local(async move {
                    let Some(store) = SessionStore::new() else {
                        redirect_to_login();
                        return;
                    };
                    log::debug!("recurring session check");
                    let outcome = recheck_session(
                        &store,
                        token::now_ms(),
                        &refresh_gate,
                        refresh_via_gateway,
                    )
                    .await;
                    if let SessionOutcome::Redirect = outcome {
                        redirect_to_login();
                    }
                });
            });

            move || drop(interval)
        });
    }

    (*user).clone()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;
    use std::cell::RefCell;

    struct FakeStore {
        access: RefCell<Option<String>>,
        refresh: RefCell<Option<String>>,
    }

    impl FakeStore {
        fn new(access: Option<&str>, refresh: Option<&str>) -> Self {
            Self {
                access: RefCell::new(access.map(String::from)),
                refresh: RefCell::new(refresh.map(String::from)),
            }
        }
    }

    impl GuardStore for FakeStore {
        fn access_token(&self) -> Option<String> {
            self.access.borrow().clone()
        }

        fn refresh_token(&self) -> Option<String> {
            self.refresh.borrow().clone()
        }

        fn set_access_token(&self, access: &str) {
            *self.access.borrow_mut() = Some(access.to_string());
        }
    }

    fn expired_token() -> String {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"exp": 1}"#);
        format!("h.{payload}.s")
    }

    fn gate() -> Rc<Cell<bool>> {
        Rc::new(Cell::new(false))
    }

    async fn refuse(_refresh_token: String) -> Result<RefreshResponse, ClientError> {
        panic!("refresh must not be called");
    }

    // Well past exp = 1 second.
    const NOW_MS: i64 = 4_000_000_000_000;

    #[tokio::test]
    async fn missing_access_on_mount_redirects_without_refreshing() {
        let store = FakeStore::new(None, Some("r"));
        let outcome = resolve_mount_session(&store, NOW_MS, &gate(), refuse).await;
        assert!(matches!(outcome, SessionOutcome::Redirect));
    }

    #[tokio::test]
    async fn missing_refresh_token_redirects() {
        let store = FakeStore::new(Some(&expired_token()), None);
        let outcome = resolve_mount_session(&store, NOW_MS, &gate(), refuse).await;
        assert!(matches!(outcome, SessionOutcome::Redirect));
    }

    #[tokio::test]
    async fn refresh_without_access_field_redirects_and_leaves_token() {
        let store = FakeStore::new(Some(&expired_token()), Some("r"));
        let before = store.access_token();
        let outcome = try_refresh(&store, &gate(), |_| async {
            Ok(RefreshResponse { access: None })
        })
        .await;
        assert!(matches!(outcome, SessionOutcome::Redirect));
        assert_eq!(store.access_token(), before);
    }

    #[tokio::test]
    async fn refresh_transport_failure_redirects() {
        let store = FakeStore::new(Some(&expired_token()), Some("r"));
        let outcome = try_refresh(&store, &gate(), |_| async {
            Err(ClientError::Configuration("connection refused".into()))
        })
        .await;
        assert!(matches!(outcome, SessionOutcome::Redirect));
    }

    #[tokio::test]
    async fn successful_refresh_persists_before_proceeding() {
        let store = FakeStore::new(Some(&expired_token()), Some("r"));
        let outcome = resolve_mount_session(&store, NOW_MS, &gate(), |refresh_token| async move {
            assert_eq!(refresh_token, "r");
            Ok(RefreshResponse {
                access: Some("new-access".into()),
            })
        })
        .await;
        assert!(matches!(outcome, SessionOutcome::Authenticated));
        assert_eq!(store.access_token().as_deref(), Some("new-access"));
    }

    #[tokio::test]
    async fn in_flight_refresh_skips_the_cycle() {
        let store = FakeStore::new(Some(&expired_token()), Some("r"));
        let busy = Rc::new(Cell::new(true));
        let outcome = try_refresh(&store, &busy, refuse).await;
        assert!(matches!(outcome, SessionOutcome::Pending));
    }

    #[tokio::test]
    async fn recurring_check_refreshes_a_missing_access_token() {
        let store = FakeStore::new(None, Some("r"));
        let outcome = recheck_session(&store, NOW_MS, &gate(), |_| async {
            Ok(RefreshResponse {
                access: Some("revived".into()),
            })
        })
        .await;
        assert!(matches!(outcome, SessionOutcome::Authenticated));
        assert_eq!(store.access_token().as_deref(), Some("revived"));
    }

    #[tokio::test]
    async fn active_token_skips_refresh() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"exp": 4102444800}"#);
        let token = format!("h.{payload}.s");
        let store = FakeStore::new(Some(&token), Some("r"));
        let outcome = resolve_mount_session(&store, NOW_MS, &gate(), refuse).await;
        assert!(matches!(outcome, SessionOutcome::Authenticated));
    }
}
