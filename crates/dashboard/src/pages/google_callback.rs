//! Google OAuth callback screen: exchanges the authorization code for
//! tokens and forwards into the dashboard.

use crate::app::Route;
use crate::components::Spinner;
use gateway_frontend_common::services::AuthApiService;
use wasm_bindgen_futures::spawn_local;
use web_sys::UrlSearchParams;
use yew::prelude::*;
use yew_router::prelude::*;

fn code_from_location() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get("code")
}

#[function_component(GoogleCallbackPage)]
pub fn google_callback_page() -> Html {
    let navigator = use_navigator().expect("navigator available inside router");

    use_effect_with((), move |_| {
        spawn_local(async move {
            let Some(code) = code_from_location() else {
                log::warn!("google callback reached without a code parameter");
                navigator.push(&Route::Auth);
                return;
            };

            let service = AuthApiService::new();
            match service.exchange_google_code(&code).await {
                Ok(tokens) if service.store_tokens(&tokens) => {
                    navigator.push(&Route::Dashboard);
                }
                Ok(_) => {
                    log::error!("browser storage unavailable during oauth callback");
                    navigator.push(&Route::Auth);
                }
                Err(message) => {
                    log::error!("google code exchange failed: {message}");
                    navigator.push(&Route::Auth);
                }
            }
        });
    });

    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50">
            <Spinner />
            <p class="mt-2 text-sm text-gray-500">{"Completing sign-in..."}</p>
        </div>
    }
}
