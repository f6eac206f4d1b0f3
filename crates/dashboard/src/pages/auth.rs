//! Sign-in / sign-up screen.

use crate::app::Route;
use gateway_frontend_common::services::auth::{validate_password, AuthApiService};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Copy, PartialEq)]
enum Mode {
    SignIn,
    SignUp,
}

fn input_class() -> &'static str {
    "block w-full px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-1 focus:ring-blue-500"
}

#[function_component(AuthPage)]
pub fn auth_page() -> Html {
    let mode = use_state(|| Mode::SignIn);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let firstname = use_state(String::new);
    let lastname = use_state(String::new);
    let error = use_state(|| None::<String>);
    let password_errors = use_state(Vec::<String>::new);
    let busy = use_state(|| false);
    let navigator = use_navigator().expect("navigator available inside router");

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            state.set(element.value());
        })
    };

    let on_switch = {
        let mode = mode.clone();
        let error = error.clone();
        let password_errors = password_errors.clone();
        Callback::from(move |next: Mode| {
            mode.set(next);
            error.set(None);
            password_errors.set(Vec::new());
        })
    };

    let onsubmit = {
        let mode = mode.clone();
        let email = email.clone();
        let password = password.clone();
        let firstname = firstname.clone();
        let lastname = lastname.clone();
        let error = error.clone();
        let password_errors = password_errors.clone();
        let busy = busy.clone();
        let navigator = navigator.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let signing_up = *mode == Mode::SignUp;
            if signing_up {
                let rule_errors = validate_password(&password);
                if !rule_errors.is_empty() {
                    password_errors.set(rule_errors);
                    return;
                }
            }
            password_errors.set(Vec::new());

            let email_value = (*email).clone();
            let password_value = (*password).clone();
            let firstname_value = (*firstname).clone();
            let lastname_value = (*lastname).clone();
            let error = error.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();

            spawn_local(async move {
                busy.set(true);
                error.set(None);
                let service = AuthApiService::new();

                let result = if signing_up {
                    service
                        .sign_up(firstname_value, lastname_value, email_value, password_value)
                        .await
                } else {
                    service.sign_in(email_value, password_value).await
                };

                match result {
                    Ok(tokens) => {
                        if service.store_tokens(&tokens) {
                            navigator.push(&Route::Dashboard);
                        } else {
                            error.set(Some("Browser storage is unavailable".to_string()));
                        }
                    }
                    Err(message) => {
                        log::error!("authentication failed: {message}");
                        error.set(Some(message));
                    }
                }
                busy.set(false);
            });
        })
    };

    let on_google = {
        let error = error.clone();
        Callback::from(move |_| {
            let error = error.clone();
            spawn_local(async move {
                match AuthApiService::new().google_login_url().await {
                    Ok(url) => {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href(&url);
                        }
                    }
                    Err(message) => {
                        log::error!("google login failed: {message}");
                        error.set(Some(message));
                    }
                }
            });
        })
    };

    let tab_class = |active: bool| {
        if active {
            "flex-1 py-2 text-sm font-medium text-blue-600 border-b-2 border-blue-600"
        } else {
            "flex-1 py-2 text-sm font-medium text-gray-500 hover:text-gray-700"
        }
    };

    html! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow p-8">
                <h1 class="text-2xl font-bold text-center mb-2">{"LLM Gateway"}</h1>
                <p class="text-sm text-gray-500 text-center mb-6">
                    {"Sign in to manage your apps, models and keys"}
                </p>

                <div class="flex border-b border-gray-200 mb-6">
                    <button
                        class={tab_class(*mode == Mode::SignIn)}
                        onclick={on_switch.reform(|_| Mode::SignIn)}
                    >
                        {"Sign In"}
                    </button>
                    <button
                        class={tab_class(*mode == Mode::SignUp)}
                        onclick={on_switch.reform(|_| Mode::SignUp)}
                    >
                        {"Sign Up"}
                    </button>
                </div>

                if let Some(message) = (*error).clone() {
                    <div class="mb-4 px-3 py-2 rounded-md bg-red-50 text-red-700 text-sm">
                        {message}
                    </div>
                }

                <form class="space-y-4" {onsubmit}>
                    if *mode == Mode::SignUp {
                        <div class="grid grid-cols-2 gap-3">
                            <input
                                type="text"
                                class={input_class()}
                                placeholder="First name"
                                required=true
                                value={(*firstname).clone()}
                                oninput={bind(&firstname)}
                            />
                            <input
                                type="text"
                                class={input_class()}
                                placeholder="Last name"
                                required=true
                                value={(*lastname).clone()}
                                oninput={bind(&lastname)}
                            />
                        </div>
                    }
                    <input
                        type="email"
                        class={input_class()}
                        placeholder="Email"
                        required=true
                        value={(*email).clone()}
                        oninput={bind(&email)}
                    />
                    <div>
                        <input
                            type="password"
                            class={input_class()}
                            placeholder="Password"
                            required=true
                            value={(*password).clone()}
                            oninput={bind(&password)}
                        />
                        if !password_errors.is_empty() {
                            <ul class="mt-2 text-xs text-red-600 space-y-1">
                                {password_errors.iter().map(|rule| html! {
                                    <li>{rule.clone()}</li>
                                }).collect::<Html>()}
                            </ul>
                        }
                    </div>
                    <button
                        type="submit"
                        disabled={*busy}
                        class="w-full py-2 bg-blue-600 text-white text-sm font-medium rounded-md hover:bg-blue-700 disabled:opacity-50"
                    >
                        {if *mode == Mode::SignIn { "Sign In" } else { "Create Account" }}
                    </button>
                </form>

                <div class="mt-4">
                    <button
                        onclick={on_google}
                        class="w-full py-2 border border-gray-300 text-sm font-medium rounded-md hover:bg-gray-50"
                    >
                        {"Continue with Google"}
                    </button>
                </div>
            </div>
        </div>
    }
}
