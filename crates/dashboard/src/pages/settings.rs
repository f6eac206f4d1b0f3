//! Account settings screen: password reset.

use crate::components::DashboardLayout;
use gateway_client::types::PasswordResetRequest;
use gateway_frontend_common::services::auth::validate_password;
use gateway_frontend_common::AuthorizedApi;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    html! {
        <DashboardLayout>
            <SettingsContent />
        </DashboardLayout>
    }
}

#[function_component(SettingsContent)]
fn settings_content() -> Html {
    let old_password = use_state(String::new);
    let new_password = use_state(String::new);
    let rule_errors = use_state(Vec::<String>::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| false);
    let busy = use_state(|| false);

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            state.set(element.value());
        })
    };

    let onsubmit = {
        let old_password = old_password.clone();
        let new_password = new_password.clone();
        let rule_errors = rule_errors.clone();
        let error = error.clone();
        let success = success.clone();
        let busy = busy.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }

            let rules = validate_password(&new_password);
            if !rules.is_empty() {
                rule_errors.set(rules);
                return;
            }
            rule_errors.set(Vec::new());

            let request = PasswordResetRequest {
                old_password: (*old_password).clone(),
                new_password: (*new_password).clone(),
            };

            let old_password = old_password.clone();
            let new_password = new_password.clone();
            let error = error.clone();
            let success = success.clone();
            let busy = busy.clone();
            spawn_local(async move {
                busy.set(true);
                error.set(None);
                success.set(false);
                match AuthorizedApi::from_session() {
                    Ok(api) => match api.reset_password(&request).await {
                        Ok(()) => {
                            old_password.set(String::new());
                            new_password.set(String::new());
                            success.set(true);
                        }
                        Err(e) => error.set(Some(format!("Failed to reset password: {e}"))),
                    },
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="max-w-md">
            <h1 class="text-2xl font-bold mb-4">{"Settings"}</h1>

            if let Some(message) = (*error).clone() {
                <div class="mb-4 px-3 py-2 rounded-md bg-red-50 text-red-700 text-sm">{message}</div>
            }
            if *success {
                <div class="mb-4 px-3 py-2 rounded-md bg-green-50 text-green-700 text-sm">
                    {"Password updated."}
                </div>
            }

            <form class="bg-white rounded-lg border border-gray-200 p-6 space-y-4" {onsubmit}>
                <h2 class="font-semibold">{"Change password"}</h2>
                <div>
                    <label class="block text-xs text-gray-500 mb-1">{"Current password"}</label>
                    <input
                        type="password"
                        class="block w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                        required=true
                        value={(*old_password).clone()}
                        oninput={bind(&old_password)}
                    />
                </div>
                <div>
                    <label class="block text-xs text-gray-500 mb-1">{"New password"}</label>
                    <input
                        type="password"
                        class="block w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                        required=true
                        value={(*new_password).clone()}
                        oninput={bind(&new_password)}
                    />
                    if !rule_errors.is_empty() {
                        <ul class="mt-2 text-xs text-red-600 space-y-1">
                            {rule_errors.iter().map(|rule| html! {
                                <li>{rule.clone()}</li>
                            }).collect::<Html>()}
                        </ul>
                    }
                </div>
                <button
                    type="submit"
                    disabled={*busy}
                    class="px-4 py-2 bg-blue-600 text-white text-sm font-medium rounded-md hover:bg-blue-700 disabled:opacity-50"
                >
                    {"Update Password"}
                </button>
            </form>
        </div>
    }
}
