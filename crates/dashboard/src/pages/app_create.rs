//! App creation screen.

use crate::app::Route;
use crate::components::DashboardLayout;
use gateway_client::types::CreateAppRequest;
use gateway_frontend_common::AuthorizedApi;
use serde_json::json;
use std::collections::BTreeSet;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(AppCreatePage)]
pub fn app_create_page() -> Html {
    html! {
        <DashboardLayout>
            <AppCreateContent />
        </DashboardLayout>
    }
}

#[function_component(AppCreateContent)]
fn app_create_content() -> Html {
    let name = use_state(String::new);
    let welcome_message = use_state(|| "Hello! How can I help you today?".to_string());
    let selected_models = use_state(BTreeSet::<String>::new);
    let model_choices = use_state(Vec::<String>::new);
    let error = use_state(|| None::<String>);
    let busy = use_state(|| false);
    let navigator = use_navigator().expect("navigator available inside router");

    // Model choices come from the active entries of the catalog.
    {
        let model_choices = model_choices.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match AuthorizedApi::from_session() {
                    Ok(api) => match api.models(None, None).await {
                        Ok(response) => model_choices.set(
                            response
                                .models
                                .into_iter()
                                .filter(|model| model.active)
                                .map(|model| model.model_name)
                                .collect(),
                        ),
                        Err(e) => error.set(Some(format!("Failed to fetch models: {e}"))),
                    },
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        });
    }

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            state.set(element.value());
        })
    };

    let on_toggle_model = {
        let selected_models = selected_models.clone();
        Callback::from(move |model: String| {
            let mut next = (*selected_models).clone();
            if !next.remove(&model) {
                next.insert(model);
            }
            selected_models.set(next);
        })
    };

    let onsubmit = {
        let name = name.clone();
        let welcome_message = welcome_message.clone();
        let selected_models = selected_models.clone();
        let error = error.clone();
        let busy = busy.clone();
        let navigator = navigator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *busy {
                return;
            }
            let app_name = name.trim().to_string();
            if app_name.is_empty() {
                error.set(Some("App name is required".to_string()));
                return;
            }
            if selected_models.is_empty() {
                error.set(Some("Select at least one model".to_string()));
                return;
            }

            let request = CreateAppRequest {
                name: app_name,
                supported_models: selected_models.iter().cloned().collect(),
                config: json!({ "welcome_message": *welcome_message }),
            };

            let error = error.clone();
            let busy = busy.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                busy.set(true);
                error.set(None);
                match AuthorizedApi::from_session() {
                    Ok(api) => match api.create_app(&request).await {
                        Ok(_) => navigator.push(&Route::Apps),
                        Err(e) => error.set(Some(format!("Failed to create app: {e}"))),
                    },
                    Err(e) => error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        })
    };

    html! {
        <div class="max-w-2xl">
            <h1 class="text-2xl font-bold mb-4">{"New App"}</h1>

            if let Some(message) = (*error).clone() {
                <div class="mb-4 px-3 py-2 rounded-md bg-red-50 text-red-700 text-sm">{message}</div>
            }

            <form class="bg-white rounded-lg border border-gray-200 p-6 space-y-4" {onsubmit}>
                <div>
                    <label class="block text-xs text-gray-500 mb-1">{"Name"}</label>
                    <input
                        type="text"
                        class="block w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                        placeholder="e.g. Support Bot"
                        value={(*name).clone()}
                        oninput={bind(&name)}
                    />
                </div>
                <div>
                    <label class="block text-xs text-gray-500 mb-1">{"Welcome message"}</label>
                    <input
                        type="text"
                        class="block w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                        value={(*welcome_message).clone()}
                        oninput={bind(&welcome_message)}
                    />
                </div>
                <div>
                    <label class="block text-xs text-gray-500 mb-2">{"Supported models"}</label>
                    if model_choices.is_empty() {
                        <p class="text-sm text-gray-500">{"No active models available."}</p>
                    } else {
                        <div class="space-y-1">
                            {model_choices.iter().map(|model| {
                                let toggle = {
                                    let model = model.clone();
                                    let on_toggle_model = on_toggle_model.clone();
                                    Callback::from(move |_| on_toggle_model.emit(model.clone()))
                                };
                                html! {
                                    <label key={model.clone()} class="flex items-center gap-2 text-sm">
                                        <input
                                            type="checkbox"
                                            checked={selected_models.contains(model)}
                                            onchange={toggle}
                                        />
                                        {model.clone()}
                                    </label>
                                }
                            }).collect::<Html>()}
                        </div>
                    }
                </div>
                <button
                    type="submit"
                    disabled={*busy}
                    class="px-4 py-2 bg-blue-600 text-white text-sm font-medium rounded-md hover:bg-blue-700 disabled:opacity-50"
                >
                    {"Create App"}
                </button>
            </form>
        </div>
    }
}
