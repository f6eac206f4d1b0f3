//! Gateway API key management screen.

use crate::components::{DashboardLayout, Spinner};
use gateway_client::types::{ApiKey, CreateApiKeyRequest};
use gateway_frontend_common::AuthorizedApi;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(ApiKeysPage)]
pub fn api_keys_page() -> Html {
    html! {
        <DashboardLayout>
            <ApiKeysContent />
        </DashboardLayout>
    }
}

#[function_component(ApiKeysContent)]
fn api_keys_content() -> Html {
    let keys = use_state(Vec::<ApiKey>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let name = use_state(String::new);
    // Full key material is only present in the create response; keep it
    // around until the user dismisses it.
    let created = use_state(|| None::<ApiKey>);

    let reload = {
        let keys = keys.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            let keys = keys.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                loading.set(true);
                match AuthorizedApi::from_session() {
                    Ok(api) => match api.api_keys().await {
                        Ok(list) => keys.set(list),
                        Err(e) => error.set(Some(format!("Failed to fetch API keys: {e}"))),
                    },
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| reload.emit(()));
    }

    let on_name_input = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            name.set(element.value());
        })
    };

    let onsubmit = {
        let name = name.clone();
        let created = created.clone();
        let error = error.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let key_name = name.trim().to_string();
            if key_name.is_empty() {
                return;
            }

            let name = name.clone();
            let created = created.clone();
            let error = error.clone();
            let reload = reload.clone();
            spawn_local(async move {
                error.set(None);
                match AuthorizedApi::from_session() {
                    Ok(api) => match api.create_api_key(&CreateApiKeyRequest { name: key_name }).await {
                        Ok(key) => {
                            name.set(String::new());
                            created.set(Some(key));
                            reload.emit(());
                        }
                        Err(e) => error.set(Some(format!("Failed to create API key: {e}"))),
                    },
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let on_revoke = {
        let error = error.clone();
        let reload = reload.clone();
        Callback::from(move |id: String| {
            let error = error.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match AuthorizedApi::from_session() {
                    Ok(api) => match api.revoke_api_key(&id).await {
                        Ok(()) => reload.emit(()),
                        Err(e) => error.set(Some(format!("Failed to revoke API key: {e}"))),
                    },
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let dismiss_created = {
        let created = created.clone();
        Callback::from(move |_| created.set(None))
    };

    html! {
        <div>
            <h1 class="text-2xl font-bold mb-4">{"API Keys"}</h1>

            if let Some(message) = (*error).clone() {
                <div class="mb-4 px-3 py-2 rounded-md bg-red-50 text-red-700 text-sm">{message}</div>
            }

            if let Some(key) = (*created).clone() {
                <div class="mb-4 px-4 py-3 rounded-md bg-green-50 border border-green-200 text-sm">
                    <p class="text-green-800 font-medium mb-1">
                        {format!("Key \"{}\" created. Copy it now; it will not be shown again.", key.name)}
                    </p>
                    <code class="block bg-white px-2 py-1 rounded border border-green-200 font-mono text-xs break-all">
                        {key.key.unwrap_or_default()}
                    </code>
                    <button class="mt-2 text-green-700 hover:underline" onclick={dismiss_created}>
                        {"Dismiss"}
                    </button>
                </div>
            }

            <form class="bg-white rounded-lg border border-gray-200 p-4 mb-6 flex gap-3 items-end" {onsubmit}>
                <div class="flex-1">
                    <label class="block text-xs text-gray-500 mb-1">{"Key name"}</label>
                    <input
                        type="text"
                        class="block w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                        placeholder="e.g. production-bot"
                        value={(*name).clone()}
                        oninput={on_name_input}
                    />
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 bg-blue-600 text-white text-sm font-medium rounded-md hover:bg-blue-700"
                >
                    {"Create Key"}
                </button>
            </form>

            if *loading {
                <Spinner />
            } else if keys.is_empty() {
                <p class="text-sm text-gray-500">{"No API keys issued yet."}</p>
            } else {
                <div class="bg-white rounded-lg border border-gray-200 overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{"Name"}</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{"Created"}</th>
                                <th class="px-4 py-2"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            {keys.iter().map(|key| {
                                let revoke = {
                                    let id = key.id.clone();
                                    let on_revoke = on_revoke.clone();
                                    Callback::from(move |_| on_revoke.emit(id.clone()))
                                };
                                html! {
                                    <tr key={key.id.clone()}>
                                        <td class="px-4 py-2 text-sm font-medium">{key.name.clone()}</td>
                                        <td class="px-4 py-2 text-sm text-gray-500">{key.created_at.clone()}</td>
                                        <td class="px-4 py-2 text-right text-sm">
                                            <button class="text-red-600 hover:underline" onclick={revoke}>
                                                {"Revoke"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }).collect::<Html>()}
                        </tbody>
                    </table>
                </div>
            }
        </div>
    }
}
