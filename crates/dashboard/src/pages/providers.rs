//! Provider credential management screen.

use crate::components::{DashboardLayout, Spinner};
use gateway_client::types::{CreateProviderRequest, ProviderKey, UpdateProviderRequest};
use gateway_frontend_common::AuthorizedApi;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Provider keys are secrets; listings only ever show the edges.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "•".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}

#[function_component(ProvidersPage)]
pub fn providers_page() -> Html {
    html! {
        <DashboardLayout>
            <ProvidersContent />
        </DashboardLayout>
    }
}

#[function_component(ProvidersContent)]
fn providers_content() -> Html {
    let providers = use_state(Vec::<ProviderKey>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let provider_name = use_state(String::new);
    let api_key = use_state(String::new);
    let editing = use_state(|| None::<String>);

    let reload = {
        let providers = providers.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            let providers = providers.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                loading.set(true);
                match AuthorizedApi::from_session() {
                    Ok(api) => match api.providers().await {
                        Ok(list) => providers.set(list),
                        Err(e) => error.set(Some(format!("Failed to fetch providers: {e}"))),
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

    let bind = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            state.set(element.value());
        })
    };

    let onsubmit = {
        let provider_name = provider_name.clone();
        let api_key = api_key.clone();
        let editing = editing.clone();
        let error = error.clone();
        let reload = reload.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let name = provider_name.trim().to_string();
            let key = api_key.trim().to_string();
            if name.is_empty() || key.is_empty() {
                return;
            }

            let provider_name = provider_name.clone();
            let api_key = api_key.clone();
            let editing = editing.clone();
            let error = error.clone();
            let reload = reload.clone();
            spawn_local(async move {
                error.set(None);
                let api = match AuthorizedApi::from_session() {
                    Ok(api) => api,
                    Err(e) => {
                        error.set(Some(e.to_string()));
                        return;
                    }
                };

                let result = match (*editing).clone() {
                    Some(id) => api
                        .update_provider(
                            &id,
                            &UpdateProviderRequest {
                                provider: Some(name),
                                api_key: Some(key),
                                name: None,
                            },
                        )
                        .await
                        .map(|_| ()),
                    None => api
                        .create_provider(&CreateProviderRequest {
                            provider: name,
                            api_key: key,
                        })
                        .await
                        .map(|_| ()),
                };

                match result {
                    Ok(()) => {
                        provider_name.set(String::new());
                        api_key.set(String::new());
                        editing.set(None);
                        reload.emit(());
                    }
                    Err(e) => error.set(Some(format!("Failed to save provider: {e}"))),
                }
            });
        })
    };

    let on_edit = {
        let provider_name = provider_name.clone();
        let api_key = api_key.clone();
        let editing = editing.clone();
        Callback::from(move |provider: ProviderKey| {
            provider_name.set(provider.provider.clone());
            api_key.set(provider.api_key.clone());
            editing.set(Some(provider.id));
        })
    };

    let on_delete = {
        let error = error.clone();
        let reload = reload.clone();
        Callback::from(move |id: String| {
            let error = error.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match AuthorizedApi::from_session() {
                    Ok(api) => match api.delete_provider(&id).await {
                        Ok(()) => reload.emit(()),
                        Err(e) => error.set(Some(format!("Failed to delete provider: {e}"))),
                    },
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    html! {
        <div>
            <h1 class="text-2xl font-bold mb-4">{"Providers"}</h1>

            if let Some(message) = (*error).clone() {
                <div class="mb-4 px-3 py-2 rounded-md bg-red-50 text-red-700 text-sm">{message}</div>
            }

            <form class="bg-white rounded-lg border border-gray-200 p-4 mb-6 flex flex-wrap gap-3 items-end" {onsubmit}>
                <div class="flex-1 min-w-40">
                    <label class="block text-xs text-gray-500 mb-1">{"Provider"}</label>
                    <input
                        type="text"
                        class="block w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                        placeholder="openai, anthropic, ..."
                        value={(*provider_name).clone()}
                        oninput={bind(&provider_name)}
                    />
                </div>
                <div class="flex-1 min-w-60">
                    <label class="block text-xs text-gray-500 mb-1">{"API key"}</label>
                    <input
                        type="password"
                        class="block w-full px-3 py-2 border border-gray-300 rounded-md text-sm"
                        placeholder="sk-..."
                        value={(*api_key).clone()}
                        oninput={bind(&api_key)}
                    />
                </div>
                <button
                    type="submit"
                    class="px-4 py-2 bg-blue-600 text-white text-sm font-medium rounded-md hover:bg-blue-700"
                >
                    {if editing.is_some() { "Update" } else { "Add Provider" }}
                </button>
            </form>

            if *loading {
                <Spinner />
            } else if providers.is_empty() {
                <p class="text-sm text-gray-500">{"No provider keys stored yet."}</p>
            } else {
                <div class="bg-white rounded-lg border border-gray-200 overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{"Provider"}</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{"Key"}</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{"Created"}</th>
                                <th class="px-4 py-2"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            {providers.iter().map(|provider| {
                                let edit = {
                                    let provider = provider.clone();
                                    let on_edit = on_edit.clone();
                                    Callback::from(move |_| on_edit.emit(provider.clone()))
                                };
                                let delete = {
                                    let id = provider.id.clone();
                                    let on_delete = on_delete.clone();
                                    Callback::from(move |_| on_delete.emit(id.clone()))
                                };
                                html! {
                                    <tr key={provider.id.clone()}>
                                        <td class="px-4 py-2 text-sm font-medium">{provider.provider.clone()}</td>
                                        <td class="px-4 py-2 text-sm font-mono text-gray-500">{mask_key(&provider.api_key)}</td>
                                        <td class="px-4 py-2 text-sm text-gray-500">{provider.created_at.clone()}</td>
                                        <td class="px-4 py-2 text-right text-sm space-x-3">
                                            <button class="text-blue-600 hover:underline" onclick={edit}>{"Edit"}</button>
                                            <button class="text-red-600 hover:underline" onclick={delete}>{"Delete"}</button>
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

#[cfg(test)]
mod tests {
    use super::mask_key;

    #[test]
    fn masks_middle_of_long_keys() {
        assert_eq!(mask_key("sk-abcdefghijklmnop"), "sk-a…mnop");
    }

    #[test]
    fn short_keys_are_fully_hidden() {
        assert_eq!(mask_key("tiny"), "••••");
    }
}
