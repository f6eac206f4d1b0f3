//! Model catalog screen with client-side filtering.

use crate::components::{DashboardLayout, Spinner};
use gateway_client::types::AiModel;
use gateway_frontend_common::AuthorizedApi;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Case-insensitive name substring match plus an exact provider match.
/// An empty provider filter matches everything.
fn filter_models<'a>(models: &'a [AiModel], name_query: &str, provider: &str) -> Vec<&'a AiModel> {
    let name_query = name_query.trim().to_lowercase();
    models
        .iter()
        .filter(|model| {
            (name_query.is_empty() || model.model_name.to_lowercase().contains(&name_query))
                && (provider.is_empty() || model.provider == provider)
        })
        .collect()
}

#[function_component(ModelsPage)]
pub fn models_page() -> Html {
    html! {
        <DashboardLayout>
            <ModelsContent />
        </DashboardLayout>
    }
}

#[function_component(ModelsContent)]
fn models_content() -> Html {
    let models = use_state(Vec::<AiModel>::new);
    let available_providers = use_state(Vec::<String>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let name_filter = use_state(String::new);
    let provider_filter = use_state(String::new);

    {
        let models = models.clone();
        let available_providers = available_providers.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match AuthorizedApi::from_session() {
                    Ok(api) => match api.models(None, None).await {
                        Ok(response) => {
                            log::debug!("fetched {} models", response.count);
                            models.set(response.models);
                            available_providers.set(response.available_providers);
                        }
                        Err(e) => error.set(Some(format!("Failed to fetch models: {e}"))),
                    },
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        });
    }

    let on_name_input = {
        let name_filter = name_filter.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            name_filter.set(element.value());
        })
    };

    let on_provider_change = {
        let provider_filter = provider_filter.clone();
        Callback::from(move |e: Event| {
            let element: HtmlSelectElement = e.target_unchecked_into();
            provider_filter.set(element.value());
        })
    };

    let visible = filter_models(&models, &name_filter, &provider_filter);

    html! {
        <div>
            <h1 class="text-2xl font-bold mb-4">{"Models"}</h1>

            if let Some(message) = (*error).clone() {
                <div class="mb-4 px-3 py-2 rounded-md bg-red-50 text-red-700 text-sm">{message}</div>
            }

            <div class="flex gap-3 mb-4">
                <input
                    type="text"
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm"
                    placeholder="Filter by name..."
                    value={(*name_filter).clone()}
                    oninput={on_name_input}
                />
                <select
                    class="px-3 py-2 border border-gray-300 rounded-md text-sm bg-white"
                    onchange={on_provider_change}
                >
                    <option value="" selected={provider_filter.is_empty()}>{"All providers"}</option>
                    {available_providers.iter().map(|provider| html! {
                        <option
                            value={provider.clone()}
                            selected={*provider_filter == *provider}
                        >
                            {provider.clone()}
                        </option>
                    }).collect::<Html>()}
                </select>
            </div>

            if *loading {
                <Spinner />
            } else if visible.is_empty() {
                <p class="text-sm text-gray-500">{"No models match the current filters."}</p>
            } else {
                <div class="bg-white rounded-lg border border-gray-200 overflow-hidden">
                    <table class="min-w-full divide-y divide-gray-200">
                        <thead class="bg-gray-50">
                            <tr>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{"Model"}</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{"Provider"}</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{"Developer"}</th>
                                <th class="px-4 py-2 text-left text-xs font-medium text-gray-500 uppercase">{"Status"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-gray-200">
                            {visible.iter().map(|model| html! {
                                <tr key={model.model_name.clone()}>
                                    <td class="px-4 py-2 text-sm font-medium">{model.model_name.clone()}</td>
                                    <td class="px-4 py-2 text-sm text-gray-500">{model.provider.clone()}</td>
                                    <td class="px-4 py-2 text-sm text-gray-500">{model.developer.clone()}</td>
                                    <td class="px-4 py-2 text-sm">
                                        if model.active {
                                            <span class="px-2 py-0.5 rounded-full bg-green-100 text-green-700 text-xs">{"active"}</span>
                                        } else {
                                            <span class="px-2 py-0.5 rounded-full bg-gray-100 text-gray-500 text-xs">{"inactive"}</span>
                                        }
                                    </td>
                                </tr>
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
    use super::*;

    fn catalog() -> Vec<AiModel> {
        vec![
            AiModel {
                model_name: "gpt-4o".into(),
                provider: "openai".into(),
                developer: "OpenAI".into(),
                active: true,
            },
            AiModel {
                model_name: "claude-sonnet".into(),
                provider: "anthropic".into(),
                developer: "Anthropic".into(),
                active: true,
            },
            AiModel {
                model_name: "gpt-3.5-turbo".into(),
                provider: "openai".into(),
                developer: "OpenAI".into(),
                active: false,
            },
        ]
    }

    #[test]
    fn empty_filters_match_everything() {
        assert_eq!(filter_models(&catalog(), "", "").len(), 3);
    }

    #[test]
    fn name_filter_is_case_insensitive_substring() {
        let models = catalog();
        let visible = filter_models(&models, "GPT", "");
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|m| m.model_name.starts_with("gpt")));
    }

    #[test]
    fn provider_filter_is_exact() {
        let models = catalog();
        let visible = filter_models(&models, "", "anthropic");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].model_name, "claude-sonnet");
    }

    #[test]
    fn filters_combine() {
        let models = catalog();
        let visible = filter_models(&models, "turbo", "openai");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].model_name, "gpt-3.5-turbo");
    }
}
